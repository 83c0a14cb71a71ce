//! Language type: validated language tag with a display name
//!
//! Language tags are validated against a static registry of known tags.
//! The registry maps a normalized (lowercase) tag to the language's display
//! name; display columns show the name, never the tag.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// Registry of known language tags (normalized tag -> display name)
static LANGUAGES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("da", "Danish"),
        ("de", "German"),
        ("de-de", "German (Germany)"),
        ("en", "English"),
        ("en-gb", "English (United Kingdom)"),
        ("en-us", "English (United States)"),
        ("es", "Spanish"),
        ("es-es", "Spanish (Spain)"),
        ("fi", "Finnish"),
        ("fr", "French"),
        ("fr-fr", "French (France)"),
        ("it", "Italian"),
        ("ja", "Japanese"),
        ("ja-jp", "Japanese (Japan)"),
        ("nb", "Norwegian (Bokmål)"),
        ("nl", "Dutch"),
        ("pl", "Polish"),
        ("pt", "Portuguese"),
        ("pt-br", "Portuguese (Brazil)"),
        ("ru", "Russian"),
        ("sv", "Swedish"),
        ("zh-cn", "Chinese (Simplified)"),
    ])
});

/// A validated language
///
/// Construction goes through [`Language::parse`], so a `Language` value
/// always carries a registered tag and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    tag: String,
    name: String,
}

impl Language {
    /// Parse a language tag against the registry
    ///
    /// Tags match case-insensitively (`"EN-US"` parses as `"en-us"`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLanguage`] for empty or unregistered tags.
    pub fn parse(code: &str) -> Result<Language> {
        let tag = code.trim().to_ascii_lowercase();
        match LANGUAGES.get(tag.as_str()) {
            Some(name) => Ok(Language {
                tag,
                name: (*name).to_string(),
            }),
            None => Err(Error::UnknownLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// The default language records fall back to
    pub fn english() -> Language {
        Language {
            tag: "en".to_string(),
            name: "English".to_string(),
        }
    }

    /// The normalized language tag (e.g. "en-us")
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The human-readable display name (e.g. "English (United States)")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All registered tags, in lexical order
    pub fn known_tags() -> impl Iterator<Item = &'static str> {
        LANGUAGES.keys().copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tag() {
        let lang = Language::parse("en").unwrap();
        assert_eq!(lang.tag(), "en");
        assert_eq!(lang.name(), "English");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let lang = Language::parse("EN-US").unwrap();
        assert_eq!(lang.tag(), "en-us");
        assert_eq!(lang.name(), "English (United States)");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let lang = Language::parse("  da ").unwrap();
        assert_eq!(lang.tag(), "da");
        assert_eq!(lang.name(), "Danish");
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = Language::parse("xx-yy").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownLanguage {
                code: "xx-yy".to_string()
            }
        );
        assert!(Language::parse("").is_err());
    }

    #[test]
    fn test_english_matches_registry() {
        let direct = Language::english();
        let parsed = Language::parse("en").unwrap();
        assert_eq!(direct, parsed);
    }

    #[test]
    fn test_known_tags_are_normalized() {
        for tag in Language::known_tags() {
            assert_eq!(tag, tag.to_ascii_lowercase());
            assert!(Language::parse(tag).is_ok());
        }
    }

    #[test]
    fn test_display_shows_tag() {
        let lang = Language::parse("da").unwrap();
        assert_eq!(lang.to_string(), "da");
    }
}
