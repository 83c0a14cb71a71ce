//! Field rendering
//!
//! Turns one requested column into display text. Dispatch order: the closed
//! set of reserved/meta columns first, then generic field lookup over the
//! record's typed fields. A leading `@` on the column name forces field
//! lookup even when the name collides with a reserved column.
//!
//! Date-bearing columns render as a [`Rendered::Paired`] value so the
//! consumer can show the formatted text with the raw value as secondary.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use tabula_core::{ContentRecord, ContentStore, Field, FieldKind, Link, LinkKind};

use crate::row::Rendered;
use crate::text::{clip, strip_tags};
use crate::workflow::WorkflowSummarizer;

/// Short date display pattern
const SHORT_DATE_FORMAT: &str = "%d/%m/%Y";
/// Short time display pattern
const SHORT_TIME_FORMAT: &str = "%H:%M";
/// Display pattern for the lock timestamp
const LOCK_DATE_FORMAT: &str = "%d/%m/%y %H:%M";

/// Reserved column names, for UI population
///
/// Every name here has a dedicated formatting rule; anything else is a
/// field lookup.
pub const SUPPORTED_COLUMNS: [&str; 19] = [
    "guid",
    "childrencount",
    "created",
    "createdby",
    "displayname",
    "name",
    "language",
    "lockedby",
    "owner",
    "path",
    "template",
    "updated",
    "updatedby",
    "version",
    "versions",
    "workflow",
    "hasclones",
    "isclone",
    "sourceitempath",
];

/// Renders one column of a record to display text
pub struct FieldRenderer<'a, S> {
    store: &'a S,
    max_length: usize,
}

impl<'a, S: ContentStore> FieldRenderer<'a, S> {
    /// Create a renderer with a resolved length budget
    pub fn new(store: &'a S, max_length: usize) -> Self {
        Self { store, max_length }
    }

    /// Render the column `name` of `record`
    ///
    /// Never fails: misses degrade to the raw value or the empty
    /// placeholder.
    pub fn render(&self, name: &str, record: &ContentRecord) -> Rendered {
        // leading @ forces a field lookup over a reserved name
        if let Some(forced) = name.strip_prefix('@') {
            return self.field_text(forced, record);
        }

        match name.to_ascii_lowercase().as_str() {
            "guid" => Rendered::plain(record.id.to_string()),
            "name" => Rendered::plain(record.name.clone()),
            "displayname" => Rendered::plain(record.display_name.clone()),
            "created" => stat_date(record.stat.created),
            "createdby" => Rendered::plain(record.stat.created_by.clone()),
            "updated" => stat_date(record.stat.updated),
            "updatedby" => Rendered::plain(record.stat.updated_by.clone()),
            "owner" => Rendered::plain(record.stat.owner.clone()),
            "lockedby" => Rendered::plain(lock_text(record)),
            "template" => Rendered::plain(record.template.clone()),
            "path" => Rendered::plain(record.path.clone()),
            "workflow" => {
                Rendered::plain(WorkflowSummarizer::new(self.store).summarize(record))
            }
            "childrencount" => Rendered::plain(record.child_count.to_string()),
            "version" => Rendered::plain(record.version.to_string()),
            "versions" => {
                Rendered::plain(self.store.version_numbers(record).len().to_string())
            }
            "language" => Rendered::plain(record.language.name().to_string()),
            "isclone" => Rendered::plain(record.is_clone().to_string()),
            "hasclones" => Rendered::plain(record.has_clones.to_string()),
            "sourceitempath" => self.source_path(record),
            _ => self.field_text(name, record),
        }
    }

    /// Path of the record this one was cloned from
    fn source_path(&self, record: &ContentRecord) -> Rendered {
        record
            .clone_of
            .and_then(|source| self.store.record_by_id(&source))
            .map(|source| Rendered::plain(source.path))
            .unwrap_or_else(Rendered::empty)
    }

    /// Generic field lookup with per-kind rendering
    fn field_text(&self, name: &str, record: &ContentRecord) -> Rendered {
        let Some(field) = record.field(name) else {
            return Rendered::empty();
        };
        if field.value.is_empty() {
            return Rendered::empty();
        }

        match &field.kind {
            FieldKind::Date | FieldKind::DateTime => match parse_stored_date(&field.value) {
                Some(at) => {
                    let display = if field.kind == FieldKind::DateTime {
                        format!(
                            "{} {}",
                            at.format(SHORT_DATE_FORMAT),
                            at.format(SHORT_TIME_FORMAT)
                        )
                    } else {
                        at.format(SHORT_DATE_FORMAT).to_string()
                    };
                    Rendered::Paired {
                        display,
                        raw: field.value.clone(),
                    }
                }
                None => self.default_text(&field.value),
            },
            FieldKind::Reference => match self.store.resolve_target(field) {
                Some(target) => Rendered::plain(target.name),
                None => self.default_text(&field.value),
            },
            FieldKind::MultiList => {
                let names: Vec<String> = field
                    .member_ids()
                    .iter()
                    .filter_map(|id| self.store.record_by_id(id))
                    .map(|member| member.name)
                    .collect();
                Rendered::plain(clip(&names.join(", "), self.max_length))
            }
            FieldKind::Link => match Link::parse(&field.value) {
                Ok(link) => self.link_text(field, &link),
                Err(_) => self.default_text(&field.value),
            },
            FieldKind::Text | FieldKind::RichText | FieldKind::Other(_) => {
                self.default_text(&field.value)
            }
        }
    }

    /// Link rendering by kind
    fn link_text(&self, field: &Field, link: &Link) -> Rendered {
        match link.kind {
            LinkKind::Internal | LinkKind::Media => match self.store.resolve_link(field) {
                Some(target) => Rendered::plain(target.path),
                None if link.url.is_empty() => Rendered::plain("[undefined]"),
                None => Rendered::plain(format!("[broken link] {}", link.url)),
            },
            LinkKind::External | LinkKind::Anchor | LinkKind::Mailto => {
                Rendered::plain(link.url.clone())
            }
            LinkKind::Javascript | LinkKind::Other => Rendered::plain(link.text.clone()),
        }
    }

    /// Default rule: strip markup, clip to the length budget
    fn default_text(&self, value: &str) -> Rendered {
        Rendered::plain(clip(&strip_tags(value), self.max_length))
    }
}

/// Lock status: `unlocked`, or owner plus lock time
fn lock_text(record: &ContentRecord) -> String {
    match &record.lock {
        Some(lock) if !lock.owner.is_empty() => {
            format!("{} {}", lock.owner, lock.at.format(LOCK_DATE_FORMAT))
        }
        _ => "unlocked".to_string(),
    }
}

/// Statistic timestamps render as short date + time with the raw value
fn stat_date(at: Option<DateTime<Utc>>) -> Rendered {
    match at {
        Some(at) => Rendered::Paired {
            display: format!(
                "{} {}",
                at.format(SHORT_DATE_FORMAT),
                at.format(SHORT_TIME_FORMAT)
            ),
            raw: at.to_rfc3339(),
        },
        None => Rendered::plain(String::new()),
    }
}

/// Parse a stored date value
///
/// Accepts RFC 3339, the compact `yyyymmddThhmmss` form, and bare
/// `yyyy-mm-dd` dates (midnight).
fn parse_stored_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.with_timezone(&Utc));
    }
    for format in ["%Y%m%dT%H%M%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::EMPTY_TEXT;
    use chrono::TimeZone;
    use tabula_core::{Language, Lock, RecordId, VersionNumber};
    use tabula_store::MemoryStore;

    fn base_record() -> ContentRecord {
        let mut record = ContentRecord::new(
            RecordId::new(),
            "home",
            Language::english(),
            VersionNumber::FIRST,
        );
        record.display_name = "Home".to_string();
        record.path = "/content/home".to_string();
        record.template = "Page".to_string();
        record.child_count = 4;
        record
    }

    fn renderer(store: &MemoryStore) -> FieldRenderer<'_, MemoryStore> {
        FieldRenderer::new(store, 100)
    }

    #[test]
    fn test_reserved_simple_columns() {
        let store = MemoryStore::new();
        let record = base_record();
        let renderer = renderer(&store);

        assert_eq!(
            renderer.render("guid", &record),
            Rendered::plain(record.id.to_string())
        );
        assert_eq!(renderer.render("name", &record), Rendered::plain("home"));
        assert_eq!(
            renderer.render("displayname", &record),
            Rendered::plain("Home")
        );
        assert_eq!(
            renderer.render("path", &record),
            Rendered::plain("/content/home")
        );
        assert_eq!(
            renderer.render("template", &record),
            Rendered::plain("Page")
        );
        assert_eq!(
            renderer.render("childrencount", &record),
            Rendered::plain("4")
        );
        assert_eq!(renderer.render("version", &record), Rendered::plain("1"));
        assert_eq!(
            renderer.render("language", &record),
            Rendered::plain("English")
        );
        assert_eq!(renderer.render("isclone", &record), Rendered::plain("false"));
        assert_eq!(
            renderer.render("hasclones", &record),
            Rendered::plain("false")
        );
    }

    #[test]
    fn test_reserved_names_match_case_insensitively() {
        let store = MemoryStore::new();
        let record = base_record();
        assert_eq!(
            renderer(&store).render("DisplayName", &record),
            Rendered::plain("Home")
        );
    }

    #[test]
    fn test_lock_status() {
        let store = MemoryStore::new();
        let mut record = base_record();
        let renderer = renderer(&store);

        assert_eq!(
            renderer.render("lockedby", &record),
            Rendered::plain("unlocked")
        );

        record.lock = Some(Lock {
            owner: "bob".to_string(),
            at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap(),
        });
        assert_eq!(
            renderer.render("lockedby", &record),
            Rendered::plain("bob 02/01/24 03:04")
        );

        record.lock = Some(Lock {
            owner: String::new(),
            at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap(),
        });
        assert_eq!(
            renderer.render("lockedby", &record),
            Rendered::plain("unlocked")
        );
    }

    #[test]
    fn test_stat_dates_render_paired() {
        let store = MemoryStore::new();
        let mut record = base_record();
        record.stat.created = Some(Utc.with_ymd_and_hms(2023, 12, 24, 18, 30, 0).unwrap());
        record.stat.created_by = "alice".to_string();

        let renderer = renderer(&store);
        match renderer.render("created", &record) {
            Rendered::Paired { display, raw } => {
                assert_eq!(display, "24/12/2023 18:30");
                assert!(raw.starts_with("2023-12-24T18:30:00"));
            }
            other => panic!("expected paired value, got {other:?}"),
        }
        assert_eq!(
            renderer.render("createdby", &record),
            Rendered::plain("alice")
        );

        // missing statistic renders empty so the orchestrator can fall back
        assert_eq!(
            renderer.render("updated", &record),
            Rendered::plain(String::new())
        );
    }

    #[test]
    fn test_versions_column_counts_store_versions() {
        let store = MemoryStore::new();
        let id = RecordId::new();
        for number in [1u32, 2, 3] {
            store.insert(ContentRecord::new(
                id,
                "page",
                Language::english(),
                VersionNumber::new(number).unwrap(),
            ));
        }
        let record = store.record_by_id(&id).unwrap();
        assert_eq!(
            renderer(&store).render("versions", &record),
            Rendered::plain("3")
        );
    }

    #[test]
    fn test_source_path_column() {
        let store = MemoryStore::new();
        let mut source = base_record();
        source.path = "/content/original".to_string();
        store.insert(source.clone());

        let mut clone = base_record();
        clone.clone_of = Some(source.id);

        let renderer = renderer(&store);
        assert_eq!(
            renderer.render("sourceitempath", &clone),
            Rendered::plain("/content/original")
        );
        assert_eq!(renderer.render("isclone", &clone), Rendered::plain("true"));

        // no clone source: placeholder
        let plain = base_record();
        assert_eq!(renderer.render("sourceitempath", &plain), Rendered::empty());
    }

    #[test]
    fn test_missing_field_yields_placeholder() {
        let store = MemoryStore::new();
        let record = base_record();
        assert_eq!(
            renderer(&store).render("no such field", &record),
            Rendered::empty()
        );
    }

    #[test]
    fn test_escape_marker_forces_field_lookup() {
        let store = MemoryStore::new();
        let mut record = base_record();
        record
            .fields
            .push(Field::new("Version", FieldKind::Text, "custom value"));

        let renderer = renderer(&store);
        // unescaped: the reserved column wins
        assert_eq!(renderer.render("version", &record), Rendered::plain("1"));
        // escaped: the field of the same name wins
        assert_eq!(
            renderer.render("@version", &record),
            Rendered::plain("custom value")
        );
    }

    #[test]
    fn test_text_field_strips_tags_and_clips() {
        let store = MemoryStore::new();
        let mut record = base_record();
        record.fields.push(Field::new(
            "Body",
            FieldKind::RichText,
            "<p>a very long body text</p>",
        ));

        let renderer = FieldRenderer::new(&store, 10);
        assert_eq!(
            renderer.render("body", &record),
            Rendered::plain("a very lon...")
        );
    }

    #[test]
    fn test_date_field_renders_paired() {
        let store = MemoryStore::new();
        let mut record = base_record();
        record
            .fields
            .push(Field::new("Published", FieldKind::Date, "2024-03-15"));
        record.fields.push(Field::new(
            "Reviewed",
            FieldKind::DateTime,
            "20240315T091500",
        ));

        let renderer = renderer(&store);
        assert_eq!(
            renderer.render("published", &record),
            Rendered::Paired {
                display: "15/03/2024".to_string(),
                raw: "2024-03-15".to_string(),
            }
        );
        assert_eq!(
            renderer.render("reviewed", &record),
            Rendered::Paired {
                display: "15/03/2024 09:15".to_string(),
                raw: "20240315T091500".to_string(),
            }
        );
    }

    #[test]
    fn test_unparsable_date_falls_back_to_default_rule() {
        let store = MemoryStore::new();
        let mut record = base_record();
        record
            .fields
            .push(Field::new("Published", FieldKind::Date, "someday"));

        assert_eq!(
            renderer(&store).render("published", &record),
            Rendered::plain("someday")
        );
    }

    #[test]
    fn test_reference_field_shows_target_name() {
        let store = MemoryStore::new();
        let mut target = base_record();
        target.name = "author-page".to_string();
        store.insert(target.clone());

        let mut record = base_record();
        record.fields.push(Field::new(
            "Author",
            FieldKind::Reference,
            target.id.to_string(),
        ));

        assert_eq!(
            renderer(&store).render("author", &record),
            Rendered::plain("author-page")
        );
    }

    #[test]
    fn test_unresolved_reference_falls_back_to_raw_value() {
        let store = MemoryStore::new();
        let dangling = RecordId::new();
        let mut record = base_record();
        record.fields.push(Field::new(
            "Author",
            FieldKind::Reference,
            dangling.to_string(),
        ));

        assert_eq!(
            renderer(&store).render("author", &record),
            Rendered::plain(dangling.to_string())
        );
    }

    #[test]
    fn test_multilist_joins_member_names() {
        let store = MemoryStore::new();
        let mut names = Vec::new();
        let mut ids = Vec::new();
        for name in ["A", "B", "C"] {
            let mut member = base_record();
            member.name = name.to_string();
            names.push(name);
            ids.push(member.id.to_string());
            store.insert(member);
        }

        let mut record = base_record();
        record
            .fields
            .push(Field::new("Tags", FieldKind::MultiList, ids.join("|")));

        assert_eq!(
            renderer(&store).render("tags", &record),
            Rendered::plain("A, B, C")
        );
    }

    #[test]
    fn test_multilist_skips_dangling_members_and_clips() {
        let store = MemoryStore::new();
        let mut member = base_record();
        member.name = "Evergreen".to_string();
        store.insert(member.clone());

        let mut record = base_record();
        record.fields.push(Field::new(
            "Tags",
            FieldKind::MultiList,
            format!("{}|{}|{}", member.id, RecordId::new(), member.id),
        ));

        let renderer = FieldRenderer::new(&store, 12);
        assert_eq!(
            renderer.render("tags", &record),
            Rendered::plain("Evergreen, E...")
        );
    }

    #[test]
    fn test_internal_link_resolves_to_target_path() {
        let store = MemoryStore::new();
        let mut target = base_record();
        target.path = "/content/docs/intro".to_string();
        store.insert(target.clone());

        let mut record = base_record();
        record.fields.push(Field::new(
            "More",
            FieldKind::Link,
            format!(r#"{{"kind":"internal","url":"/docs/intro","target":"{}"}}"#, target.id),
        ));

        assert_eq!(
            renderer(&store).render("more", &record),
            Rendered::plain("/content/docs/intro")
        );
    }

    #[test]
    fn test_broken_and_undefined_links() {
        let store = MemoryStore::new();
        let mut record = base_record();
        record.fields.push(Field::new(
            "Empty",
            FieldKind::Link,
            r#"{"kind":"internal"}"#,
        ));
        record.fields.push(Field::new(
            "Broken",
            FieldKind::Link,
            r#"{"kind":"internal","url":"X"}"#,
        ));

        let renderer = renderer(&store);
        assert_eq!(
            renderer.render("empty", &record),
            Rendered::plain("[undefined]")
        );
        assert_eq!(
            renderer.render("broken", &record),
            Rendered::plain("[broken link] X")
        );
    }

    #[test]
    fn test_external_and_other_link_kinds() {
        let store = MemoryStore::new();
        let mut record = base_record();
        record.fields.push(Field::new(
            "Site",
            FieldKind::Link,
            r#"{"kind":"external","url":"https://example.org","text":"Example"}"#,
        ));
        record.fields.push(Field::new(
            "Mail",
            FieldKind::Link,
            r#"{"kind":"mailto","url":"mailto:bob@example.org","text":"Bob"}"#,
        ));
        record.fields.push(Field::new(
            "Script",
            FieldKind::Link,
            r#"{"kind":"javascript","url":"javascript:void(0)","text":"Click"}"#,
        ));

        let renderer = renderer(&store);
        assert_eq!(
            renderer.render("site", &record),
            Rendered::plain("https://example.org")
        );
        assert_eq!(
            renderer.render("mail", &record),
            Rendered::plain("mailto:bob@example.org")
        );
        assert_eq!(renderer.render("script", &record), Rendered::plain("Click"));
    }

    #[test]
    fn test_unparsable_link_falls_back_to_default_rule() {
        let store = MemoryStore::new();
        let mut record = base_record();
        record.fields.push(Field::new(
            "More",
            FieldKind::Link,
            "<link kind='internal'>",
        ));

        // markup is stripped by the default rule
        assert_eq!(
            renderer(&store).render("more", &record),
            Rendered::plain("")
        );
    }

    #[test]
    fn test_unrecognized_kind_uses_default_rule() {
        let store = MemoryStore::new();
        let mut record = base_record();
        record.fields.push(Field::new(
            "Flag",
            FieldKind::Other("tristate".to_string()),
            "maybe",
        ));

        assert_eq!(
            renderer(&store).render("flag", &record),
            Rendered::plain("maybe")
        );
    }

    #[test]
    fn test_supported_columns_all_reserved() {
        let store = MemoryStore::new();
        let record = base_record();
        let renderer = renderer(&store);
        for name in SUPPORTED_COLUMNS {
            // reserved columns never fall into field lookup, so a record
            // without fields still renders something for each of them
            let rendered = renderer.render(name, &record);
            assert!(
                !matches!(&rendered, Rendered::Plain(text) if text == EMPTY_TEXT)
                    || name == "sourceitempath"
                    || name == "workflow",
                "column {name} unexpectedly rendered the placeholder"
            );
        }
    }

    #[test]
    fn test_empty_field_value_yields_placeholder() {
        let store = MemoryStore::new();
        let mut record = base_record();
        record.fields.push(Field::new("Blank", FieldKind::Text, ""));

        assert_eq!(renderer(&store).render("blank", &record), Rendered::empty());
    }
}
