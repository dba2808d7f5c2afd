pub mod profile;
pub mod search;

use serde_json::Value;

use crate::merge::Merger;

const MINIPROFILE_TYPE: &str = "com.linkedin.voyager.identity.shared.MiniProfile";
const SEARCH_PROFILE_TYPE: &str = "com.linkedin.voyager.search.SearchProfile";

/// Per-run record tallies, reported in the command summary.
#[derive(Debug, Default)]
pub struct RecordCounts {
    pub profiles: usize,
    pub search_results: usize,
    pub skipped: usize,
}

/// Route each decoded record to its extractor by the `$type` discriminator.
/// Records with a missing or unrecognized type carry nothing we export and
/// are skipped without error.
pub fn classify_records(records: &[Value], merger: &mut Merger) -> RecordCounts {
    let mut counts = RecordCounts::default();
    for record in records {
        match record.get("$type").and_then(Value::as_str) {
            Some(MINIPROFILE_TYPE) => {
                profile::extract(record, merger);
                counts.profiles += 1;
            }
            Some(SEARCH_PROFILE_TYPE) => {
                search::extract(record, merger);
                counts.search_results += 1;
            }
            _ => counts.skipped += 1,
        }
    }
    counts
}

/// Read an optional string field, treating absent, null, and non-string
/// values as empty. Both record schemas default missing text this way.
pub(crate) fn str_field(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

// ── Tests ──
