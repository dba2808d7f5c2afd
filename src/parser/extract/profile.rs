use serde_json::Value;

use super::str_field;
use crate::merge::Merger;

/// Strings treated as separators of position and company. Everything to the
/// left of the match is the position, everything to the right the company.
/// List order is the match priority, not position in the string; the
/// non-English entries cover the site's German and Czech phrasings of "at".
pub const POSITION_COMPANY_SEPARATORS: [&str; 3] = [" at ", " bei ", " ve společnosti "];

/// Fold a MiniProfile record into the entity keyed by its objectUrn.
pub fn extract(record: &Value, merger: &mut Merger) {
    let urn = str_field(record, "objectUrn");
    let occupation = str_field(record, "occupation");
    let (position, company) = split_occupation(&occupation);

    let entity = merger.entity(&urn);
    entity.insert("first_name", str_field(record, "firstName"));
    entity.insert("last_name", str_field(record, "lastName"));
    entity.insert("position", position);
    entity.insert("company", company);
}

/// Split an occupation string at the first occurrence of the
/// highest-priority separator it contains. No separator means the whole
/// string is the position and the company is empty.
pub fn split_occupation(occupation: &str) -> (String, String) {
    for separator in POSITION_COMPANY_SEPARATORS {
        if let Some((position, company)) = occupation.split_once(separator) {
            return (position.to_string(), company.to_string());
        }
    }
    (occupation.to_string(), String::new())
}

// ── Tests ──
