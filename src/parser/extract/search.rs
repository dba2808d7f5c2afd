use serde_json::Value;

use super::str_field;
use crate::merge::Merger;

/// Locations read "City, Country", but city names may themselves contain
/// ", " ("San Francisco, CA, USA"), so the split is on the last occurrence.
const CITY_COUNTRY_SEPARATOR: &str = ", ";

/// Fold a SearchProfile record into the entity keyed by its backendUrn.
pub fn extract(record: &Value, merger: &mut Merger) {
    let urn = str_field(record, "backendUrn");
    let location = str_field(record, "location");
    let (city, country) = split_location(&location);

    let entity = merger.entity(&urn);
    entity.insert("city", city);
    entity.insert("country", country);
}

/// Split a location from the right: everything after the last ", " is the
/// country. Without a separator the whole string is a country.
pub fn split_location(location: &str) -> (String, String) {
    match location.rsplit_once(CITY_COUNTRY_SEPARATOR) {
        Some((city, country)) => (city.to_string(), country.to_string()),
        None => (String::new(), location.to_string()),
    }
}

// ── Tests ──
