use indexmap::IndexMap;
use tracing::debug;

/// Field names every exported row must carry. MiniProfile records contribute
/// the first four, SearchProfile records the last two.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "first_name",
    "last_name",
    "position",
    "company",
    "city",
    "country",
];

/// Fields contributed so far for one entity. A field is either not yet
/// contributed (absent) or contributed, possibly as an empty string.
pub type PartialEntity = IndexMap<&'static str, String>;

/// Accumulates partial field sets per entity URN across both record schemas.
/// Iteration order is first-seen order, which fixes the output row order.
#[derive(Default)]
pub struct Merger {
    entities: IndexMap<String, PartialEntity>,
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create the field map for an URN, so extractors never have to
    /// check for existence.
    pub fn entity(&mut self, urn: &str) -> &mut PartialEntity {
        self.entities.entry(urn.to_string()).or_default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Completeness filter: keep entities carrying all six required fields
    /// (empty values count as present), in first-seen order. MiniProfile and
    /// SearchProfile key different URN fields that are assumed to collide for
    /// the same person; when they don't, the entity stays partial and is
    /// dropped here, so log what went missing instead of failing silently.
    pub fn completed(&self) -> Vec<ContactRow> {
        let mut rows = Vec::new();
        for (urn, fields) in &self.entities {
            let missing: Vec<&str> = REQUIRED_FIELDS
                .iter()
                .copied()
                .filter(|f| !fields.contains_key(f))
                .collect();
            if !missing.is_empty() {
                debug!("Dropping incomplete entity {}: missing {}", urn, missing.join(", "));
                continue;
            }

            let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
            rows.push(ContactRow {
                first_name: get("first_name"),
                last_name: get("last_name"),
                position: get("position"),
                company: get("company"),
                city: get("city"),
                country: get("country"),
            });
        }
        rows
    }
}

/// One completed output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub company: String,
    pub city: String,
    pub country: String,
}

// ── Tests ──
