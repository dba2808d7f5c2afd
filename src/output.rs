use anyhow::{Context, Result};

use crate::merge::ContactRow;

const HEADER: [&str; 6] = [
    "First name",
    "Last name",
    "Position",
    "Company",
    "City",
    "Country",
];

/// Write the header row plus one row per completed entity, in merge order.
/// An unwritable output path is fatal.
pub fn write_csv(path: &str, rows: &[ContactRow]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("Cannot open output file {}", path))?;

    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record([
            &row.first_name,
            &row.last_name,
            &row.position,
            &row.company,
            &row.city,
            &row.country,
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush output file {}", path))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn writes_header_and_rows() {
        let path = temp_path("li_scraper_output_test.csv");
        let rows = vec![ContactRow {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            position: "Software Engineer".into(),
            company: "Acme".into(),
            city: "London".into(),
            country: "United Kingdom".into(),
        }];
        write_csv(&path, &rows).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "First name,Last name,Position,Company,City,Country");
        assert_eq!(lines[1], "Ada,Lovelace,Software Engineer,Acme,London,United Kingdom");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn zero_entities_leaves_header_only() {
        let path = temp_path("li_scraper_empty_test.csv");
        write_csv(&path, &[]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.trim_end(),
            "First name,Last name,Position,Company,City,Country"
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unwritable_path_is_fatal() {
        assert!(write_csv("/nonexistent-dir/out.csv", &[]).is_err());
    }
}
