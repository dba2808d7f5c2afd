use anyhow::{Context, Result};
use serde_json::Value;

/// Parse each located block as JSON and flatten the records under its
/// `included` key, preserving block order and array order. A block that is
/// not valid JSON aborts the run: the page format has changed and partial
/// output would be misleading. An absent or non-array `included` key is
/// treated as an empty array.
pub fn decode_blocks(blocks: &[String]) -> Result<Vec<Value>> {
    let mut records = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        let payload: Value = serde_json::from_str(block)
            .with_context(|| format!("Payload block {} is not valid JSON", i))?;
        if let Some(included) = payload.get("included").and_then(Value::as_array) {
            records.extend(included.iter().cloned());
        }
    }
    Ok(records)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_included_across_blocks_in_order() {
        let blocks = vec![
            json!({"included": [{"id": 1}, {"id": 2}]}).to_string(),
            json!({"included": [{"id": 3}]}).to_string(),
        ];
        let records = decode_blocks(&blocks).unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn missing_included_key_is_empty_not_an_error() {
        let blocks = vec![json!({"data": {"status": 200}}).to_string()];
        assert!(decode_blocks(&blocks).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_fatal() {
        let blocks = vec!["{not valid".to_string()];
        assert!(decode_blocks(&blocks).is_err());
    }
}
