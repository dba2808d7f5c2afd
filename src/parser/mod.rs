pub mod extract;
pub mod locate;
pub mod payload;

use anyhow::Result;

use crate::merge::Merger;
use extract::RecordCounts;

pub struct PageResults {
    pub merger: Merger,
    pub counts: RecordCounts,
    pub blocks: usize,
}

/// Three-pass pipeline: html → payload blocks → decoded records → merged
/// entities. Only a malformed payload block is an error; an unrecognized
/// page shape comes back as zero blocks and zero entities.
pub fn process_page(html: &str) -> Result<PageResults> {
    let blocks = locate::locate_payload_blocks(html);
    let records = payload::decode_blocks(&blocks)?;

    let mut merger = Merger::new();
    let counts = extract::classify_records(&records, &mut merger);

    Ok(PageResults {
        merger,
        counts,
        blocks: blocks.len(),
    })
}

// ── Tests ──
