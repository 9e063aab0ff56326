//! Shared test utilities for the pillar-pages test suite.
//!
//! Provides a frozen clock, temp repository setup, and lookup helpers that
//! panic with a clear message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let repo = setup_repo();
//! generate(repo.path(), &PillarTable::stock(), &SiteConfig::default(), &fixed_now(), |_| {}).unwrap();
//!
//! let record = read_record(repo.path(), "adoption");
//! assert_eq!(record.validation.sample_size, 42);
//! ```

use chrono::{DateTime, FixedOffset, TimeZone};
use std::path::Path;
use tempfile::TempDir;

use crate::pillars::{Pillar, PillarTable};
use crate::types::PillarRecord;

/// ISO form of [`fixed_now`].
pub const FIXED_ISO: &str = "2026-03-01T09:15:42+01:00";

/// Display form of [`fixed_now`] as shown in the index header.
pub const FIXED_DISPLAY: &str = "2026-03-01 09:15:42";

/// A fixed clock reading so rendered output is deterministic.
pub fn fixed_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2026, 3, 1, 9, 15, 42)
        .unwrap()
}

// =========================================================================
// Filesystem setup
// =========================================================================

/// Empty temp directory with a `.git/` marker, i.e. a valid run root.
pub fn setup_repo() -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join(".git")).unwrap();
    tmp
}

/// Parse `<root>/<name>/data.json`. Panics if missing or malformed.
pub fn read_record(root: &Path, name: &str) -> PillarRecord {
    let path = root.join(name).join("data.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid record {}: {e}", path.display()))
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a pillar by name. Panics if not found.
pub fn find_pillar<'a>(table: &'a PillarTable, name: &str) -> &'a Pillar {
    table.get(name).unwrap_or_else(|| {
        let names: Vec<&str> = table.names().collect();
        panic!("pillar '{name}' not found. Available: {names:?}")
    })
}

/// Hrefs of every `pillar-card` link on the index page, in document order.
pub fn card_links(html: &str) -> Vec<String> {
    html.split(r#"<div class="pillar-card "#)
        .skip(1)
        .filter_map(|card| {
            let start = card.find(r#"href=""#)? + r#"href=""#.len();
            let end = card[start..].find('"')?;
            Some(card[start..start + end].to_string())
        })
        .collect()
}
