//! Per-pillar metadata records (`<pillar>/data.json`).
//!
//! Each pillar page fetches its own `data.json` client-side and renders a
//! summary from it. The record mirrors the pillar table entry plus the
//! generation timestamp:
//!
//! ```json
//! {
//!   "pillar_name": "adoption",
//!   "weight": "15%",
//!   "status": "completed",
//!   "description": "TVL, Users, Fees, Development, Integrations",
//!   "last_updated": "2026-03-01T09:15:42+01:00",
//!   "metrics": [{ "name": "TVL", "weight": 0.3, "correlation": 0.325 }, ...],
//!   "projects": [],
//!   "validation": { "correlation": 0.419, "p_value": 0.005, "sample_size": 42, "significant": true }
//! }
//! ```
//!
//! Pillars without findings get an empty metric list and a null validation
//! block (see [`ValidationBlock::default`]).

use crate::pillars::Pillar;
use crate::types::{MetricEntry, PillarRecord, ValidationBlock};
use chrono::{DateTime, SecondsFormat, TimeZone};

/// Build the metadata record for one pillar.
pub fn build_record(pillar: &Pillar, last_updated: &str) -> PillarRecord {
    let (metrics, validation) = match &pillar.findings {
        Some(findings) => (
            findings
                .metrics
                .iter()
                .map(|m| MetricEntry {
                    name: m.name.clone(),
                    weight: m.weight,
                    correlation: m.correlation,
                })
                .collect(),
            ValidationBlock {
                correlation: Some(findings.correlation),
                p_value: Some(findings.p_value),
                sample_size: findings.sample_size,
                significant: findings.is_significant(),
            },
        ),
        None => (Vec::new(), ValidationBlock::default()),
    };

    PillarRecord {
        pillar_name: pillar.name.clone(),
        weight: pillar.weight.clone(),
        status: pillar.status,
        description: pillar.description.clone(),
        last_updated: last_updated.to_string(),
        metrics,
        projects: Vec::new(),
        validation,
    }
}

/// Serialize a record as pretty JSON with two-space indentation.
pub fn render_record(record: &PillarRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// ISO-8601 timestamp with offset, second precision.
pub fn iso_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.to_rfc3339_opts(SecondsFormat::Secs, false)
}
