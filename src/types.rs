//! Shapes of the per-pillar `data.json` sidecar.
//!
//! These are written by [`crate::metadata`] and read in the browser by
//! `common.js`, so field names are part of the published contract.

use crate::pillars::Status;
use serde::{Deserialize, Serialize};

/// The metadata record written to `<pillar>/data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarRecord {
    pub pillar_name: String,
    pub weight: String,
    pub status: Status,
    pub description: String,
    /// ISO-8601 generation timestamp.
    pub last_updated: String,
    pub metrics: Vec<MetricEntry>,
    /// Reserved for per-project scores; always empty for now.
    pub projects: Vec<serde_json::Value>,
    pub validation: ValidationBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub name: String,
    pub weight: f64,
    pub correlation: f64,
}

/// Validation summary. Unvalidated pillars carry nulls, zero, and `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationBlock {
    pub correlation: Option<f64>,
    pub p_value: Option<f64>,
    pub sample_size: u32,
    pub significant: bool,
}

impl Default for ValidationBlock {
    fn default() -> Self {
        Self {
            correlation: None,
            p_value: None,
            sample_size: 0,
            significant: false,
        }
    }
}
