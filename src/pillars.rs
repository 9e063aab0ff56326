//! The pillar table: the fixed set of analysis categories the site is built from.
//!
//! A [`PillarTable`] is an ordered, immutable collection constructed once at
//! startup and passed by reference into every generation step. Insertion order
//! is display order: index cards, cross-navigation pills, and terminal output
//! all follow it. Nothing sorts the table.
//!
//! ## Stock Table
//!
//! ```text
//! adoption          15%  completed    TVL, Users, Fees, Development, Integrations
//! tokenomics        10%  in-progress  Float Ratio, Unlocks, Holders, Revenue Multiple
//! team              15%  pending      Experience, Track Record, Commitment
//! investors         15%  pending      Quality, Stage, Amount, Strategic Value
//! market-relevance  10%  pending      Market Size, Growth, Competition
//! tech              15%  pending      Innovation, Scalability, Architecture
//! liquidity          8%  pending      Volume, Spreads, Exchange Coverage
//! security           5%  pending      Audits, Bug Bounties, Track Record
//! catalysts          4%  pending      Upcoming Events, Partnerships, Releases
//! regulatory         3%  pending      Compliance, Risk Assessment, Jurisdiction
//! ```
//!
//! Only `adoption` has been validated, so it is the only pillar carrying
//! [`Findings`].

use crate::naming;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Two-tailed 95% critical value of Pearson's r for the n = 42 study sample.
pub const CRITICAL_VALUE_95: f64 = 0.310;

/// p-value threshold below which the overall validation counts as significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("pillar table is empty")]
    Empty,
    #[error("duplicate pillar name: {0}")]
    DuplicateName(String),
    #[error("pillar name is not lowercase kebab-case: {0:?}")]
    InvalidName(String),
    #[error("pillar {name} has invalid weight {weight:?} (expected e.g. \"15%\")")]
    InvalidWeight { name: String, weight: String },
}

/// Development status of a pillar. Controls which body block its page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Completed,
    InProgress,
    Pending,
}

impl Status {
    /// Wire/key form: `completed`, `in-progress`, `pending`.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::InProgress => "in-progress",
            Status::Pending => "pending",
        }
    }

    /// Title-cased label for display ("In Progress").
    pub fn label(self) -> String {
        naming::display_title(self.as_str())
    }

    pub fn default_color(self) -> &'static str {
        match self {
            Status::Completed => "#10B981",
            Status::InProgress => "#F59E0B",
            Status::Pending => "#6B7280",
        }
    }

    pub fn default_icon(self) -> &'static str {
        match self {
            Status::Completed => "\u{2705}",
            Status::InProgress => "\u{1F6A7}",
            Status::Pending => "\u{23F3}",
        }
    }

    /// Pending pillars have no dashboard yet; their links render disabled.
    pub fn has_dashboard(self) -> bool {
        self != Status::Pending
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored input of a validated pillar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: String,
    /// Share of the pillar score, 0–1.
    pub weight: f64,
    /// Correlation with historical returns.
    pub correlation: f64,
}

/// A correlation called out on the pillar page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub label: String,
    pub correlation: f64,
}

impl Highlight {
    pub fn is_significant(&self) -> bool {
        is_significant(self.correlation)
    }
}

/// Statistical validation of a pillar against historical returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Findings {
    pub correlation: f64,
    pub p_value: f64,
    pub sample_size: u32,
    /// When the study was run, as shown on the pillar page.
    pub studied_at: String,
    pub metrics: Vec<Metric>,
    pub highlights: Vec<Highlight>,
}

impl Findings {
    pub fn is_significant(&self) -> bool {
        self.p_value < SIGNIFICANCE_LEVEL
    }
}

/// Whether a correlation clears the 95% critical value.
pub fn is_significant(correlation: f64) -> bool {
    correlation.abs() > CRITICAL_VALUE_95
}

/// Format a correlation with an explicit sign, three decimals (`+0.419`).
pub fn signed(correlation: f64) -> String {
    format!("{correlation:+.3}")
}

/// A single section definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pillar {
    /// Unique kebab-case key; also the directory name.
    pub name: String,
    /// Percentage label, e.g. `"15%"`.
    pub weight: String,
    pub status: Status,
    pub description: String,
    pub color: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings: Option<Findings>,
}

impl Pillar {
    /// A pillar styled with its status's stock color and icon.
    pub fn new(name: &str, weight: &str, status: Status, description: &str) -> Self {
        Self {
            name: name.to_string(),
            weight: weight.to_string(),
            status,
            description: description.to_string(),
            color: status.default_color().to_string(),
            icon: status.default_icon().to_string(),
            findings: None,
        }
    }

    pub fn with_findings(mut self, findings: Findings) -> Self {
        self.findings = Some(findings);
        self
    }

    pub fn title(&self) -> String {
        naming::display_title(&self.name)
    }

    /// Integer percentage parsed from the weight label, if well-formed.
    pub fn weight_percent(&self) -> Option<u32> {
        self.weight.strip_suffix('%')?.parse().ok()
    }
}

/// Ordered, validated, immutable pillar collection.
#[derive(Debug, Clone, Serialize)]
pub struct PillarTable {
    #[serde(rename = "pillar")]
    pillars: Vec<Pillar>,
}

impl PillarTable {
    /// Validate and freeze a pillar list.
    ///
    /// Rejects empty tables, duplicate or non-kebab-case names, and weights
    /// that are not `<integer>%`.
    pub fn new(pillars: Vec<Pillar>) -> Result<Self, TableError> {
        if pillars.is_empty() {
            return Err(TableError::Empty);
        }
        let mut seen = HashSet::new();
        for pillar in &pillars {
            if !naming::is_kebab_case(&pillar.name) {
                return Err(TableError::InvalidName(pillar.name.clone()));
            }
            if !seen.insert(pillar.name.as_str()) {
                return Err(TableError::DuplicateName(pillar.name.clone()));
            }
            if pillar.weight_percent().is_none() {
                return Err(TableError::InvalidWeight {
                    name: pillar.name.clone(),
                    weight: pillar.weight.clone(),
                });
            }
        }
        Ok(Self { pillars })
    }

    /// The built-in ten-pillar table.
    pub fn stock() -> Self {
        Self::new(stock_pillars()).expect("stock pillar table must be valid")
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pillar> {
        self.pillars.iter()
    }

    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Pillar> {
        self.pillars.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pillars.iter().map(|p| p.name.as_str())
    }

    pub fn completed(&self) -> impl Iterator<Item = &Pillar> {
        self.pillars
            .iter()
            .filter(|p| p.status == Status::Completed)
    }

    /// First pillar (in table order) that carries validation findings.
    pub fn headline(&self) -> Option<(&Pillar, &Findings)> {
        self.pillars
            .iter()
            .find_map(|p| p.findings.as_ref().map(|f| (p, f)))
    }

    /// Sum of all weights in percent.
    pub fn total_weight(&self) -> u32 {
        self.pillars.iter().filter_map(Pillar::weight_percent).sum()
    }
}

impl<'a> IntoIterator for &'a PillarTable {
    type Item = &'a Pillar;
    type IntoIter = std::slice::Iter<'a, Pillar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn adoption_findings() -> Findings {
    let metric = |name: &str, weight: f64, correlation: f64| Metric {
        name: name.to_string(),
        weight,
        correlation,
    };
    let highlight = |label: &str, correlation: f64| Highlight {
        label: label.to_string(),
        correlation,
    };
    Findings {
        correlation: 0.419,
        p_value: 0.005,
        sample_size: 42,
        studied_at: "2025-09-19 22:23:03".to_string(),
        metrics: vec![
            metric("TVL", 0.30, 0.325),
            metric("Active Users", 0.20, 0.267),
            metric("Transaction Fees", 0.20, 0.189),
            metric("Developer Activity", 0.15, 0.511),
            metric("Integrations", 0.15, 0.127),
        ],
        highlights: vec![
            highlight("Adoption Overall", 0.419),
            highlight("Development", 0.511),
            highlight("Integration", 0.127),
        ],
    }
}

fn stock_pillars() -> Vec<Pillar> {
    use Status::*;
    vec![
        Pillar::new(
            "adoption",
            "15%",
            Completed,
            "TVL, Users, Fees, Development, Integrations",
        )
        .with_findings(adoption_findings()),
        Pillar::new(
            "tokenomics",
            "10%",
            InProgress,
            "Float Ratio, Unlocks, Holders, Revenue Multiple",
        ),
        Pillar::new("team", "15%", Pending, "Experience, Track Record, Commitment"),
        Pillar::new(
            "investors",
            "15%",
            Pending,
            "Quality, Stage, Amount, Strategic Value",
        ),
        Pillar::new(
            "market-relevance",
            "10%",
            Pending,
            "Market Size, Growth, Competition",
        ),
        Pillar::new("tech", "15%", Pending, "Innovation, Scalability, Architecture"),
        Pillar::new("liquidity", "8%", Pending, "Volume, Spreads, Exchange Coverage"),
        Pillar::new("security", "5%", Pending, "Audits, Bug Bounties, Track Record"),
        Pillar::new(
            "catalysts",
            "4%",
            Pending,
            "Upcoming Events, Partnerships, Releases",
        ),
        Pillar::new(
            "regulatory",
            "3%",
            Pending,
            "Compliance, Risk Assessment, Jurisdiction",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_table_order() {
        let table = PillarTable::stock();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(
            names,
            vec![
                "adoption",
                "tokenomics",
                "team",
                "investors",
                "market-relevance",
                "tech",
                "liquidity",
                "security",
                "catalysts",
                "regulatory",
            ]
        );
    }

    #[test]
    fn stock_weights_sum_to_100() {
        assert_eq!(PillarTable::stock().total_weight(), 100);
    }

    #[test]
    fn stock_has_one_completed_pillar_with_findings() {
        let table = PillarTable::stock();
        let completed: Vec<&str> = table.completed().map(|p| p.name.as_str()).collect();
        assert_eq!(completed, vec!["adoption"]);

        let (pillar, findings) = table.headline().unwrap();
        assert_eq!(pillar.name, "adoption");
        assert_eq!(findings.sample_size, 42);
        assert_eq!(findings.metrics.len(), 5);
        assert!(findings.is_significant());
    }

    #[test]
    fn stock_colors_follow_status() {
        let table = PillarTable::stock();
        let tokenomics = table.get("tokenomics").unwrap();
        assert_eq!(tokenomics.status, Status::InProgress);
        assert_eq!(tokenomics.color, "#F59E0B");
        assert_eq!(tokenomics.icon, "\u{1F6A7}");
        assert_eq!(table.get("team").unwrap().color, "#6B7280");
    }

    #[test]
    fn adoption_metric_weights_sum_to_one() {
        let table = PillarTable::stock();
        let (_, findings) = table.headline().unwrap();
        let total: f64 = findings.metrics.iter().map(|m| m.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn highlight_significance_uses_critical_value() {
        let table = PillarTable::stock();
        let (_, findings) = table.headline().unwrap();
        let flags: Vec<bool> = findings
            .highlights
            .iter()
            .map(Highlight::is_significant)
            .collect();
        assert_eq!(flags, vec![true, true, false]);
        assert!(is_significant(-0.5));
        assert!(!is_significant(0.310));
    }

    #[test]
    fn signed_formats_three_decimals() {
        assert_eq!(signed(0.419), "+0.419");
        assert_eq!(signed(-0.12), "-0.120");
    }

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            r#""in-progress""#
        );
        let parsed: Status = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(parsed, Status::Completed);
        assert_eq!(Status::InProgress.label(), "In Progress");
        assert_eq!(Status::Pending.to_string(), "pending");
    }

    #[test]
    fn weight_percent_parses_label() {
        let p = Pillar::new("x", "8%", Status::Pending, "");
        assert_eq!(p.weight_percent(), Some(8));
        let bad = Pillar::new("x", "eight", Status::Pending, "");
        assert_eq!(bad.weight_percent(), None);
    }

    #[test]
    fn new_rejects_empty_table() {
        assert_eq!(PillarTable::new(vec![]).unwrap_err(), TableError::Empty);
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let err = PillarTable::new(vec![
            Pillar::new("team", "10%", Status::Pending, ""),
            Pillar::new("team", "5%", Status::Pending, ""),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicateName("team".into()));
    }

    #[test]
    fn new_rejects_non_kebab_names() {
        let err = PillarTable::new(vec![Pillar::new("Market Relevance", "10%", Status::Pending, "")])
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidName(_)));
    }

    #[test]
    fn new_rejects_bad_weight() {
        let err =
            PillarTable::new(vec![Pillar::new("team", "0.15", Status::Pending, "")]).unwrap_err();
        assert_eq!(
            err,
            TableError::InvalidWeight {
                name: "team".into(),
                weight: "0.15".into()
            }
        );
    }

    #[test]
    fn title_is_derived_from_name() {
        let table = PillarTable::stock();
        assert_eq!(table.get("market-relevance").unwrap().title(), "Market Relevance");
    }
}
