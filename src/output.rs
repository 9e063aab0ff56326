//! CLI output formatting.
//!
//! Every line the tool prints is built here. Each `format_*` function is pure
//! (returns `Vec<String>`, no I/O) so output can be tested directly; the
//! matching `print_*` wrapper writes the lines to stdout.
//!
//! # Output Format
//!
//! ```text
//! 🚀 Setting up Crypto 1000x Analysis System GitHub Pages structure...
//! ============================================================
//! Creating directory structure...
//! ✅ Created adoption/ directory
//! ...
//! ✅ Created assets/ directories
//! ✅ Created assets/css/style.css
//! ✅ Created assets/js/common.js
//! ✅ Created index.html (main navigation)
//! ✅ Created adoption/index.html
//! ✅ Created adoption/data.json
//! ...
//!
//! ============================================================
//! 🎉 Setup complete! Next steps:
//! 1. git add .
//! 2. git commit -m 'Add multi-pillar GitHub Pages structure'
//! 3. git push origin main
//! 4. Wait 2-3 minutes for GitHub Pages to build
//!
//! Your URLs will be:
//! • Main: https://mfhinesh-ops.github.io/crypto-analysis-system/
//! • Adoption: https://mfhinesh-ops.github.io/crypto-analysis-system/adoption/
//! ```

use crate::config::SiteConfig;
use crate::generate::{FileKind, GenerateEvent};
use crate::pillars::PillarTable;
use crate::preflight::PreflightError;

const RULE_WIDTH: usize = 60;
const OK: &str = "\u{2705}";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

// ============================================================================
// Run banner
// ============================================================================

pub fn format_banner(config: &SiteConfig) -> Vec<String> {
    vec![
        format!(
            "{} Setting up {} GitHub Pages structure...",
            config.icon, config.title
        ),
        rule(),
        "Creating directory structure...".to_string(),
    ]
}

pub fn print_banner(config: &SiteConfig) {
    print_lines(format_banner(config));
}

// ============================================================================
// Progress
// ============================================================================

/// Format one progress event as a success line.
pub fn format_event(event: &GenerateEvent) -> String {
    match event {
        GenerateEvent::PillarDirectory { name } => format!("{OK} Created {name}/ directory"),
        GenerateEvent::AssetDirectories => format!("{OK} Created assets/ directories"),
        GenerateEvent::FileWritten { path, kind } => match kind {
            FileKind::Index => format!("{OK} Created {path} (main navigation)"),
            FileKind::Stylesheet
            | FileKind::Script
            | FileKind::PillarPage
            | FileKind::PillarData => format!("{OK} Created {path}"),
        },
    }
}

pub fn print_event(event: &GenerateEvent) {
    println!("{}", format_event(event));
}

// ============================================================================
// Closing summary
// ============================================================================

/// Next manual steps and the URLs the site will publish to.
///
/// Lists the main page and every completed pillar.
pub fn format_summary(config: &SiteConfig, table: &PillarTable) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        rule(),
        "\u{1F389} Setup complete! Next steps:".to_string(),
        "1. git add .".to_string(),
        format!("2. git commit -m '{}'", config.commit_message),
        format!("3. git push origin {}", config.branch),
        "4. Wait 2-3 minutes for GitHub Pages to build".to_string(),
        String::new(),
        "Your URLs will be:".to_string(),
        format!("\u{2022} Main: {}", config.pages_url),
    ];
    for pillar in table.completed() {
        lines.push(format!(
            "\u{2022} {}: {}",
            pillar.title(),
            config.pillar_url(&pillar.name)
        ));
    }
    lines
}

pub fn print_summary(config: &SiteConfig, table: &PillarTable) {
    print_lines(format_summary(config, table));
}

// ============================================================================
// Precondition failure
// ============================================================================

pub fn format_preflight_error(err: &PreflightError) -> Vec<String> {
    match err {
        PreflightError::NotARepository(_) => vec![
            "\u{274C} Error: This doesn't appear to be a Git repository.".to_string(),
            "Please run this from your site repository root.".to_string(),
        ],
    }
}

pub fn print_preflight_error(err: &PreflightError) {
    print_lines(format_preflight_error(err));
}

// ============================================================================
// Check
// ============================================================================

/// Dry-run listing for `check`: what a run would write, nothing written.
pub fn format_check(table: &PillarTable, files: &[String]) -> Vec<String> {
    let mut lines = vec![format!(
        "Pillars ({}, {}% total weight)",
        table.len(),
        table.total_weight()
    )];
    for (i, pillar) in table.iter().enumerate() {
        lines.push(format!(
            "    {:0>3} {} {} [{}]",
            i + 1,
            pillar.title(),
            pillar.weight,
            pillar.status
        ));
    }
    lines.push(String::new());
    lines.push(format!("Would write {} files", files.len()));
    for file in files {
        lines.push(format!("    {file}"));
    }
    lines
}

pub fn print_check(table: &PillarTable, files: &[String]) {
    print_lines(format_check(table, files));
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
