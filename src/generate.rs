//! HTML site generation.
//!
//! Takes the pillar table and site settings and writes the whole site into the
//! run directory in one pass. Nothing is read back from a previous run; every
//! artifact is overwritten.
//!
//! ## Generated Files
//!
//! ```text
//! ./
//! ├── index.html                 # Navigation hub: stats, pillar cards, methodology
//! ├── assets/
//! │   ├── css/style.css          # Shared stylesheet
//! │   └── js/common.js           # loadPillarData() for every pillar page
//! ├── adoption/
//! │   ├── index.html             # Pillar page (status-dependent body)
//! │   └── data.json              # Metadata record, fetched by the page
//! └── tokenomics/
//!     └── ...
//! ```
//!
//! ## Order of Operations
//!
//! 1. Precondition: the run directory is a Git repository root
//! 2. One directory per pillar, then `assets/css` and `assets/js`
//! 3. Stylesheet, script, top-level index
//! 4. Per pillar: `index.html`, then `data.json`
//!
//! The precondition is the only clean abort. A failed write stops the run with
//! the tree partially written.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated text is escaped; the only pre-escaped fragment is the
//! inline `loadPillarData(...)` call, whose argument is a JSON string literal.

use crate::assets;
use crate::config::{ConfigError, SiteConfig};
use crate::metadata;
use crate::naming;
use crate::pillars::{self, CRITICAL_VALUE_95, Findings, Pillar, PillarTable, Status};
use crate::preflight::{self, PreflightError};
use chrono::{DateTime, TimeZone};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Preflight(#[from] PreflightError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Progress reported while the site is written.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// A pillar directory exists (created or already present).
    PillarDirectory { name: String },
    /// `assets/css` and `assets/js` exist.
    AssetDirectories,
    /// A file was written, path relative to the run directory.
    FileWritten { path: String, kind: FileKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Stylesheet,
    Script,
    Index,
    PillarPage,
    PillarData,
}

/// What a completed run wrote, paths relative to the run directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateReport {
    pub files: Vec<String>,
}

/// Progress-bar fill shown on in-progress pillar pages.
pub const IN_PROGRESS_PERCENT: u32 = 60;
const IN_PROGRESS_CAPTION: &str = "API integrations and scoring methodology in development...";

const METHODOLOGY: [(&str, &str); 4] = [
    (
        "\u{1F4CA} Statistical Validation",
        "Each pillar is validated against historical returns with correlation analysis and significance testing.",
    ),
    (
        "\u{1F517} API-Driven",
        "Real-time data from CoinGecko, DeFiLlama, GitHub, and other authoritative sources.",
    ),
    (
        "\u{2696}\u{FE0F} Weighted Scoring",
        "Each pillar contributes to the final score based on its proven predictive power.",
    ),
    (
        "\u{1F50D} Audit Trail",
        "Complete transparency with data sources, calculations, and decision rationale.",
    ),
];

/// Files a run writes, in write order.
pub fn planned_files(table: &PillarTable) -> Vec<String> {
    let mut files = vec![
        assets::STYLESHEET_PATH.to_string(),
        assets::SCRIPT_PATH.to_string(),
        "index.html".to_string(),
    ];
    for name in table.names() {
        files.push(format!("{name}/index.html"));
        files.push(format!("{name}/data.json"));
    }
    files
}

/// Generate the full site into `root`.
///
/// `now` stamps the index header and every record's `last_updated`.
/// `on_event` is called after each step succeeds.
pub fn generate<Tz>(
    root: &Path,
    table: &PillarTable,
    config: &SiteConfig,
    now: &DateTime<Tz>,
    mut on_event: impl FnMut(&GenerateEvent),
) -> Result<GenerateReport, GenerateError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    preflight::check(root)?;
    config.validate()?;

    let mut report = GenerateReport::default();
    let generated_at = display_timestamp(now);
    let last_updated = metadata::iso_timestamp(now);

    for pillar in table {
        create_dir(root, &pillar.name)?;
        on_event(&GenerateEvent::PillarDirectory {
            name: pillar.name.clone(),
        });
    }

    for dir in [assets::CSS_DIR, assets::JS_DIR] {
        create_dir(root, dir)?;
    }
    on_event(&GenerateEvent::AssetDirectories);

    let mut emit = |path: String, contents: &str, kind: FileKind| -> Result<(), GenerateError> {
        write_file(root, &path, contents)?;
        on_event(&GenerateEvent::FileWritten {
            path: path.clone(),
            kind,
        });
        report.files.push(path);
        Ok(())
    };

    emit(
        assets::STYLESHEET_PATH.to_string(),
        assets::STYLESHEET,
        FileKind::Stylesheet,
    )?;
    emit(
        assets::SCRIPT_PATH.to_string(),
        assets::SCRIPT,
        FileKind::Script,
    )?;

    let index_html = render_index(table, config, &generated_at);
    emit(
        "index.html".to_string(),
        &index_html.into_string(),
        FileKind::Index,
    )?;

    for pillar in table {
        let page = render_pillar_page(pillar, table, config)?;
        emit(
            format!("{}/index.html", pillar.name),
            &page.into_string(),
            FileKind::PillarPage,
        )?;

        let record = metadata::build_record(pillar, &last_updated);
        let json = metadata::render_record(&record)?;
        emit(
            format!("{}/data.json", pillar.name),
            &json,
            FileKind::PillarData,
        )?;
    }

    Ok(report)
}

/// Local wall-clock time as shown in the index header.
pub fn display_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn create_dir(root: &Path, rel: &str) -> Result<(), GenerateError> {
    let path = root.join(rel);
    fs::create_dir_all(&path).map_err(|source| GenerateError::Io { path, source })
}

fn write_file(root: &Path, rel: &str, contents: &str) -> Result<(), GenerateError> {
    let path = root.join(rel);
    fs::write(&path, contents).map_err(|source| GenerateError::Io { path, source })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
///
/// `prefix` is the relative path back to the site root (`""` or `"../"`).
/// `boot` runs after the shared script has loaded.
fn base_document(
    title: &str,
    icon: &str,
    prefix: &str,
    content: Markup,
    boot: Option<Markup>,
) -> Markup {
    let favicon = format!(
        "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{icon}</text></svg>"
    );
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href={ (prefix) (assets::STYLESHEET_PATH) };
                link rel="icon" type="image/svg+xml" href=(favicon);
            }
            body {
                div.container {
                    (content)
                }
                script src={ (prefix) (assets::SCRIPT_PATH) } {}
                @if let Some(boot) = boot {
                    (boot)
                }
            }
        }
    }
}

/// A headline number on the index page.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Summary numbers derived from the table.
///
/// The sample size and correlation come from the first pillar with findings;
/// without one, only the pillar counts are shown.
pub fn summary_stats(table: &PillarTable) -> Vec<Stat> {
    let mut stats = Vec::new();
    if let Some((pillar, findings)) = table.headline() {
        stats.push(Stat {
            value: findings.sample_size.to_string(),
            label: "Projects Analyzed".to_string(),
        });
        stats.push(Stat {
            value: pillars::signed(findings.correlation),
            label: format!("{} Correlation", pillar.title()),
        });
    }
    stats.push(Stat {
        value: table.len().to_string(),
        label: "Analysis Pillars".to_string(),
    });
    stats.push(Stat {
        value: table.completed().count().to_string(),
        label: "Pillars Completed".to_string(),
    });
    stats
}

/// Renders one pillar card for the index grid.
fn pillar_card(pillar: &Pillar) -> Markup {
    let available = pillar.status.has_dashboard();
    let (btn_class, btn_text) = if available {
        ("btn", "View Dashboard")
    } else {
        ("btn disabled", "Coming Soon")
    };

    html! {
        div class={ "pillar-card " (naming::class_token(pillar.status.as_str())) } {
            div.pillar-header {
                h3 { (pillar.title()) }
                span.weight { (pillar.weight) }
            }
            p.description { (pillar.description) }
            div.status style={ "color: " (pillar.color) } {
                (pillar.icon) " " (pillar.status.label())
            }
            a class=(btn_class) href={ (pillar.name) "/" } { (btn_text) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the top-level navigation page.
pub fn render_index(table: &PillarTable, config: &SiteConfig, generated_at: &str) -> Markup {
    let first_completed = table.completed().next();

    let content = html! {
        header.main-header {
            h1 { (config.icon) " " (config.title) }
            p.subtitle { (config.tagline) }
            div.last-updated { "Last Updated: " (generated_at) }
        }

        div.system-overview {
            div.stats-grid {
                @for stat in summary_stats(table) {
                    div.stat-card {
                        div.stat-value { (stat.value) }
                        div.stat-label { (stat.label) }
                    }
                }
            }
        }

        section.pillars-section {
            h2 { "Analysis Pillars" }
            div.pillar-grid {
                @for pillar in table {
                    (pillar_card(pillar))
                }
            }
        }

        section.methodology {
            h2 { "Methodology" }
            div.methodology-grid {
                @for (heading, text) in METHODOLOGY {
                    div.method-card {
                        h3 { (heading) }
                        p { (text) }
                    }
                }
            }
        }

        footer.main-footer {
            p { "Built with \u{2764}\u{FE0F} for the crypto community | Open source analysis framework" }
            div.footer-links {
                a href=(config.repository_url) target="_blank" rel="noopener" { "GitHub Repository" }
                @if let Some(pillar) = first_completed {
                    a href={ (pillar.name) "/" } { "View Completed Analysis" }
                }
            }
        }
    };

    base_document(&config.title, &config.icon, "", content, None)
}

/// Renders the status-dependent body block of a pillar page.
fn status_section(pillar: &Pillar) -> Markup {
    match (pillar.status, &pillar.findings) {
        (Status::Completed, Some(findings)) => validation_results(findings),
        (Status::InProgress, _) => html! {
            div.progress-section {
                h2 { "Development Progress" }
                div.progress-bar {
                    div.progress-fill style={ "width: " (IN_PROGRESS_PERCENT) "%" } {}
                }
                p { (IN_PROGRESS_CAPTION) }
            }
        },
        _ => html! {
            div.pending-section {
                h2 { "Coming Soon" }
                p { "This pillar is scheduled for development. Check back soon for updates!" }
            }
        },
    }
}

fn validation_results(findings: &Findings) -> Markup {
    html! {
        div.validation-results {
            h2 { "Statistical Validation Results" }
            div.correlation-grid {
                @for highlight in &findings.highlights {
                    @let significant = highlight.is_significant();
                    div class=(if significant { "correlation-card significant" } else { "correlation-card" }) {
                        div.correlation-value { (pillars::signed(highlight.correlation)) }
                        div.correlation-label { (highlight.label) }
                        div.correlation-status {
                            @if significant { "\u{2705} Significant" } @else { "\u{274C} Not Sig." }
                        }
                    }
                }
            }
            p.validation-note {
                "Generated: " (findings.studied_at)
                " | Sample Size: " (findings.sample_size)
                " | Critical Value (95%): \u{B1}" (format!("{CRITICAL_VALUE_95:.3}"))
            }
        }
    }
}

/// Renders the cross-navigation strip with `current` marked active.
pub fn pillar_nav(table: &PillarTable, current: &str) -> Markup {
    html! {
        div.pillar-navigation {
            h3 { "Other Pillars" }
            div.pillar-nav-grid {
                @for pillar in table {
                    @let class = if pillar.name == current { "nav-pill active" } else { "nav-pill" };
                    a class=(class) href={ "../" (pillar.name) "/" } {
                        (pillar.title()) " (" (pillar.weight) ")"
                    }
                }
            }
        }
    }
}

/// Renders one pillar's `index.html`.
pub fn render_pillar_page(
    pillar: &Pillar,
    table: &PillarTable,
    config: &SiteConfig,
) -> Result<Markup, GenerateError> {
    let title = pillar.title();
    let boot = assets::entry_call(&pillar.name)?;

    let content = html! {
        nav.breadcrumb {
            a.back-link href="../" { "\u{2190} Back to Main Dashboard" }
        }

        header.pillar-header {
            h1 { (pillar.icon) " " (title) " Pillar" }
            div.pillar-meta {
                span.weight { "Weight: " (pillar.weight) }
                span class={ "status " (pillar.status.as_str()) } style={ "color: " (pillar.color) } {
                    "Status: " (pillar.status.label())
                }
            }
            p.pillar-description { (pillar.description) }
        }

        (status_section(pillar))

        div.pillar-content {
            div id=(assets::dashboard_id(&pillar.name)) {
                div.loading { "Loading " (title) " data..." }
            }
        }

        (pillar_nav(table, &pillar.name))
    };

    Ok(base_document(
        &format!("{title} Pillar - {}", config.title),
        &config.icon,
        "../",
        content,
        Some(html! { script { (PreEscaped(boot)) } }),
    ))
}

// ============================================================================
// Tests
// ============================================================================
