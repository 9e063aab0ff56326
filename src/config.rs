//! Site-wide settings.
//!
//! Everything the templates need that is not per-pillar: the site title and
//! tagline, where the site is published, and the repository it lives in. The
//! values are built in; a run reads no config file. `pillar-pages show-config`
//! prints the effective settings together with the pillar table:
//!
//! ```toml
//! title = "Crypto 1000x Analysis System"
//! tagline = "Multi-Pillar Framework for Identifying 1000x Opportunities"
//! icon = "🚀"
//! pages_url = "https://mfhinesh-ops.github.io/crypto-analysis-system/"
//! repository_url = "https://github.com/mfhinesh-ops/crypto-analysis-system"
//! branch = "main"
//! commit_message = "Add multi-pillar GitHub Pages structure"
//!
//! [[pillar]]
//! name = "adoption"
//! weight = "15%"
//! status = "completed"
//! ...
//! ```

use crate::pillars::PillarTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML serialize error: {0}")]
    Toml(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site settings shared by every page and the closing summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title and main heading.
    pub title: String,
    /// Subtitle under the main heading.
    pub tagline: String,
    /// Glyph used in the heading and the favicon.
    pub icon: String,
    /// Published root of the site; must end with `/`.
    pub pages_url: String,
    /// Source repository, linked from the footer.
    pub repository_url: String,
    /// Branch the summary tells the user to push.
    pub branch: String,
    /// Commit message suggested in the summary.
    pub commit_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Crypto 1000x Analysis System".to_string(),
            tagline: "Multi-Pillar Framework for Identifying 1000x Opportunities".to_string(),
            icon: "\u{1F680}".to_string(),
            pages_url: "https://mfhinesh-ops.github.io/crypto-analysis-system/".to_string(),
            repository_url: "https://github.com/mfhinesh-ops/crypto-analysis-system".to_string(),
            branch: "main".to_string(),
            commit_message: "Add multi-pillar GitHub Pages structure".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate the settings before anything is rendered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        for (key, url) in [
            ("pages_url", &self.pages_url),
            ("repository_url", &self.repository_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        if !self.pages_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "pages_url must end with '/'".into(),
            ));
        }
        if self.branch.trim().is_empty() {
            return Err(ConfigError::Validation("branch must not be empty".into()));
        }
        Ok(())
    }

    /// Published URL of a pillar's dashboard.
    pub fn pillar_url(&self, name: &str) -> String {
        format!("{}{}/", self.pages_url, name)
    }
}

/// Render the settings and pillar table as one TOML document.
///
/// Used by the `show-config` command.
pub fn render_effective_config(
    config: &SiteConfig,
    table: &PillarTable,
) -> Result<String, ConfigError> {
    let site = toml::to_string_pretty(config)?;
    let pillars = toml::to_string_pretty(table)?;
    Ok(format!("{site}\n{pillars}"))
}
