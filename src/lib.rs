//! # Pillar Pages
//!
//! Scaffolds the GitHub Pages site for a multi-pillar crypto analysis
//! framework. One run, from the root of the site's Git repository, writes:
//!
//! ```text
//! index.html                 navigation hub with one card per pillar
//! <pillar>/index.html        pillar page, body chosen by status
//! <pillar>/data.json         metadata record the page fetches client-side
//! assets/css/style.css       shared stylesheet
//! assets/js/common.js        shared dashboard loader
//! ```
//!
//! then prints the git steps needed to publish.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pillars`] | The immutable, ordered pillar table and its validation |
//! | [`naming`] | Kebab-case keys → display titles and CSS tokens |
//! | [`config`] | Built-in site settings (title, URLs, commit message) |
//! | [`preflight`] | Git-repository precondition, checked before any write |
//! | [`metadata`] | Builds and serializes each pillar's `data.json` record |
//! | [`types`] | Serialized record shapes shared with the client script |
//! | [`assets`] | Stylesheet and script embedded from `static/` |
//! | [`generate`] | Maud page renderers and the run orchestrator |
//! | [`output`] | Terminal output: progress lines, summary, errors |
//!
//! # Design Decisions
//!
//! ## Fixed Table, Passed Explicitly
//!
//! The pillar table is data, not configuration: it is built once in
//! [`pillars::PillarTable::stock`] and handed by reference to every renderer.
//! No renderer reaches for global state, so tests can render any table.
//!
//! ## Overwrite, Never Diff
//!
//! Every run writes every artifact from scratch. There is no manifest of a
//! previous run and no cleanup; the set of files is a pure function of the
//! table ([`generate::planned_files`]), so re-running never leaves orphans.
//!
//! ## One Renderer per Artifact
//!
//! Each artifact type has exactly one function that produces it:
//! [`generate::render_index`], [`generate::render_pillar_page`],
//! [`metadata::render_record`], and the embedded [`assets::STYLESHEET`] and
//! [`assets::SCRIPT`].

pub mod assets;
pub mod config;
pub mod generate;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod pillars;
pub mod preflight;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
