//! Shared stylesheet and script.
//!
//! Both files are embedded at compile time from `static/` and written
//! verbatim on every run; neither takes parameters. Pages reference them
//! relative to their own depth (`assets/...` from the root, `../assets/...`
//! from a pillar directory).
//!
//! `common.js` exposes a single entry point, [`ENTRY_POINT`], which every
//! pillar page calls with its own name. It fetches the sibling `data.json`,
//! hides the `.loading` indicator, and renders a summary into
//! `#<pillar>-dashboard`. A failed fetch is logged to the console and the
//! page stays in its loading state.

pub const STYLESHEET: &str = include_str!("../static/style.css");
pub const SCRIPT: &str = include_str!("../static/common.js");

pub const CSS_DIR: &str = "assets/css";
pub const JS_DIR: &str = "assets/js";
pub const STYLESHEET_PATH: &str = "assets/css/style.css";
pub const SCRIPT_PATH: &str = "assets/js/common.js";

/// Function defined by `common.js` that loads a pillar's dashboard.
pub const ENTRY_POINT: &str = "loadPillarData";

/// Inline script statement that boots a pillar's dashboard.
///
/// The name is emitted as a JSON string literal, which is also a valid JS
/// string literal.
pub fn entry_call(pillar_name: &str) -> Result<String, serde_json::Error> {
    Ok(format!(
        "{ENTRY_POINT}({});",
        serde_json::to_string(pillar_name)?
    ))
}

/// Id of the element a pillar's dashboard renders into.
pub fn dashboard_id(pillar_name: &str) -> String {
    format!("{pillar_name}-dashboard")
}
