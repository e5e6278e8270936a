//! Keyword navigation inside the engine checkout.
//!
//! The binary prints `cd <dir>`; a shell function evals it, e.g.
//! `nav() { eval "$(selas nav "$@")"; }`.

use std::path::{Path, PathBuf};

/// Keywords and the engine-relative path they resolve to.
pub const ROUTES: &[(&str, &[&str])] = &[
    ("source", &["Source"]),
    ("src", &["Source"]),
    ("core", &["Source", "Core"]),
    ("apps", &["Source", "Applications"]),
    ("selas", &["Source", "Applications", "Selas"]),
    ("scripts", &["Scripts"]),
    ("content", &["Content"]),
    ("projects", &["_Projects"]),
    ("middleware", &["Middleware"]),
    ("blog", &["..", "schuttejoe.github.io"]),
];

/// Keyword that resolves to the configured demos directory instead of the engine.
pub const DEMOS_KEYWORD: &str = "demos";

/// Resolve `keyword` (case-insensitive). Unknown or absent keywords give the engine root.
pub fn resolve_target(engine_dir: &Path, demos_dir: &Path, keyword: Option<&str>) -> PathBuf {
    let Some(keyword) = keyword.map(str::to_lowercase) else {
        return engine_dir.to_path_buf();
    };

    if keyword == DEMOS_KEYWORD {
        return demos_dir.to_path_buf();
    }

    match ROUTES.iter().find(|(k, _)| *k == keyword) {
        Some((_, parts)) => parts.iter().fold(engine_dir.to_path_buf(), |p, c| p.join(c)),
        None => {
            tracing::debug!(keyword = %keyword, "unknown navigation keyword");
            engine_dir.to_path_buf()
        }
    }
}

/// `cd <target>`, for eval by the calling shell.
pub fn cd_command(target: &Path) -> String {
    format!("cd {}", target.display())
}

#[cfg(test)]
#[path = "../../tests/unit/shell/navigate.rs"]
mod tests;
