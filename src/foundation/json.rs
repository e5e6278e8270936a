use std::path::Path;

use anyhow::Context as _;
use serde::Serialize;

use crate::foundation::error::ScriptResult;

/// Serialize `value` as JSON indented by four spaces, the layout the engine's asset files use.
pub fn to_pretty_json<T: Serialize>(value: &T) -> ScriptResult<String> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).context("serialized json is not utf-8")?)
}

/// Write `value` to `path`, creating the parent directory if needed.
pub fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> ScriptResult<()> {
    ensure_parent_dir(path)?;
    let text = to_pretty_json(value)?;
    std::fs::write(path, text).with_context(|| format!("write json '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "wrote");
    Ok(())
}

/// Create the parent directory of `path`.
pub fn ensure_parent_dir(path: &Path) -> ScriptResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/json.rs"]
mod tests;
