use std::path::{Component, Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::{
        error::{ScriptError, ScriptResult},
        json::write_pretty_json,
    },
    mtl::material::BlinnPhongMaterial,
};

/// Stand-in for path separators inside emitted texture references.
pub const PLATFORM_INDEPENDENT_SEP: &str = "~";
/// Name of the directory that texture references are relative to.
pub const CONTENT_DIR_NAME: &str = "Content";
/// Directory, next to the MTL file, that receives the material JSON files.
pub const MATERIALS_DIR_NAME: &str = "Materials";
/// Metalness written for every translated material.
pub const DEFAULT_METALNESS: f64 = 0.1;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Engine material document derived from one MTL material.
pub struct MaterialAsset {
    /// `TransparentGGX` or `Disney`.
    pub shader_name: String,
    /// Constant [`DEFAULT_METALNESS`].
    pub metalness: f64,
    /// Diffuse color.
    pub albedo: [f64; 3],
    /// Encoded diffuse map reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albedo_texture: Option<String>,
    /// Encoded normal map reference (only `N_*` bump maps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_texture: Option<String>,
    /// Roughness converted from the Blinn-Phong exponent.
    pub roughness: f64,
}

/// Map a parsed material to its engine document.
pub fn material_asset(m: &BlinnPhongMaterial, texture_prefix: &str) -> MaterialAsset {
    let albedo_texture = m
        .diffuse_map
        .as_deref()
        .map(|map| texture_reference(texture_prefix, map));

    // Only tangent-space normal maps (`N_*` as written in the MTL) are supported.
    let normal_texture = m
        .bump_map
        .as_deref()
        .filter(|map| map.starts_with("N_"))
        .map(|map| texture_reference(texture_prefix, map));

    MaterialAsset {
        shader_name: m.illum_model().shader_name().to_string(),
        metalness: DEFAULT_METALNESS,
        albedo: m.diffuse,
        albedo_texture,
        normal_texture,
        roughness: m.roughness(),
    }
}

/// Join `prefix` and the normalized `map`, with parts separated by `~`.
///
/// Only `map` is normalized: `.` parts are dropped and `..` cancels the previous map
/// part. A `..` with nothing left to cancel is kept, so references that leave the
/// prefix directory still point at the same file. Both `/` and `\` count as
/// separators so references are identical no matter which platform authored the
/// MTL file.
pub fn texture_reference(prefix: &str, map: &str) -> String {
    let mut map_parts: Vec<&str> = Vec::new();
    for part in map.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." if map_parts.last().is_some_and(|p| *p != "..") => {
                map_parts.pop();
            }
            p => map_parts.push(p),
        }
    }

    prefix
        .split(['/', '\\'])
        .filter(|p| !p.is_empty() && *p != ".")
        .chain(map_parts)
        .collect::<Vec<_>>()
        .join(PLATFORM_INDEPENDENT_SEP)
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Where an MTL file sits relative to its content root.
pub struct ContentLayout {
    /// Nearest ancestor directory named `Content`.
    pub content_root: PathBuf,
    /// MTL directory relative to `content_root`, `/`-separated (empty at the root).
    pub texture_prefix: String,
    /// `<mtl dir>/Materials`.
    pub output_dir: PathBuf,
}

/// Locate the content root above `mtl_path` and derive the texture prefix and output dir.
pub fn content_layout(mtl_path: &Path) -> ScriptResult<ContentLayout> {
    let abs = std::path::absolute(mtl_path)
        .with_context(|| format!("resolve path '{}'", mtl_path.display()))?;
    let abs = lexically_normalize(&abs);

    let mtl_dir = abs
        .parent()
        .ok_or_else(|| ScriptError::validation(format!("'{}' has no parent", abs.display())))?;

    let content_root = mtl_dir
        .ancestors()
        .find(|dir| dir.file_name().is_some_and(|n| n == CONTENT_DIR_NAME))
        .ok_or_else(|| {
            ScriptError::validation(format!(
                "'{}' is not inside a '{CONTENT_DIR_NAME}' directory",
                abs.display()
            ))
        })?;

    let rel = mtl_dir
        .strip_prefix(content_root)
        .map_err(|e| ScriptError::validation(e.to_string()))?;
    let texture_prefix = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    Ok(ContentLayout {
        content_root: content_root.to_path_buf(),
        texture_prefix,
        output_dir: mtl_dir.join(MATERIALS_DIR_NAME),
    })
}

fn lexically_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Write `<output_dir>/<name>.json` for every material; returns the written paths.
pub fn write_material_assets(
    output_dir: &Path,
    texture_prefix: &str,
    materials: &[BlinnPhongMaterial],
) -> ScriptResult<Vec<PathBuf>> {
    tracing::info!(dir = %output_dir.display(), prefix = texture_prefix, "writing materials");

    for m in materials {
        material_file_stem(&m.name)?;
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create materials dir '{}'", output_dir.display()))?;

    let mut written = Vec::with_capacity(materials.len());
    for m in materials {
        let asset = material_asset(m, texture_prefix);
        let path = output_dir.join(format!("{}.json", material_file_stem(&m.name)?));
        write_pretty_json(&path, &asset)?;
        written.push(path);
    }
    Ok(written)
}

/// Material names become file stems inside the output dir; anything that could escape it is rejected.
fn material_file_stem(name: &str) -> ScriptResult<&str> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', ':']) {
        return Err(ScriptError::validation(format!(
            "material name '{name}' cannot be used as a file name"
        )));
    }
    Ok(name)
}

#[cfg(test)]
#[path = "../../tests/unit/mtl/convert.rs"]
mod tests;
