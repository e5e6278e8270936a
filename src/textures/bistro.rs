use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::{config::BistroPaths, error::ScriptResult, json::write_pretty_json},
    mtl::material::SHADER_TRANSPARENT_GGX,
    textures::convert::TextureConverter,
};

const BASE_COLOR_MARKER: &str = "_BaseColor";
const BASE_COLOR_SUFFIX: &str = "_0_BaseColor";
const SPECULAR_SUFFIX: &str = "_0_Specular";
const GLASS_IOR: f64 = 1.52;
const GLASS_ROUGHNESS: f64 = 0.03;
const METALNESS: f64 = 0.1;

/// Material names for every `*.dds` file whose stem contains `_BaseColor`, sorted.
pub fn gather_materials(texture_source_dir: &Path) -> ScriptResult<Vec<String>> {
    let entries = std::fs::read_dir(texture_source_dir)
        .with_context(|| format!("read texture dir '{}'", texture_source_dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("read texture dir '{}'", texture_source_dir.display()))?
            .path();
        if !path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("dds"))
        {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.contains(BASE_COLOR_MARKER) {
            names.push(stem.replace(BASE_COLOR_SUFFIX, ""));
        }
    }

    names.sort();
    tracing::info!(count = names.len(), "gathered bistro materials");
    Ok(names)
}

impl BistroPaths {
    /// `<dst_sub_dir><name>_Albedo.png`, as referenced from material JSON.
    pub fn albedo_asset_name(&self, name: &str) -> String {
        format!("{}{name}_Albedo.png", self.dst_sub_dir)
    }

    /// `<texture_source_dir>/<name>_0_BaseColor.dds`.
    pub fn albedo_source_path(&self, name: &str) -> PathBuf {
        self.texture_source_dir
            .join(format!("{name}{BASE_COLOR_SUFFIX}.dds"))
    }

    /// `<texture_dest_dir>/<name>_Albedo.png`.
    pub fn albedo_dest_path(&self, name: &str) -> PathBuf {
        self.texture_dest_dir.join(format!("{name}_Albedo.png"))
    }

    /// `<dst_sub_dir><name>_Specular.png`.
    pub fn specular_asset_name(&self, name: &str) -> String {
        format!("{}{name}_Specular.png", self.dst_sub_dir)
    }

    /// `<texture_source_dir>/<name>_0_Specular.dds`.
    pub fn specular_source_path(&self, name: &str) -> PathBuf {
        self.texture_source_dir
            .join(format!("{name}{SPECULAR_SUFFIX}.dds"))
    }

    /// `<texture_dest_dir>/<name>_Specular.png`.
    pub fn specular_dest_path(&self, name: &str) -> PathBuf {
        self.texture_dest_dir.join(format!("{name}_Specular.png"))
    }

    /// `<material_dest_dir>/<name>.json`.
    pub fn material_path(&self, name: &str) -> PathBuf {
        self.material_dest_dir.join(format!("{name}.json"))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Material document written for one Bistro texture set.
pub struct BistroMaterial {
    /// Constant 0.1.
    pub metalness: f64,
    /// Albedo asset name.
    pub albedo_texture: String,
    /// Specular asset name, when the specular source exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specular_texture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Glass only.
    pub shader_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Glass only.
    pub ior: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Glass only.
    pub roughness: Option<f64>,
}

/// Build the material for `name`. Names containing "glass" get the transparent shader.
pub fn bistro_material(paths: &BistroPaths, name: &str, has_specular: bool) -> BistroMaterial {
    let glass = name.to_lowercase().contains("glass");
    BistroMaterial {
        metalness: METALNESS,
        albedo_texture: paths.albedo_asset_name(name),
        specular_texture: has_specular.then(|| paths.specular_asset_name(name)),
        shader_name: glass.then(|| SHADER_TRANSPARENT_GGX.to_string()),
        ior: glass.then_some(GLASS_IOR),
        roughness: glass.then_some(GLASS_ROUGHNESS),
    }
}

/// Write one material JSON per name; returns the written paths.
pub fn create_material_assets(paths: &BistroPaths, names: &[String]) -> ScriptResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(names.len());
    for name in names {
        let has_specular = paths.specular_source_path(name).is_file();
        let material = bistro_material(paths, name, has_specular);
        let path = paths.material_path(name);
        write_pretty_json(&path, &material)?;
        written.push(path);
    }
    Ok(written)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Outcome counts of [`convert_textures`].
pub struct ConvertReport {
    /// Textures handed to the converter.
    pub converted: usize,
    /// Textures whose source file does not exist.
    pub skipped: usize,
}

/// Convert albedo and specular textures for every name. Missing sources are skipped.
pub fn convert_textures(
    paths: &BistroPaths,
    names: &[String],
    converter: &dyn TextureConverter,
) -> ScriptResult<ConvertReport> {
    let mut report = ConvertReport::default();
    for name in names {
        let pairs = [
            (paths.albedo_source_path(name), paths.albedo_dest_path(name)),
            (
                paths.specular_source_path(name),
                paths.specular_dest_path(name),
            ),
        ];
        for (src, dst) in pairs {
            if !src.is_file() {
                tracing::debug!(src = %src.display(), "no source texture, skipping");
                report.skipped += 1;
                continue;
            }
            converter.convert(&src, &dst)?;
            report.converted += 1;
        }
    }
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/textures/bistro.rs"]
mod tests;
