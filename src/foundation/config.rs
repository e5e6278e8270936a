use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::{ScriptError, ScriptResult};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "SELAS_CONFIG";
/// Environment variable holding the engine checkout on non-Linux hosts.
pub const ENGINE_DIR_ENV: &str = "Selas";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Tool configuration loaded from a JSON file.
///
/// Every field is optional; missing values fall back to the paths the
/// utilities have always used on the author's machines.
pub struct ToolConfig {
    /// Engine checkout root. See [`ToolConfig::engine_dir`] for the fallbacks.
    pub engine_dir: Option<PathBuf>,
    /// Target of `nav demos`.
    pub demos_dir: Option<PathBuf>,
    /// ImageMagick executable used for texture conversion.
    pub image_magick: Option<PathBuf>,
    /// Directories used by the Bistro texture batch.
    pub bistro: BistroPaths,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Source and destination directories for the Bistro batch.
pub struct BistroPaths {
    /// Directory scanned for `*_BaseColor.dds` files.
    pub texture_source_dir: PathBuf,
    /// Directory receiving one material JSON per gathered name.
    pub material_dest_dir: PathBuf,
    /// Directory receiving converted PNG textures.
    pub texture_dest_dir: PathBuf,
    /// Prefix prepended to texture references inside material JSON.
    pub dst_sub_dir: String,
}

impl Default for BistroPaths {
    fn default() -> Self {
        Self {
            texture_source_dir: PathBuf::from(r"D:\Shooty\Selas\Content\Scenes\Bistro\Textures"),
            material_dest_dir: PathBuf::from(r"D:\Shooty\Selas\Content\Materials\Bistro"),
            texture_dest_dir: PathBuf::from(r"D:\Shooty\Selas\Content\Textures\Bistro"),
            dst_sub_dir: String::from("Bistro\\"),
        }
    }
}

impl ToolConfig {
    /// Load from `explicit`, else from `$SELAS_CONFIG`, else return defaults.
    pub fn load(explicit: Option<&Path>) -> ScriptResult<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_path(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> ScriptResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
            .map_err(|e| ScriptError::config(format!("'{}': {e}", path.display())))
    }

    /// Parse config JSON.
    pub fn from_json_str(text: &str) -> ScriptResult<Self> {
        serde_json::from_str(text).map_err(|e| ScriptError::config(e.to_string()))
    }

    /// Resolve the engine checkout root from the process environment.
    pub fn engine_dir(&self) -> ScriptResult<PathBuf> {
        self.engine_dir_with(|key| std::env::var_os(key), cfg!(target_os = "linux"))
    }

    /// Engine root resolution with an injectable environment.
    ///
    /// Order: configured value, then `~/dev/Selas` on Linux, then the `Selas`
    /// environment variable.
    pub fn engine_dir_with(
        &self,
        env: impl Fn(&str) -> Option<OsString>,
        linux: bool,
    ) -> ScriptResult<PathBuf> {
        if let Some(dir) = &self.engine_dir {
            return Ok(dir.clone());
        }

        if linux {
            let home = env("HOME")
                .filter(|h| !h.is_empty())
                .ok_or_else(|| ScriptError::config("HOME is not set"))?;
            return Ok(PathBuf::from(home).join("dev").join("Selas"));
        }

        env(ENGINE_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                ScriptError::config(format!(
                    "environment variable '{ENGINE_DIR_ENV}' is not set and no engine_dir is configured"
                ))
            })
    }

    /// Target of the `demos` navigation keyword.
    pub fn demos_dir(&self) -> PathBuf {
        self.demos_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(r"D:\Demos"))
    }

    /// ImageMagick executable, defaulting to the Windows install path or `magick` on PATH.
    pub fn image_magick(&self) -> PathBuf {
        if let Some(p) = &self.image_magick {
            return p.clone();
        }
        if cfg!(windows) {
            PathBuf::from(r"C:\Program Files\ImageMagick-7.0.7-Q16\magick.exe")
        } else {
            PathBuf::from("magick")
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
