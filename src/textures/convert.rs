use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::Context as _;

use crate::foundation::{
    error::{ScriptError, ScriptResult},
    json::ensure_parent_dir,
};

/// Converts one texture file into another format.
pub trait TextureConverter {
    /// Convert `src` into `dst`; the output format follows `dst`'s extension.
    fn convert(&self, src: &Path, dst: &Path) -> ScriptResult<()>;
}

/// Runs an ImageMagick executable as `<magick> <src> <dst>`.
#[derive(Clone, Debug)]
pub struct MagickConverter {
    program: PathBuf,
}

impl MagickConverter {
    /// Converter running `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Configured executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Whether `<program> -version` runs successfully.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Shell-style rendering of the invocation, for logs.
    pub fn command_line(&self, src: &Path, dst: &Path) -> String {
        format!(
            "\"{}\" {} {}",
            self.program.display(),
            src.display(),
            dst.display()
        )
    }
}

impl TextureConverter for MagickConverter {
    fn convert(&self, src: &Path, dst: &Path) -> ScriptResult<()> {
        ensure_parent_dir(dst)?;
        tracing::info!(cmd = %self.command_line(src, dst), "converting texture");

        let out = Command::new(&self.program)
            .arg(src)
            .arg(dst)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                ScriptError::tool(format!(
                    "failed to spawn '{}' (is ImageMagick installed?): {e}",
                    self.program.display()
                ))
            })?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(ScriptError::tool(format!(
                "'{}' failed converting '{}' ({}): {}",
                self.program.display(),
                src.display(),
                out.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

/// Decodes and re-encodes through the `image` crate, no external binary needed.
///
/// Block-compressed DDS support is limited to what `image` decodes (BC1-BC3).
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateConverter;

impl TextureConverter for ImageCrateConverter {
    fn convert(&self, src: &Path, dst: &Path) -> ScriptResult<()> {
        ensure_parent_dir(dst)?;
        tracing::info!(src = %src.display(), dst = %dst.display(), "converting texture in-process");

        let img = image::open(src).with_context(|| format!("decode texture '{}'", src.display()))?;
        img.save(dst)
            .with_context(|| format!("encode texture '{}'", dst.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/textures/convert.rs"]
mod tests;
