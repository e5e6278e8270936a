use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{ScriptError, ScriptResult},
    mtl::material::BlinnPhongMaterial,
};

/// Read and interpret an MTL file.
#[tracing::instrument]
pub fn parse_mtl_file(path: &Path) -> ScriptResult<Vec<BlinnPhongMaterial>> {
    let bytes = std::fs::read(path).with_context(|| format!("open mtl '{}'", path.display()))?;
    // Exporters often write Latin-1 names; undecodable bytes become U+FFFD.
    let text = String::from_utf8_lossy(&bytes);
    let materials = parse_mtl_str(&text)?;
    tracing::info!(count = materials.len(), "parsed materials");
    Ok(materials)
}

/// Interpret MTL text into materials, in `newmtl` order.
pub fn parse_mtl_str(text: &str) -> ScriptResult<Vec<BlinnPhongMaterial>> {
    let mut materials: Vec<BlinnPhongMaterial> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim_start().starts_with('#') {
            continue;
        }

        let mut tokens = raw.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        let args = Args {
            line,
            keyword,
            values: tokens.collect(),
        };

        if keyword == "newmtl" {
            let name = args.required(0)?;
            materials.push(BlinnPhongMaterial::new(name));
            continue;
        }

        let Some(directive) = Directive::from_keyword(keyword) else {
            tracing::warn!(line, keyword, "skipping unknown mtl directive");
            continue;
        };
        if directive == Directive::Ignored {
            continue;
        }

        let current = materials.last_mut().ok_or_else(|| {
            ScriptError::parse(line, format!("'{keyword}' appears before any newmtl"))
        })?;
        directive.apply(current, &args)?;
    }

    Ok(materials)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Directive {
    Diffuse,
    Ambient,
    Specular,
    Emissive,
    Transmission,
    DiffuseMap,
    BumpMap,
    SpecularMap,
    Exponent,
    Ior,
    Dissolve,
    Transparency,
    Illum,
    Ignored,
}

impl Directive {
    fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "Kd" => Self::Diffuse,
            "Ka" => Self::Ambient,
            "Ks" => Self::Specular,
            "Ke" => Self::Emissive,
            "Tf" => Self::Transmission,
            "map_Kd" => Self::DiffuseMap,
            "map_Bump" | "map_bump" | "bump" => Self::BumpMap,
            "map_Ks" => Self::SpecularMap,
            "Ns" => Self::Exponent,
            "Ni" => Self::Ior,
            "d" => Self::Dissolve,
            "Tr" => Self::Transparency,
            "illum" => Self::Illum,
            "map_Ka" | "map_Ke" | "map_d" | "map_Ns" | "map_Tr" | "disp" | "decal" | "refl"
            | "sharpness" | "Pr" | "Pm" | "Ps" | "Pc" | "Pcr" | "aniso" | "anisor" | "norm"
            | "map_Pr" | "map_Pm" | "map_Ps" => Self::Ignored,
            _ => return None,
        })
    }

    fn apply(self, m: &mut BlinnPhongMaterial, args: &Args<'_>) -> ScriptResult<()> {
        match self {
            Self::Diffuse => m.diffuse = args.color()?,
            Self::Ambient => m.ambient = args.color()?,
            Self::Specular => m.specular = args.color()?,
            Self::Emissive => m.emissive = args.color()?,
            Self::Transmission => m.transmission = args.color()?,
            Self::DiffuseMap => m.diffuse_map = Some(args.map_path()?),
            Self::BumpMap => m.bump_map = Some(args.map_path()?),
            Self::SpecularMap => m.specular_map = Some(args.map_path()?),
            Self::Exponent => m.exponent = args.exponent()?,
            Self::Ior => m.ior = args.float(0)?,
            Self::Dissolve => m.opacity = args.float(0)?,
            Self::Transparency => m.opacity = 1.0 - args.float(0)?,
            Self::Illum => m.illum = args.int(0)?,
            Self::Ignored => {}
        }
        Ok(())
    }
}

struct Args<'a> {
    line: usize,
    keyword: &'a str,
    values: Vec<&'a str>,
}

impl<'a> Args<'a> {
    fn required(&self, i: usize) -> ScriptResult<&'a str> {
        self.values.get(i).copied().ok_or_else(|| {
            ScriptError::parse(
                self.line,
                format!("'{}' is missing argument {}", self.keyword, i + 1),
            )
        })
    }

    fn float(&self, i: usize) -> ScriptResult<f64> {
        let raw = self.required(i)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                ScriptError::parse(
                    self.line,
                    format!("'{}' expects a number, got '{raw}'", self.keyword),
                )
            })
    }

    /// `Ns`; roughness is `sqrt(2 / (Ns + 2))`, so anything at or below -2 has none.
    fn exponent(&self) -> ScriptResult<f64> {
        let ns = self.float(0)?;
        if ns <= -2.0 {
            return Err(ScriptError::parse(
                self.line,
                format!("'{}' must be greater than -2, got {ns}", self.keyword),
            ));
        }
        Ok(ns)
    }

    fn int(&self, i: usize) -> ScriptResult<i32> {
        let raw = self.required(i)?;
        raw.parse::<i32>().map_err(|_| {
            ScriptError::parse(
                self.line,
                format!("'{}' expects an integer, got '{raw}'", self.keyword),
            )
        })
    }

    /// `r [g b]`; a lone value is a grey. An `xyz` prefix is accepted and treated as rgb.
    fn color(&self) -> ScriptResult<[f64; 3]> {
        let first = usize::from(self.values.first() == Some(&"xyz"));
        let r = self.float(first)?;
        if self.values.len() == first + 1 {
            return Ok([r, r, r]);
        }
        Ok([r, self.float(first + 1)?, self.float(first + 2)?])
    }

    /// Texture options (`-bm 1.0`, `-s 1 1 1`, ...) precede the file name.
    fn map_path(&self) -> ScriptResult<String> {
        self.values
            .last()
            .map(|s| (*s).to_string())
            .ok_or_else(|| {
                ScriptError::parse(self.line, format!("'{}' is missing a file name", self.keyword))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mtl/parse.rs"]
mod tests;
