/// Shader used for transparent illumination models.
pub const SHADER_TRANSPARENT_GGX: &str = "TransparentGGX";
/// Shader used for everything else.
pub const SHADER_DISNEY: &str = "Disney";

#[derive(Clone, Debug, PartialEq)]
/// One `newmtl` block, accumulated directive by directive.
///
/// Repeated directives overwrite earlier ones.
pub struct BlinnPhongMaterial {
    /// Name given to `newmtl`; also the output file stem.
    pub name: String,
    /// `Kd`
    pub diffuse: [f64; 3],
    /// `Ka`
    pub ambient: [f64; 3],
    /// `Ks`
    pub specular: [f64; 3],
    /// `Ke`
    pub emissive: [f64; 3],
    /// `Tf`
    pub transmission: [f64; 3],
    /// `map_Kd`
    pub diffuse_map: Option<String>,
    /// `map_Bump` / `bump`
    pub bump_map: Option<String>,
    /// `map_Ks`
    pub specular_map: Option<String>,
    /// `Ns`, the Blinn-Phong exponent.
    pub exponent: f64,
    /// `Ni`
    pub ior: f64,
    /// `illum`
    pub illum: i32,
    /// `d`, or `1 - Tr`.
    pub opacity: f64,
}

impl BlinnPhongMaterial {
    /// A material with MTL defaults (white diffuse, black everything else).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diffuse: [1.0, 1.0, 1.0],
            ambient: [0.0; 3],
            specular: [0.0; 3],
            emissive: [0.0; 3],
            transmission: [1.0, 1.0, 1.0],
            diffuse_map: None,
            bump_map: None,
            specular_map: None,
            exponent: 1.0,
            ior: 1.0,
            illum: 0,
            opacity: 1.0,
        }
    }

    /// Classified illumination model.
    pub fn illum_model(&self) -> IllumModel {
        IllumModel::from_code(self.illum)
    }

    /// Approximate GGX roughness for the Blinn-Phong exponent.
    pub fn roughness(&self) -> f64 {
        blinn_phong_roughness(self.exponent)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Coarse classification of MTL `illum` codes.
pub enum IllumModel {
    /// Codes 4, 6, 7 and 9 (glass, refraction, transparency).
    Transparent,
    /// Every other code.
    Opaque,
}

impl IllumModel {
    /// Classify an `illum` code.
    pub fn from_code(code: i32) -> Self {
        match code {
            4 | 6 | 7 | 9 => Self::Transparent,
            _ => Self::Opaque,
        }
    }

    /// Engine shader name for this class.
    pub fn shader_name(self) -> &'static str {
        match self {
            Self::Transparent => SHADER_TRANSPARENT_GGX,
            Self::Opaque => SHADER_DISNEY,
        }
    }
}

/// `sqrt(2 / (exponent + 2))`.
pub fn blinn_phong_roughness(exponent: f64) -> f64 {
    (2.0 / (exponent + 2.0)).sqrt()
}

#[cfg(test)]
#[path = "../../tests/unit/mtl/material.rs"]
mod tests;
