//! Developer utilities for the Selas content pipeline.
//!
//! Each utility is a small run-to-completion operation exposed both as a library
//! function and as a `selas` subcommand:
//!
//! - [`mtl`]: translate Wavefront MTL material libraries into engine material JSON
//! - [`textures`]: gather the Bistro texture set, emit materials, convert textures
//! - [`shell`]: `cd` targets for the engine tree, an `ls -ld` clone, clipboard stamps
//!
//! Shared ambient pieces (errors, configuration, JSON output) live in [`foundation`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod foundation;
pub mod mtl;
pub mod shell;
pub mod textures;

pub use foundation::config::{BistroPaths, ToolConfig};
pub use foundation::error::{ScriptError, ScriptResult};
pub use foundation::json::{to_pretty_json, write_pretty_json};
pub use mtl::convert::{
    ContentLayout, MaterialAsset, content_layout, material_asset, texture_reference,
    write_material_assets,
};
pub use mtl::material::{BlinnPhongMaterial, IllumModel, blinn_phong_roughness};
pub use mtl::parse::{parse_mtl_file, parse_mtl_str};
pub use shell::listing::ColourMode;
pub use shell::navigate::{cd_command, resolve_target};
pub use shell::stamp::{Clipboard, SystemClipboard, current_stamp, version_stamp};
pub use textures::bistro::{
    BistroMaterial, ConvertReport, bistro_material, convert_textures, create_material_assets,
    gather_materials,
};
pub use textures::convert::{ImageCrateConverter, MagickConverter, TextureConverter};
