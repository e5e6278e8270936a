//! Wavefront MTL material libraries and their translation to engine material JSON.
//!
//! The flow is single pass: [`parse_mtl_file`] interprets directive lines into
//! [`BlinnPhongMaterial`] records, then [`material_asset`] maps each record to the
//! flat key/value document the engine loads.

/// Material JSON emission and content-root layout.
pub mod convert;
/// Blinn-Phong material record.
pub mod material;
/// Directive-line interpreter.
pub mod parse;
