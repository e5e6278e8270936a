//! Texture conversion and the Bistro scene batch.

/// Bistro `*_BaseColor.dds` gathering, naming and material emission.
pub mod bistro;
/// Converter backends (external ImageMagick, in-process `image`).
pub mod convert;
