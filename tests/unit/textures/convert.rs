use super::*;

#[test]
fn command_line_quotes_program() {
    let c = MagickConverter::new("/opt/magick");
    assert_eq!(
        c.command_line(Path::new("a.dds"), Path::new("b.png")),
        "\"/opt/magick\" a.dds b.png"
    );
}

#[test]
fn missing_program_is_unavailable_and_fails_to_spawn() {
    let dir = tempfile::tempdir().unwrap();
    let c = MagickConverter::new(dir.path().join("no-such-magick"));
    assert!(!c.is_available());

    let err = c
        .convert(&dir.path().join("a.dds"), &dir.path().join("out").join("a.png"))
        .unwrap_err();
    assert!(matches!(err, ScriptError::Tool(_)));
}

#[cfg(unix)]
#[test]
fn nonzero_exit_is_a_tool_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MagickConverter::new("false")
        .convert(&dir.path().join("a.dds"), &dir.path().join("a.png"))
        .unwrap_err();
    assert!(matches!(err, ScriptError::Tool(_)));
}

#[cfg(unix)]
#[test]
fn zero_exit_is_success_and_creates_parent() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("Textures").join("Bistro").join("a.png");
    MagickConverter::new("true")
        .convert(&dir.path().join("a.dds"), &dst)
        .unwrap();
    assert!(dst.parent().unwrap().is_dir());
}

#[test]
fn image_crate_converter_reencodes() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src.png");
    let dst = dir.path().join("out").join("dst.png");

    image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
        .save(&src)
        .unwrap();

    ImageCrateConverter.convert(&src, &dst).unwrap();

    let back = image::open(&dst).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (3, 2));
    assert_eq!(back.get_pixel(1, 1), &image::Rgba([10, 20, 30, 255]));
}

#[test]
fn image_crate_converter_reports_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let err = ImageCrateConverter
        .convert(&dir.path().join("missing.png"), &dir.path().join("x.png"))
        .unwrap_err();
    assert!(err.to_string().contains("missing.png"));
}
