use super::*;

#[test]
fn defaults_match_mtl_conventions() {
    let m = BlinnPhongMaterial::new("stone");
    assert_eq!(m.name, "stone");
    assert_eq!(m.diffuse, [1.0, 1.0, 1.0]);
    assert_eq!(m.ambient, [0.0, 0.0, 0.0]);
    assert_eq!(m.exponent, 1.0);
    assert_eq!(m.illum, 0);
    assert_eq!(m.opacity, 1.0);
    assert!(m.diffuse_map.is_none());
}

#[test]
fn transparent_illum_codes() {
    for code in [4, 6, 7, 9] {
        assert_eq!(IllumModel::from_code(code), IllumModel::Transparent);
        assert_eq!(IllumModel::from_code(code).shader_name(), "TransparentGGX");
    }
    for code in [0, 1, 2, 3, 5, 8, 10, -1] {
        assert_eq!(IllumModel::from_code(code), IllumModel::Opaque);
        assert_eq!(IllumModel::from_code(code).shader_name(), "Disney");
    }
}

#[test]
fn roughness_from_exponent() {
    assert!((blinn_phong_roughness(0.0) - 1.0).abs() < 1e-12);
    assert!((blinn_phong_roughness(6.0) - 0.5).abs() < 1e-12);
    assert!((blinn_phong_roughness(198.0) - 0.1).abs() < 1e-12);

    let mut m = BlinnPhongMaterial::new("m");
    m.exponent = 1.0;
    assert!((m.roughness() - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
}
