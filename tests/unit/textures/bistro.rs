use std::cell::RefCell;

use super::*;

fn paths_in(root: &Path) -> BistroPaths {
    BistroPaths {
        texture_source_dir: root.join("Scenes").join("Bistro").join("Textures"),
        material_dest_dir: root.join("Materials").join("Bistro"),
        texture_dest_dir: root.join("Textures").join("Bistro"),
        dst_sub_dir: "Bistro\\".to_string(),
    }
}

fn touch(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"").unwrap();
}

#[derive(Default)]
struct RecordingConverter {
    calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl TextureConverter for RecordingConverter {
    fn convert(&self, src: &Path, dst: &Path) -> ScriptResult<()> {
        self.calls
            .borrow_mut()
            .push((src.to_path_buf(), dst.to_path_buf()));
        Ok(())
    }
}

#[test]
fn asset_names_use_dst_sub_dir() {
    let paths = BistroPaths::default();
    assert_eq!(paths.albedo_asset_name("X"), "Bistro\\X_Albedo.png");
    assert_eq!(paths.specular_asset_name("X"), "Bistro\\X_Specular.png");
}

#[test]
fn source_and_dest_paths() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    assert_eq!(
        paths.albedo_source_path("Wood"),
        paths.texture_source_dir.join("Wood_0_BaseColor.dds")
    );
    assert_eq!(
        paths.specular_source_path("Wood"),
        paths.texture_source_dir.join("Wood_0_Specular.dds")
    );
    assert_eq!(
        paths.albedo_dest_path("Wood"),
        paths.texture_dest_dir.join("Wood_Albedo.png")
    );
    assert_eq!(
        paths.specular_dest_path("Wood"),
        paths.texture_dest_dir.join("Wood_Specular.png")
    );
}

#[test]
fn gathers_base_color_dds_only() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    let src = &paths.texture_source_dir;
    touch(&src.join("Wood_0_BaseColor.dds"));
    touch(&src.join("Glass_0_BaseColor.dds"));
    touch(&src.join("Wood_0_Specular.dds"));
    touch(&src.join("Wood_0_Normal.dds"));
    touch(&src.join("Stone_0_BaseColor.png"));

    let names = gather_materials(src).unwrap();
    assert_eq!(names, vec!["Glass".to_string(), "Wood".to_string()]);
}

#[test]
fn gather_missing_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(gather_materials(&dir.path().join("nope")).is_err());
}

#[test]
fn glass_materials_are_transparent() {
    let paths = BistroPaths::default();
    let m = bistro_material(&paths, "Bistro_Window_Glass", false);
    assert_eq!(m.shader_name.as_deref(), Some("TransparentGGX"));
    assert_eq!(m.ior, Some(1.52));
    assert_eq!(m.roughness, Some(0.03));
    assert!(m.specular_texture.is_none());

    let m = bistro_material(&paths, "Wood", true);
    assert!(m.shader_name.is_none());
    assert_eq!(m.metalness, 0.1);
    assert_eq!(m.specular_texture.as_deref(), Some("Bistro\\Wood_Specular.png"));
}

#[test]
fn creates_material_files() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    touch(&paths.specular_source_path("Wood"));

    let names = vec!["Wood".to_string(), "Glass".to_string()];
    let written = create_material_assets(&paths, &names).unwrap();
    assert_eq!(written.len(), 2);

    let wood = std::fs::read_to_string(paths.material_path("Wood")).unwrap();
    assert_eq!(
        wood,
        "{\n    \"Metalness\": 0.1,\n    \"AlbedoTexture\": \"Bistro\\\\Wood_Albedo.png\",\n    \"SpecularTexture\": \"Bistro\\\\Wood_Specular.png\"\n}"
    );

    let glass: BistroMaterial =
        serde_json::from_str(&std::fs::read_to_string(paths.material_path("Glass")).unwrap())
            .unwrap();
    assert!(glass.specular_texture.is_none());
    assert_eq!(glass.shader_name.as_deref(), Some("TransparentGGX"));
}

#[test]
fn convert_skips_missing_sources() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    touch(&paths.albedo_source_path("Wood"));

    let conv = RecordingConverter::default();
    let report = convert_textures(&paths, &["Wood".to_string()], &conv).unwrap();
    assert_eq!(
        report,
        ConvertReport {
            converted: 1,
            skipped: 1
        }
    );
    assert_eq!(
        conv.calls.borrow().as_slice(),
        &[(
            paths.albedo_source_path("Wood"),
            paths.albedo_dest_path("Wood")
        )]
    );
}
