use super::*;

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Sample {
    shader_name: &'static str,
    metalness: f64,
}

#[test]
fn indents_with_four_spaces_and_keeps_field_order() {
    let s = to_pretty_json(&Sample {
        shader_name: "Disney",
        metalness: 0.1,
    })
    .unwrap();
    assert_eq!(s, "{\n    \"ShaderName\": \"Disney\",\n    \"Metalness\": 0.1\n}");
}

#[test]
fn write_creates_missing_parent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Materials").join("a.json");
    write_pretty_json(&path, &serde_json::json!({ "A": 1 })).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n    \"A\": 1\n}");
}
