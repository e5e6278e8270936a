use super::*;

fn engine() -> PathBuf {
    PathBuf::from("/home/me/dev/Selas")
}

fn demos() -> PathBuf {
    PathBuf::from(r"D:\Demos")
}

#[test]
fn no_keyword_is_engine_root() {
    assert_eq!(resolve_target(&engine(), &demos(), None), engine());
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(
        resolve_target(&engine(), &demos(), Some("CORE")),
        engine().join("Source").join("Core")
    );
    assert_eq!(
        resolve_target(&engine(), &demos(), Some("Selas")),
        engine().join("Source").join("Applications").join("Selas")
    );
}

#[test]
fn every_route_resolves_under_engine() {
    for (keyword, parts) in ROUTES {
        let expected = parts.iter().fold(engine(), |p, c| p.join(c));
        assert_eq!(resolve_target(&engine(), &demos(), Some(*keyword)), expected);
    }
    assert_eq!(
        resolve_target(&engine(), &demos(), Some("src")),
        resolve_target(&engine(), &demos(), Some("source"))
    );
    assert_eq!(
        resolve_target(&engine(), &demos(), Some("projects")),
        engine().join("_Projects")
    );
}

#[test]
fn demos_is_absolute() {
    assert_eq!(resolve_target(&engine(), &demos(), Some("demos")), demos());
}

#[test]
fn unknown_keyword_falls_back_to_engine() {
    assert_eq!(resolve_target(&engine(), &demos(), Some("nowhere")), engine());
}

#[test]
fn cd_command_format() {
    assert_eq!(
        cd_command(&engine().join("Scripts")),
        format!("cd {}", engine().join("Scripts").display())
    );
}
