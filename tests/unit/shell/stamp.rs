use super::*;

#[test]
fn stamp_has_unsigned_long_suffix() {
    assert_eq!(version_stamp(1_514_764_800), "1514764800ul");
}

#[test]
fn current_stamp_is_recent() {
    let stamp = current_stamp();
    let secs: i64 = stamp.strip_suffix("ul").unwrap().parse().unwrap();
    // 2017-01-01, comfortably in the past.
    assert!(secs > 1_483_228_800);
}

#[test]
fn tool_order_per_platform() {
    let names = |tools: Vec<ClipboardTool>| tools.iter().map(|t| t.program).collect::<Vec<_>>();
    assert_eq!(names(clipboard_tools("windows", false)), vec!["clip"]);
    assert_eq!(names(clipboard_tools("macos", true)), vec!["pbcopy"]);
    assert_eq!(
        names(clipboard_tools("linux", true)),
        vec!["wl-copy", "xclip", "xsel"]
    );
    assert_eq!(names(clipboard_tools("linux", false)), vec!["xclip", "xsel"]);
}

#[test]
fn no_tool_on_path_is_an_error() {
    let clip = SystemClipboard::with_tools(vec![ClipboardTool {
        program: "selas-no-such-clipboard-tool",
        args: &[],
    }]);
    let err = clip.copy("1ul").unwrap_err();
    assert!(err.to_string().contains("selas-no-such-clipboard-tool"));
}

#[cfg(unix)]
#[test]
fn first_working_tool_receives_text() {
    let clip = SystemClipboard::with_tools(vec![
        ClipboardTool {
            program: "selas-no-such-clipboard-tool",
            args: &[],
        },
        ClipboardTool {
            program: "cat",
            args: &[],
        },
    ]);
    clip.copy("123ul").unwrap();
}

#[cfg(unix)]
#[test]
fn failing_tool_is_reported() {
    let clip = SystemClipboard::with_tools(vec![ClipboardTool {
        program: "false",
        args: &[],
    }]);
    assert!(matches!(clip.copy("1ul"), Err(ScriptError::Tool(_))));
}
