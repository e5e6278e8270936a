use std::{
    io::Write as _,
    process::{Command, Stdio},
};

use crate::foundation::error::{ScriptError, ScriptResult};

/// `<seconds>ul`, ready to paste as a C++ `unsigned long` literal.
pub fn version_stamp(unix_seconds: i64) -> String {
    format!("{unix_seconds}ul")
}

/// Stamp for the current UTC time.
pub fn current_stamp() -> String {
    version_stamp(chrono::Utc::now().timestamp())
}

/// Destination for copied text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn copy(&self, text: &str) -> ScriptResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An external program that reads clipboard contents from stdin.
pub struct ClipboardTool {
    /// Executable looked up on PATH.
    pub program: &'static str,
    /// Arguments selecting the clipboard selection/input mode.
    pub args: &'static [&'static str],
}

/// Tools to try, in order, for a target OS (`std::env::consts::OS` spelling).
pub fn clipboard_tools(os: &str, wayland: bool) -> Vec<ClipboardTool> {
    match os {
        "windows" => vec![ClipboardTool {
            program: "clip",
            args: &[],
        }],
        "macos" => vec![ClipboardTool {
            program: "pbcopy",
            args: &[],
        }],
        _ => {
            let mut tools = Vec::with_capacity(3);
            if wayland {
                tools.push(ClipboardTool {
                    program: "wl-copy",
                    args: &[],
                });
            }
            tools.push(ClipboardTool {
                program: "xclip",
                args: &["-selection", "clipboard"],
            });
            tools.push(ClipboardTool {
                program: "xsel",
                args: &["--clipboard", "--input"],
            });
            tools
        }
    }
}

/// Pipes text into the first clipboard tool found on PATH.
#[derive(Clone, Debug)]
pub struct SystemClipboard {
    tools: Vec<ClipboardTool>,
}

impl SystemClipboard {
    /// Tools for the running OS; `wl-copy` comes first when `WAYLAND_DISPLAY` is set.
    pub fn detect() -> Self {
        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty());
        Self::with_tools(clipboard_tools(std::env::consts::OS, wayland))
    }

    /// Try exactly `tools`, in order.
    pub fn with_tools(tools: Vec<ClipboardTool>) -> Self {
        Self { tools }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> ScriptResult<()> {
        for tool in &self.tools {
            let mut child = match Command::new(tool.program)
                .args(tool.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => child,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(program = tool.program, "clipboard tool not found");
                    continue;
                }
                Err(e) => {
                    return Err(ScriptError::tool(format!(
                        "failed to spawn '{}': {e}",
                        tool.program
                    )));
                }
            };

            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(text.as_bytes()).map_err(|e| {
                    ScriptError::tool(format!("failed writing to '{}': {e}", tool.program))
                })?;
            }

            let status = child.wait().map_err(|e| {
                ScriptError::tool(format!("failed waiting for '{}': {e}", tool.program))
            })?;
            if !status.success() {
                return Err(ScriptError::tool(format!(
                    "'{}' exited with {status}",
                    tool.program
                )));
            }
            tracing::debug!(program = tool.program, "copied to clipboard");
            return Ok(());
        }

        let tried: Vec<&str> = self.tools.iter().map(|t| t.program).collect();
        Err(ScriptError::tool(format!(
            "no clipboard tool found (tried: {})",
            tried.join(", ")
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/stamp.rs"]
mod tests;
