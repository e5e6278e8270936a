//! An `ls -ld --color=auto` clone.

use std::{
    fs::Metadata,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::ScriptResult;

const RESET: &str = "\x1b[00m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Name colour for a listed entry.
pub enum Colour {
    /// No colour.
    Default,
    /// Directories.
    Blue,
    /// Symlinks.
    Cyan,
    /// Executable regular files.
    Green,
    /// Symlinks whose target is missing.
    Red,
}

impl Colour {
    /// ANSI escape prefix; empty for [`Colour::Default`].
    pub fn code(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Blue => "\x1b[01;34m",
            Self::Cyan => "\x1b[01;36m",
            Self::Green => "\x1b[01;32m",
            Self::Red => "\x1b[01;05;37;41m",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// When to colourize names.
pub enum ColourMode {
    /// Colour only when stdout is a terminal that is not `dumb`.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

impl ColourMode {
    /// Whether colour applies given the terminal state.
    pub fn enabled(self, is_tty: bool, term: Option<&str>) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_tty && term.is_some_and(|t| !t.is_empty() && t != "dumb"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Type, permissions and colour derived from an `lstat`.
pub struct ModeInfo {
    /// Type character followed by three `rwx` triplets.
    pub perms: String,
    /// Name colour.
    pub colour: Colour,
    /// Symlink target, when the entry is a link.
    pub link: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One listed name.
pub struct Entry {
    /// Name as given on the command line or read from the directory.
    pub name: String,
    /// Mode classification.
    pub info: ModeInfo,
    /// Hard link count.
    pub nlink: u64,
    /// Size in bytes (of the link itself for symlinks).
    pub size: u64,
}

/// Names to list: the given ones, or the non-hidden entries of `cwd`. Sorted.
pub fn collect_targets(args: &[String], cwd: &Path) -> ScriptResult<Vec<String>> {
    let mut names = if args.is_empty() {
        let mut names = Vec::new();
        for entry in
            std::fs::read_dir(cwd).with_context(|| format!("read dir '{}'", cwd.display()))?
        {
            let entry = entry.with_context(|| format!("read dir '{}'", cwd.display()))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with('.') {
                names.push(name);
            }
        }
        names
    } else {
        args.to_vec()
    };
    names.sort();
    Ok(names)
}

/// `rwx` triplets for user, group and other from the low nine mode bits.
pub fn permission_string(type_char: char, mode: u32) -> String {
    let mut perms = String::with_capacity(10);
    perms.push(type_char);
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        perms.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        perms.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        perms.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    perms
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt as _;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

#[cfg(unix)]
fn link_count(meta: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt as _;
    meta.nlink()
}

#[cfg(not(unix))]
fn link_count(_meta: &Metadata) -> u64 {
    1
}

/// Classify an `lstat` result. `path` is used to read and check symlink targets.
pub fn mode_info(meta: &Metadata, path: &Path) -> ModeInfo {
    let ft = meta.file_type();
    let mode = mode_bits(meta);

    let (type_char, colour, link) = if ft.is_dir() {
        ('d', Colour::Blue, None)
    } else if ft.is_symlink() {
        let colour = if path.exists() {
            Colour::Cyan
        } else {
            Colour::Red
        };
        ('l', colour, std::fs::read_link(path).ok())
    } else if ft.is_file() && mode & 0o111 != 0 {
        ('-', Colour::Green, None)
    } else {
        ('-', Colour::Default, None)
    };

    ModeInfo {
        perms: permission_string(type_char, mode),
        colour,
        link,
    }
}

/// `lstat` one name resolved against `base`.
pub fn stat_entry(base: &Path, name: &str) -> std::io::Result<Entry> {
    let path = base.join(name);
    let meta = std::fs::symlink_metadata(&path)?;
    Ok(Entry {
        name: name.to_string(),
        info: mode_info(&meta, &path),
        nlink: link_count(&meta),
        size: meta.len(),
    })
}

/// `perms nlink size name[ -> target]`, the name optionally wrapped in colour codes.
pub fn format_entry(entry: &Entry, use_colour: bool) -> String {
    let mut line = format!("{} {:>4} {:>8} ", entry.info.perms, entry.nlink, entry.size);
    let code = entry.info.colour.code();
    if use_colour && !code.is_empty() {
        line.push_str(code);
        line.push_str(&entry.name);
        line.push_str(RESET);
    } else {
        line.push_str(&entry.name);
    }
    if let Some(target) = &entry.info.link {
        line.push_str(" -> ");
        line.push_str(&target.to_string_lossy());
    }
    line
}

/// List `names` to `out`; names that cannot be stat'ed are reported on `err` and skipped.
///
/// Returns the number of entries listed.
pub fn list(
    base: &Path,
    names: &[String],
    use_colour: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> ScriptResult<usize> {
    let mut listed = 0;
    for name in names {
        match stat_entry(base, name) {
            Ok(entry) => {
                writeln!(out, "{}", format_entry(&entry, use_colour)).context("write listing")?;
                listed += 1;
            }
            Err(_) => {
                writeln!(err, "{name}: No such file or directory").context("write listing")?;
            }
        }
    }
    Ok(listed)
}

#[cfg(test)]
#[path = "../../tests/unit/shell/listing.rs"]
mod tests;
