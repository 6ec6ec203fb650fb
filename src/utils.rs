//! Console prefixes and path display helpers shared by the CLI and printers.

use owo_colors::OwoColorize;
use std::path::Path;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    let tag = format!("⟦{}⟧", label);
    if colors_enabled() {
        paint(&tag)
    } else {
        tag
    }
}

pub fn error_prefix() -> String {
    prefix("error", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note", |s| s.yellow().bold().to_string())
}

pub fn info_prefix() -> String {
    prefix("info", |s| s.blue().bold().to_string())
}

pub fn success_prefix() -> String {
    prefix("done", |s| s.green().bold().to_string())
}

/// Render `p` relative to the current working directory when possible.
pub fn rel_to_wd(p: &Path) -> String {
    let shown = std::env::current_dir()
        .ok()
        .and_then(|wd| {
            let abs = if p.is_absolute() {
                p.to_path_buf()
            } else {
                wd.join(p)
            };
            pathdiff::diff_paths(abs, &wd)
        })
        .unwrap_or_else(|| p.to_path_buf());
    let s = to_slash(&shown);
    if s.is_empty() {
        ".".to_string()
    } else {
        s
    }
}

/// Join path components with `/` regardless of platform separator.
pub fn to_slash(p: &Path) -> String {
    p.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            std::path::Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
