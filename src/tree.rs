//! Directory listing for the docs tree.
//!
//! Entries are read fresh on every call and returned sorted by name using
//! ordinal comparison of UTF-16 code units, so `Zeta` sorts after `Alpha`
//! and uppercase names sort before lowercase ones.

use crate::error::{DocIndexError, Result};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone)]
/// A directory or regular file found under the docs root.
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Compiled exclude patterns, matched against entry names and root-relative paths.
#[derive(Debug, Default, Clone)]
pub struct Excludes {
    patterns: Vec<Pattern>,
}

impl Excludes {
    pub fn compile(raw: &[String]) -> Result<Self> {
        let patterns = raw
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| DocIndexError::InvalidPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Excludes { patterns })
    }

    pub fn is_excluded(&self, name: &str, rel_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches(name) || p.matches(rel_path))
    }
}

/// List the immediate children of `dir`, sorted ascending by name.
///
/// Nodes that are neither directories nor regular files are skipped, as are
/// entries matching `excludes`. `root` is used only to build the relative
/// path handed to the exclude matcher.
pub fn read_sorted(dir: &Path, root: &Path, excludes: &Excludes) -> Result<Vec<Entry>> {
    let rd = fs::read_dir(dir).map_err(|e| DocIndexError::io(dir, e))?;
    let mut entries = Vec::new();
    for item in rd {
        let item = item.map_err(|e| DocIndexError::io(dir, e))?;
        let path = item.path();
        let name = item.file_name().to_string_lossy().to_string();
        let kind = if path.is_dir() {
            EntryKind::Directory
        } else if path.is_file() {
            EntryKind::File
        } else {
            continue;
        };
        let rel = path
            .strip_prefix(root)
            .map(crate::utils::to_slash)
            .unwrap_or_else(|_| name.clone());
        if excludes.is_excluded(&name, &rel) {
            continue;
        }
        entries.push(Entry { name, path, kind });
    }
    entries.sort_by(|a, b| a.name.encode_utf16().cmp(b.name.encode_utf16()));
    Ok(entries)
}

/// Whether `root` holds anything to index once `excludes` are applied.
///
/// A missing, unreadable, or empty root all count as "no content", as does
/// a root whose every entry is excluded.
pub fn has_content(root: &Path, excludes: &Excludes) -> bool {
    read_sorted(root, root, excludes).map_or(false, |entries| !entries.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_sorted_orders_by_name_case_sensitive() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("b.md"), "").unwrap();
        fs::write(root.join("a.md"), "").unwrap();
        fs::create_dir(root.join("Zeta")).unwrap();
        fs::create_dir(root.join("Alpha")).unwrap();

        let names: Vec<_> = read_sorted(root, root, &Excludes::default())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Zeta", "a.md", "b.md"]);
    }

    #[test]
    fn test_read_sorted_marks_kinds() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("x.txt"), "x").unwrap();

        let entries = read_sorted(root, root, &Excludes::default()).unwrap();
        assert!(entries[0].is_dir());
        assert_eq!(entries[1].kind, EntryKind::File);
    }

    #[test]
    fn test_excludes_match_name_and_relative_path() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("A/drafts")).unwrap();
        fs::write(root.join("A/.DS_Store"), "").unwrap();
        fs::write(root.join("A/keep.md"), "").unwrap();

        let ex = Excludes::compile(&[".DS_Store".to_string(), "A/drafts".to_string()]).unwrap();
        let names: Vec<_> = read_sorted(&root.join("A"), root, &ex)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["keep.md"]);
    }

    #[test]
    fn test_invalid_exclude_pattern_is_reported() {
        let err = Excludes::compile(&["[".to_string()]).unwrap_err();
        assert!(matches!(err, DocIndexError::InvalidPattern { .. }));
    }

    #[test]
    fn test_has_content_missing_and_empty() {
        let tmp = tempdir().unwrap();
        let none = Excludes::default();
        assert!(!has_content(&tmp.path().join("nope"), &none));
        assert!(!has_content(tmp.path(), &none));
        fs::write(tmp.path().join("f"), "").unwrap();
        assert!(has_content(tmp.path(), &none));
    }

    #[test]
    fn test_has_content_ignores_excluded_entries() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(".DS_Store"), "").unwrap();
        let ex = Excludes::compile(&[".DS_Store".to_string()]).unwrap();
        assert!(!has_content(tmp.path(), &ex));
        assert!(has_content(tmp.path(), &Excludes::default()));
    }

    #[test]
    fn test_read_sorted_uses_utf16_code_unit_order() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        // U+1F4DA is a surrogate pair (0xD83D..) and sorts before U+FF21 (0xFF21)
        fs::write(root.join("\u{FF21}.md"), "").unwrap();
        fs::write(root.join("\u{1F4DA}.md"), "").unwrap();

        let names: Vec<_> = read_sorted(root, root, &Excludes::default())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["\u{1F4DA}.md", "\u{FF21}.md"]);
    }
}
