//! Markdown renderer for the docs tree.
//!
//! Layout:
//! - A static header block followed by a section divider.
//! - One `## <category>` section per immediate subdirectory of the root,
//!   each followed by a section divider. Plain files directly in the root
//!   are not listed.
//! - Inside a section, children are walked once in sorted order. A
//!   directory emits `### <name>` and recurses; a file emits a list item.
//!   Directories and files interleave in that order.
//! - The first file directly inside a category folder is preceded by a
//!   single `### <folder> — <label>` heading. Nested folders never get one.
//!
//! Names are emitted verbatim; Markdown-significant characters are not escaped.

use crate::error::Result;
use crate::link::file_link;
use crate::tree::{self, Excludes};
use std::path::Path;

pub const SECTION_DIVIDER: &str = "\n\n\n";
pub const DEFAULT_UNGROUPED_LABEL: &str = "ungrouped items";

#[derive(Debug, Clone, PartialEq)]
/// Text of the header block written above the first section.
pub struct Header {
    pub title: String,
    pub separator: String,
    pub description: String,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            title: "이펙티브 책 스터디".to_string(),
            separator: "📚🚨📚🚨📚🚨📚🚨📚🚨📚🚨📚🚨📚🚨📚🚨📚".to_string(),
            description: "책을 읽으면서 얻은 인사이트, 목차에 맞게 정리한 내용".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
/// Inputs that shape the rendered document apart from the tree itself.
pub struct RenderSettings {
    pub repo_url: String,
    pub branch: String,
    pub docs_prefix: String,
    pub header: Header,
    pub ungrouped_label: String,
    pub excludes: Excludes,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            repo_url: crate::config::DEFAULT_REPO_URL.to_string(),
            branch: crate::config::DEFAULT_BRANCH.to_string(),
            docs_prefix: crate::config::DEFAULT_DOCS.to_string(),
            header: Header::default(),
            ungrouped_label: DEFAULT_UNGROUPED_LABEL.to_string(),
            excludes: Excludes::default(),
        }
    }
}

/// Append-only document buffer that also tallies what it holds.
#[derive(Debug, Default)]
pub struct Document {
    text: String,
    sections: usize,
    subsections: usize,
    files: usize,
}

impl Document {
    fn line(&mut self, value: &str) {
        self.text.push_str(value);
        self.text.push('\n');
    }

    fn divider(&mut self) {
        self.text.push_str(SECTION_DIVIDER);
    }

    fn section(&mut self, name: &str) {
        self.sections += 1;
        self.line(&format!("## {}", name));
    }

    fn subsection(&mut self, title: &str) {
        self.subsections += 1;
        self.line(&format!("### {}", title));
    }

    fn item(&mut self, name: &str, url: &str) {
        self.files += 1;
        self.line(&format!("- [{}]({})", name, url));
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Finished render: the full Markdown text plus counts for reporting.
pub struct Rendered {
    pub text: String,
    pub sections: usize,
    pub subsections: usize,
    pub files: usize,
}

impl From<Document> for Rendered {
    fn from(doc: Document) -> Self {
        Rendered {
            text: doc.text,
            sections: doc.sections,
            subsections: doc.subsections,
            files: doc.files,
        }
    }
}

/// Render the whole index for `root_dir`.
///
/// Returns `Ok(None)` when the root is missing, unreadable, or empty after
/// excludes; the caller treats that as a successful no-op.
pub fn render(root_dir: &Path, settings: &RenderSettings) -> Result<Option<Rendered>> {
    if !root_dir.is_dir() || !tree::has_content(root_dir, &settings.excludes) {
        return Ok(None);
    }
    let mut doc = Document::default();
    write_header(&mut doc, &settings.header);

    for folder in tree::read_sorted(root_dir, root_dir, &settings.excludes)?
        .into_iter()
        .filter(|e| e.is_dir())
    {
        doc.section(&folder.name);
        render_folder_contents(&mut doc, &folder.path, root_dir, settings, true)?;
        doc.divider();
    }
    Ok(Some(doc.into()))
}

fn write_header(doc: &mut Document, header: &Header) {
    doc.line(&format!("# {}", header.title));
    doc.line(&format!("{}\n", header.separator));
    doc.line(&header.description);
    doc.line(&format!("\n{}", header.separator));
    doc.divider();
}

/// Append the listing of `folder` to `doc`, recursing into subdirectories.
///
/// `is_top_level_call` is true only for the category folders directly
/// under the root; it gates the ungrouped-items heading.
pub fn render_folder_contents(
    doc: &mut Document,
    folder: &Path,
    root_dir: &Path,
    settings: &RenderSettings,
    is_top_level_call: bool,
) -> Result<()> {
    let folder_name = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let folder_rel = folder
        .strip_prefix(root_dir)
        .map(crate::utils::to_slash)
        .unwrap_or_default();
    let mut ungrouped_emitted = false;

    for entry in tree::read_sorted(folder, root_dir, &settings.excludes)? {
        if entry.is_dir() {
            doc.subsection(&entry.name);
            render_folder_contents(doc, &entry.path, root_dir, settings, false)?;
        } else {
            if is_top_level_call && !ungrouped_emitted {
                doc.subsection(&format!(
                    "{} — {}",
                    folder_name, settings.ungrouped_label
                ));
                ungrouped_emitted = true;
            }
            let url = file_link(
                &settings.repo_url,
                &settings.branch,
                &settings.docs_prefix,
                &folder_rel,
                &entry.name,
            );
            doc.item(&entry.name, &url);
        }
    }
    Ok(())
}
