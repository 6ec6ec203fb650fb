//! One generate run: render the docs tree and reconcile it with the README.
//!
//! The README is always regenerated from scratch. In write mode it is fully
//! overwritten with a single `fs::write`; check and dry-run modes never touch
//! the filesystem beyond reading.

use crate::config::Effective;
use crate::error::{DocIndexError, Result};
use crate::models::{GenerateResult, Status, Summary};
use crate::render::{self, Rendered};
use crate::utils;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Run generation with the resolved settings in `eff`.
pub fn run_generate(eff: &Effective) -> Result<GenerateResult> {
    let docs_path = eff.docs_path();
    let readme_path = eff.readme_path();
    let mut result = GenerateResult {
        readme: utils::rel_to_wd(&readme_path),
        docs: utils::rel_to_wd(&docs_path),
        status: Status::Empty,
        changed: false,
        wrote: false,
        summary: Summary::default(),
        preview: None,
    };

    let Some(rendered) = render::render(&docs_path, &eff.render)? else {
        return Ok(result);
    };
    result.summary = summarize(&rendered);
    result.changed = differs_from_current(&readme_path, &rendered.text)?;

    if eff.dry_run {
        result.status = Status::Preview;
        result.preview = Some(rendered.text);
    } else if eff.check {
        result.status = if result.changed {
            Status::Stale
        } else {
            Status::UpToDate
        };
    } else {
        if let Some(parent) = readme_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| DocIndexError::io(parent, e))?;
            }
        }
        fs::write(&readme_path, rendered.text.as_bytes())
            .map_err(|e| DocIndexError::io(&readme_path, e))?;
        result.status = Status::Written;
        result.wrote = true;
    }
    Ok(result)
}

fn summarize(r: &Rendered) -> Summary {
    Summary {
        sections: r.sections,
        subsections: r.subsections,
        files: r.files,
    }
}

/// Compare against the README on disk; a missing README counts as changed.
fn differs_from_current(readme: &Path, rendered: &str) -> Result<bool> {
    match fs::read(readme) {
        Ok(current) => Ok(current != rendered.as_bytes()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
        Err(e) => Err(DocIndexError::io(readme, e)),
    }
}
