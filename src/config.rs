//! Configuration discovery and effective settings resolution.
//!
//! docindex reads `docindex.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `docs`: `docs`
//! - `readme`: `README.md`
//! - `repo_url`: the study repository URL below
//! - `branch`: `main`
//! - `output`: `human`
//! - `exclude`: none
//! - `header.*`, `render.ungrouped_label`: built-in header text and label
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{DocIndexError, Result};
use crate::render::{Header, RenderSettings, DEFAULT_UNGROUPED_LABEL};
use crate::tree::Excludes;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPO_URL: &str = "https://github.com/Mash-Up-Android/Effective_Study";
pub const DEFAULT_DOCS: &str = "docs";
pub const DEFAULT_README: &str = "README.md";
pub const DEFAULT_BRANCH: &str = "main";

const CONFIG_FILES: [&str; 3] = ["docindex.toml", "docindex.yaml", "docindex.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Header overrides under `[header]`; missing fields keep the built-in text.
pub struct HeaderCfg {
    pub title: Option<String>,
    pub separator: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Rendering overrides under `[render]`.
pub struct RenderCfg {
    pub ungrouped_label: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `docindex.toml|yaml`.
pub struct DocIndexConfig {
    pub docs: Option<String>,
    pub readme: Option<String>,
    pub repo_url: Option<String>,
    pub branch: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub header: Option<HeaderCfg>,
    #[serde(default)]
    pub render: Option<RenderCfg>,
}

/// CLI-provided overrides; `None` means "not given on the command line".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub repo_root: Option<String>,
    pub docs: Option<String>,
    pub readme: Option<String>,
    pub repo_url: Option<String>,
    pub branch: Option<String>,
    pub output: Option<String>,
    pub check: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the generate run.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_file: Option<PathBuf>,
    pub docs: String,
    pub readme: String,
    pub output: String,
    pub check: bool,
    pub dry_run: bool,
    pub render: RenderSettings,
}

impl Effective {
    pub fn docs_path(&self) -> PathBuf {
        self.repo_root.join(&self.docs)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.repo_root.join(&self.readme)
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `docindex.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Locate the config file in `root`, preferring TOML over YAML.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|f| root.join(f))
        .find(|p| p.is_file())
}

/// Load `DocIndexConfig` from `docindex.toml` or `docindex.yaml|yml` if present.
///
/// A present but malformed file is an error rather than silently ignored.
pub fn load_config(root: &Path) -> Result<Option<DocIndexConfig>> {
    let Some(path) = find_config(root) else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path).map_err(|e| DocIndexError::io(&path, e))?;
    let is_toml = path.extension().map_or(false, |e| e == "toml");
    let parsed = if is_toml {
        toml::from_str::<DocIndexConfig>(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<DocIndexConfig>(&s).map_err(|e| e.to_string())
    };
    parsed
        .map(Some)
        .map_err(|message| DocIndexError::ConfigParse { path, message })
}

/// Reject docs paths that escape the repository root; links are built
/// from this path and cannot point above the repository.
pub fn validate_docs(docs: &str) -> Result<()> {
    let p = Path::new(docs);
    let escapes = p.is_absolute()
        || docs.starts_with('/')
        || docs.starts_with('\\')
        || docs.split(['/', '\\']).any(|seg| seg == "..");
    if escapes {
        return Err(DocIndexError::InvalidDocsPath {
            docs: docs.to_string(),
        });
    }
    Ok(())
}

/// Normalize a docs path into the URL segment used in links.
pub fn docs_prefix(docs: &str) -> String {
    let mut s = docs.replace('\\', "/");
    while let Some(rest) = s.strip_prefix("./") {
        s = rest.to_string();
    }
    s.trim_matches('/').to_string()
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &CliOverrides) -> Result<Effective> {
    let start = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let config_file = find_config(&repo_root);
    let cfg = load_config(&repo_root)?.unwrap_or_default();

    let docs = cli
        .docs
        .clone()
        .or(cfg.docs)
        .unwrap_or_else(|| DEFAULT_DOCS.to_string());
    validate_docs(&docs)?;
    let readme = cli
        .readme
        .clone()
        .or(cfg.readme)
        .unwrap_or_else(|| DEFAULT_README.to_string());
    let repo_url = cli
        .repo_url
        .clone()
        .or(cfg.repo_url)
        .unwrap_or_else(|| DEFAULT_REPO_URL.to_string());
    let branch = cli
        .branch
        .clone()
        .or(cfg.branch)
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string());
    let output = cli
        .output
        .clone()
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let default_header = Header::default();
    let header = match cfg.header {
        Some(h) => Header {
            title: h.title.unwrap_or(default_header.title),
            separator: h.separator.unwrap_or(default_header.separator),
            description: h.description.unwrap_or(default_header.description),
        },
        None => default_header,
    };
    let ungrouped_label = cfg
        .render
        .and_then(|r| r.ungrouped_label)
        .unwrap_or_else(|| DEFAULT_UNGROUPED_LABEL.to_string());
    let excludes = Excludes::compile(&cfg.exclude)?;

    Ok(Effective {
        repo_root,
        config_file,
        render: RenderSettings {
            repo_url,
            branch,
            docs_prefix: docs_prefix(&docs),
            header,
            ungrouped_label,
            excludes,
        },
        docs,
        readme,
        output,
        check: cli.check,
        dry_run: cli.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn at(root: &Path) -> CliOverrides {
        CliOverrides {
            repo_root: root.to_str().map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(&at(dir.path())).unwrap();
        assert!(eff.config_file.is_none());
        assert_eq!(eff.docs, "docs");
        assert_eq!(eff.readme, "README.md");
        assert_eq!(eff.output, "human");
        assert_eq!(eff.render.repo_url, DEFAULT_REPO_URL);
        assert_eq!(eff.render.branch, "main");
        assert_eq!(eff.render.docs_prefix, "docs");
        assert_eq!(eff.render.header, Header::default());
        assert_eq!(eff.render.ungrouped_label, "ungrouped items");
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("docindex.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
docs = "./notes"
readme = "INDEX.md"
repo_url = "https://github.com/acme/study"
output = "json"
exclude = [".DS_Store"]
[header]
title = "Study"
[render]
ungrouped_label = "loose files"
    "#
        )
        .unwrap();

        let eff = resolve_effective(&at(root)).unwrap();
        assert_eq!(eff.config_file, Some(root.join("docindex.toml")));
        assert_eq!(eff.docs, "./notes");
        assert_eq!(eff.render.docs_prefix, "notes");
        assert_eq!(eff.readme_path(), root.join("INDEX.md"));
        assert_eq!(eff.output, "json");
        assert_eq!(eff.render.header.title, "Study");
        // unspecified header fields keep built-in text
        assert_eq!(eff.render.header.separator, Header::default().separator);
        assert_eq!(eff.render.ungrouped_label, "loose files");
    }

    #[test]
    fn test_load_yaml_from_nested_start() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("docindex.yaml"),
            "repo_url: https://example.com/r\nbranch: trunk\n",
        )
        .unwrap();
        fs::create_dir_all(root.join("docs/A")).unwrap();

        let eff = resolve_effective(&at(&root.join("docs/A"))).unwrap();
        assert_eq!(eff.repo_root, root.to_path_buf());
        assert_eq!(eff.render.repo_url, "https://example.com/r");
        assert_eq!(eff.render.branch, "trunk");
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("docindex.toml"), "docs = \"notes\"\noutput = \"json\"\n").unwrap();

        let cli = CliOverrides {
            docs: Some("docs".into()),
            output: Some("human".into()),
            check: true,
            ..at(root)
        };
        let eff = resolve_effective(&cli).unwrap();
        assert_eq!(eff.docs, "docs");
        assert_eq!(eff.output, "human");
        assert!(eff.check);
        assert!(!eff.dry_run);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("docindex.toml"), "docs = [").unwrap();
        let err = resolve_effective(&at(dir.path())).unwrap_err();
        assert!(matches!(err, DocIndexError::ConfigParse { .. }));
    }

    #[test]
    fn test_bad_exclude_pattern_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("docindex.toml"), "exclude = [\"[\"]\n").unwrap();
        let err = resolve_effective(&at(dir.path())).unwrap_err();
        assert!(matches!(err, DocIndexError::InvalidPattern { .. }));
    }

    #[test]
    fn test_docs_prefix_normalization() {
        assert_eq!(docs_prefix("docs"), "docs");
        assert_eq!(docs_prefix("./docs/"), "docs");
        assert_eq!(docs_prefix("site\\docs"), "site/docs");
    }

    #[test]
    fn test_docs_outside_repo_root_is_rejected() {
        assert!(validate_docs("docs").is_ok());
        assert!(validate_docs("./site/docs").is_ok());
        assert!(validate_docs("../notes").is_err());
        assert!(validate_docs("docs/../../x").is_err());
        assert!(validate_docs("..\\notes").is_err());
        assert!(validate_docs("/abs/docs").is_err());

        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let cli = CliOverrides {
            docs: Some("../notes".into()),
            ..at(dir.path())
        };
        let err = resolve_effective(&cli).unwrap_err();
        assert!(matches!(err, DocIndexError::InvalidDocsPath { .. }));
    }
}
