//! Evidence normalization
//!
//! Turns loosely-typed project information (a file listing plus whatever
//! manifests the caller could read) into a canonical [`Evidence`] record that
//! the detector can consume without caring where the data came from.

use ignore::WalkBuilder;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Manifest files read from disk when scanning a project directory
const PACKAGE_JSON: &str = "package.json";
const REQUIREMENTS_FILES: &[&str] = &["requirements.txt", "pyproject.toml"];
const GO_MOD: &str = "go.mod";
const PUBSPEC_YAML: &str = "pubspec.yaml";

const SKIPPED_DIRS: &[&str] = &[".git", "node_modules", ".venv", "vendor"];

/// Upper bound on listed files for a directory scan
const MAX_SCANNED_FILES: usize = 20_000;

#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("Project path does not exist or is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Canonical detection input
///
/// `dependencies` is `Some` whenever a package manifest object was supplied,
/// even an empty one: its presence alone is a detection signal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evidence {
    pub files: Vec<String>,
    pub dependencies: Option<BTreeMap<String, String>>,
    pub requirements_txt: Option<String>,
    pub go_mod: Option<String>,
    pub pubspec_yaml: Option<String>,
}

impl Evidence {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Attaches a parsed `package.json` object, merging `dependencies` and
    /// `devDependencies` into one map. A direct dependency wins over a
    /// development dependency with the same name.
    pub fn with_package_json(mut self, manifest: &Map<String, Value>) -> Self {
        let mut merged = BTreeMap::new();

        for group in ["devDependencies", "dependencies"] {
            if let Some(Value::Object(deps)) = manifest.get(group) {
                for (name, version) in deps {
                    let version = match version {
                        Value::String(v) => v.clone(),
                        other => other.to_string(),
                    };
                    merged.insert(name.clone(), version);
                }
            }
        }

        self.dependencies = Some(merged);
        self
    }

    pub fn with_requirements(mut self, content: impl Into<String>) -> Self {
        self.requirements_txt = non_blank(content.into());
        self
    }

    pub fn with_go_mod(mut self, content: impl Into<String>) -> Self {
        self.go_mod = non_blank(content.into());
        self
    }

    pub fn with_pubspec(mut self, content: impl Into<String>) -> Self {
        self.pubspec_yaml = non_blank(content.into());
        self
    }

    /// Builds evidence from a project checkout on disk.
    ///
    /// Walks the tree honoring `.gitignore` and friends, and reads the root
    /// manifests the detector understands.
    pub fn from_directory(root: &Path) -> Result<Self, EvidenceError> {
        if !root.is_dir() {
            return Err(EvidenceError::NotADirectory(root.to_path_buf()));
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .filter_entry(|entry| {
                !SKIPPED_DIRS
                    .iter()
                    .any(|dir| entry.file_name() == std::ffi::OsStr::new(dir))
            })
            .build();

        for entry in walker.flatten() {
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(root) {
                files.push(relative.to_string_lossy().replace('\\', "/"));
            }
            if files.len() >= MAX_SCANNED_FILES {
                debug!(limit = MAX_SCANNED_FILES, "File listing truncated");
                break;
            }
        }
        files.sort();

        debug!(root = %root.display(), files = files.len(), "Scanned project directory");

        let mut evidence = Evidence::new(files);

        let package_json = root.join(PACKAGE_JSON);
        if let Some(content) = read_optional(&package_json)? {
            let value: Value =
                serde_json::from_str(&content).map_err(|source| EvidenceError::InvalidManifest {
                    path: package_json.clone(),
                    source,
                })?;
            if let Value::Object(manifest) = value {
                evidence = evidence.with_package_json(&manifest);
            }
        }

        for name in REQUIREMENTS_FILES {
            if let Some(content) = read_optional(&root.join(name))? {
                evidence = evidence.with_requirements(content);
                break;
            }
        }

        if let Some(content) = read_optional(&root.join(GO_MOD))? {
            evidence = evidence.with_go_mod(content);
        }
        if let Some(content) = read_optional(&root.join(PUBSPEC_YAML))? {
            evidence = evidence.with_pubspec(content);
        }

        Ok(evidence)
    }

    pub fn has_package_manifest(&self) -> bool {
        self.dependencies.is_some() || self.any_file_ends_with(PACKAGE_JSON)
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies
            .as_ref()
            .map(|deps| deps.contains_key(name))
            .unwrap_or(false)
    }

    /// True when any listed path ends with `suffix` (`"go.mod"`, `".tsx"`, ...)
    pub fn any_file_ends_with(&self, suffix: &str) -> bool {
        self.files.iter().any(|f| f.ends_with(suffix))
    }

    /// True when any listed path has a file-name component equal to `name`
    pub fn has_file_named(&self, name: &str) -> bool {
        self.files.iter().any(|f| {
            f.rsplit(['/', '\\'])
                .next()
                .map(|file_name| file_name == name)
                .unwrap_or(false)
        })
    }
}

fn non_blank(content: String) -> Option<String> {
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, EvidenceError> {
    if !path.is_file() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| EvidenceError::Read {
            path: path.to_path_buf(),
            source,
        })
}
