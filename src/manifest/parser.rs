use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use miette::{IntoDiagnostic, NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::error::{CycleSentinelError, ManifestParseError, ManifestSyntaxError};
use crate::graph::DependencyMap;

#[derive(Debug, Clone, Deserialize)]
struct ManifestDocument {
    name: Option<String>,
    #[serde(default)]
    dependencies: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
        }
    }
}

/// One dependency map loaded from disk
#[derive(Debug, Clone)]
pub struct DependencyManifest {
    name: String,
    path: PathBuf,
    graph: DependencyMap<String>,
}

impl DependencyManifest {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, graph: DependencyMap<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            graph,
        }
    }

    /// Read and parse a manifest, picking the format from the extension
    pub fn parse_file(path: &Path) -> Result<Self> {
        let format = ManifestFormat::from_path(path)
            .ok_or_else(|| CycleSentinelError::ConfigurationError {
                message: format!(
                    "Unsupported manifest extension for '{}' (expected .toml or .json)",
                    path.display()
                ),
            })
            .into_diagnostic()?;

        let content = std::fs::read_to_string(path)
            .map_err(|e| CycleSentinelError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })
            .into_diagnostic()?;

        Self::parse_str(&content, path, format).into_diagnostic()
    }

    /// Parse manifest text; `path` names the source in diagnostics
    pub fn parse_str(
        content: &str,
        path: &Path,
        format: ManifestFormat,
    ) -> Result<Self, CycleSentinelError> {
        let parsed: std::result::Result<ManifestDocument, (ManifestSyntaxError, Option<SourceSpan>)> =
            match format {
                ManifestFormat::Toml => toml::from_str(content).map_err(|e| {
                    let span = e
                        .span()
                        .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
                    (ManifestSyntaxError::from(e), span)
                }),
                ManifestFormat::Json => serde_json::from_str(content).map_err(|e| {
                    let span = json_error_offset(content, e.line(), e.column())
                        .map(|offset| SourceSpan::new(offset.into(), 0));
                    (ManifestSyntaxError::from(e), span)
                }),
            };

        let document = parsed.map_err(|(source, span)| {
            CycleSentinelError::ManifestParseError(Box::new(ManifestParseError {
                file: path.display().to_string(),
                format: format.label(),
                source_code: NamedSource::new(path.display().to_string(), content.to_string()),
                span,
                source,
            }))
        })?;

        let name = document
            .name
            .unwrap_or_else(|| default_manifest_name(path));

        Ok(Self {
            name,
            path: path.to_path_buf(),
            graph: DependencyMap::from(document.dependencies),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn graph(&self) -> &DependencyMap<String> {
        &self.graph
    }

    pub fn into_graph(self) -> DependencyMap<String> {
        self.graph
    }
}

/// `checkout.deps.toml` → `checkout`
fn default_manifest_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    stem.strip_suffix(".deps")
        .map(str::to_string)
        .unwrap_or(stem)
}

// serde_json reports 1-based line/column; column 0 means "end of line".
fn json_error_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(content.len()))
}
