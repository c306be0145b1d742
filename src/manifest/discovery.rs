use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use miette::{IntoDiagnostic, Report, Result, WrapErr};
use rayon::iter::Either;
use rayon::prelude::*;
use walkdir::WalkDir;

use super::DependencyManifest;
use crate::constants::manifest::SKIPPED_DIRS;
use crate::error::CycleSentinelError;
use crate::progress::ProgressReporter;

/// Finds manifest files under a set of paths
pub struct ManifestDiscovery {
    patterns: Vec<Pattern>,
}

impl ManifestDiscovery {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|raw| {
                Pattern::new(raw).map_err(|e| CycleSentinelError::ConfigurationError {
                    message: format!("Invalid manifest pattern '{raw}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .into_diagnostic()?;

        Ok(Self { patterns })
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return false;
        };
        self.patterns.iter().any(|pattern| pattern.matches(name))
    }

    /// Collect manifest paths, sorted and deduplicated
    ///
    /// Files named explicitly are taken as-is, whatever their name. Missing
    /// paths produce a warning and are skipped.
    pub fn discover(
        &self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Vec<PathBuf> {
        let mut found = BTreeSet::new();

        for path in paths {
            if !path.exists() {
                eprintln!(
                    "{} Path '{}' does not exist",
                    console::style("⚠").yellow(),
                    path.display()
                );
                continue;
            }

            if path.is_file() {
                found.insert(path.clone());
                continue;
            }

            for entry in WalkDir::new(path)
                .into_iter()
                .filter_entry(|e| {
                    e.depth() == 0
                        || !e
                            .file_name()
                            .to_str()
                            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
                })
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                if self.matches(entry.path()) {
                    if let Some(p) = progress {
                        p.checking_manifest(entry.path());
                    }
                    found.insert(entry.into_path());
                }
            }
        }

        found.into_iter().collect()
    }

    /// Parse every manifest in parallel; fails on the first broken file
    pub fn load_all(
        &self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<DependencyManifest>> {
        let (manifests, mut errors): (Vec<DependencyManifest>, Vec<Report>) = paths
            .par_iter()
            .partition_map(|path| {
                match DependencyManifest::parse_file(path)
                    .wrap_err_with(|| format!("Failed to load manifest '{}'", path.display()))
                {
                    Ok(manifest) => {
                        if let Some(p) = progress {
                            p.loaded_manifest(manifest.name());
                        }
                        Either::Left(manifest)
                    }
                    Err(e) => Either::Right(e),
                }
            });

        // par_iter preserves order, so the first error is the first path's
        if !errors.is_empty() {
            return Err(errors.remove(0));
        }

        Ok(manifests)
    }
}
