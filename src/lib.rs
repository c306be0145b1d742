//! # Cycle Sentinel - Detect Circular Dependencies Before Resolution
//!
//! Cycle Sentinel checks a directed dependency graph for cycles with a
//! single depth-first walk and reports every cycle as an explicit path, such
//! as `OrderService → PaymentService → OrderService`. Dependency-injection
//! containers and similar resolvers can run it before resolving a provider
//! graph instead of waiting for a resolution timeout.
//!
//! ## Main Components
//!
//! - **Graph**: [`DependencyMap`](graph::DependencyMap), the ordered
//!   node → dependencies input, and the renderers
//! - **Detector**: [`CycleDetector`](detector::CycleDetector) and its
//!   results
//! - **Cache**: [`CycleCache`](cache::CycleCache), memoized detection per
//!   graph shape
//! - **Core**: [`ProviderToken`](core::ProviderToken), a node identity
//!   compared by reference
//! - **Manifest**: loading maps from TOML and JSON files
//! - **Reports**: human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Checking a graph before resolving it
//!
//! ```
//! use cycle_sentinel::detector::CycleDetector;
//! use cycle_sentinel::graph::DependencyMap;
//!
//! let graph: DependencyMap<&str> = [
//!     ("UserController", vec!["UserService"]),
//!     ("UserService", vec!["UserRepository", "AuditService"]),
//!     ("AuditService", vec!["UserService"]),
//!     ("UserRepository", vec![]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let result = CycleDetector::new(&graph).detect();
//! for cycle in result.cycles() {
//!     println!("Circular dependency: {cycle}");
//! }
//! assert_eq!(
//!     result.cycles()[0].to_string(),
//!     "UserService → AuditService → UserService"
//! );
//! ```
//!
//! ### Reusing results across resolutions
//!
//! ```
//! use cycle_sentinel::cache::CycleCache;
//! use cycle_sentinel::graph::DependencyMap;
//!
//! let cache = CycleCache::new();
//! let mut graph = DependencyMap::new();
//! graph.add_dependency("a", "b");
//!
//! assert!(!cache.get_or_detect(&graph).has_cycles());
//! assert!(!cache.get_or_detect(&graph).has_cycles());
//! assert_eq!(cache.stats().hits, 1);
//! ```
//!
//! ### Loading a manifest and reporting
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cycle_sentinel::detector::CycleDetector;
//! use cycle_sentinel::manifest::DependencyManifest;
//! use cycle_sentinel::reports::{GraphAnalysis, HumanReportGenerator, ReportGenerator};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let manifest = DependencyManifest::parse_file(Path::new("providers.deps.toml"))?;
//! let result = CycleDetector::new(manifest.graph()).detect();
//!
//! let analysis = GraphAnalysis::new(&manifest, result);
//! let report = HumanReportGenerator::new(Some(5))
//!     .generate_report(&[analysis])
//!     .into_diagnostic()?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cache;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
