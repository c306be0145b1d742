//! Loading dependency maps from manifest files
//!
//! A manifest is a TOML or JSON document with an optional `name` and a
//! `dependencies` table mapping each node to the list of nodes it depends
//! on. Keys keep their document order, which fixes the order in which the
//! detector reports cycles.

mod discovery;
mod parser;

pub use discovery::ManifestDiscovery;
pub use parser::{DependencyManifest, ManifestFormat};
