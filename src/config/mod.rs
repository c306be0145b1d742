//! # Configuration Module
//!
//! Configuration structures for every cycle-sentinel command. Each command
//! has its own config module; builders are generated with the
//! [`impl_builder!`](crate::impl_builder) macro and expose one `with_*`
//! setter per field.
//!
//! ## Example
//!
//! ```
//! use cycle_sentinel::cli::{GraphFormat, OutputFormat};
//! use cycle_sentinel::common::ConfigBuilder;
//! use cycle_sentinel::config::{GraphOptions, InspectConfig};
//!
//! let inspect = InspectConfig::builder()
//!     .with_paths(vec![".".into()])
//!     .with_patterns(vec!["*.deps.toml".to_string()])
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .with_max_cycles(None)
//!     .build()
//!     .unwrap();
//! assert!(inspect.error_on_cycles);
//!
//! // Missing fields are reported, not defaulted
//! let incomplete = GraphOptions::builder()
//!     .with_format(GraphFormat::Dot)
//!     .with_highlight_cycles(true)
//!     .build();
//! assert!(incomplete.is_err());
//! ```

pub mod inspect;
pub mod spectacle;
pub mod spotlight;

pub use inspect::InspectConfig;
pub use spectacle::GraphOptions;
pub use spotlight::SpotlightConfig;
