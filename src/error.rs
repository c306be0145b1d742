use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Syntax or shape error in a dependency manifest
#[derive(Error, Debug, Diagnostic)]
#[error("Invalid {format} syntax in '{file}'")]
#[diagnostic(
    code(cycle_sentinel::manifest_parse_error),
    help("Manifests need a [dependencies] table mapping each node to a list of node names")
)]
pub struct ManifestParseError {
    pub file: String,
    pub format: &'static str,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: ManifestSyntaxError,
}

#[derive(Error, Debug)]
pub enum ManifestSyntaxError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum CycleSentinelError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(cycle_sentinel::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<ManifestParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(cycle_sentinel::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(cycle_sentinel::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(cycle_sentinel::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(cycle_sentinel::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Node '{node}' does not appear in any analyzed manifest")]
    #[diagnostic(
        code(cycle_sentinel::node_not_found),
        help("Node names are case-sensitive; check the spelling against your manifests")
    )]
    NodeNotFound { node: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_manifest_parse_error_display() {
        let source_code = "invalid = toml = content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = ManifestParseError {
            file: "providers.deps.toml".to_string(),
            format: "TOML",
            source_code: NamedSource::new("providers.deps.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err.into(),
        };

        assert_eq!(
            error.to_string(),
            "Invalid TOML syntax in 'providers.deps.toml'"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = CycleSentinelError::FileReadError {
            path: PathBuf::from("/tmp/missing.deps.toml"),
            source: io_err,
        };

        assert_eq!(
            error.to_string(),
            "Failed to read file '/tmp/missing.deps.toml'"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = CycleSentinelError::ConfigurationError {
            message: "Invalid configuration value".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration value"
        );
    }

    #[test]
    fn test_node_not_found() {
        let error = CycleSentinelError::NodeNotFound {
            node: "PaymentService".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Node 'PaymentService' does not appear in any analyzed manifest"
        );
    }

    #[test]
    fn test_error_codes() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = CycleSentinelError::FileReadError {
            path: PathBuf::from("test.txt"),
            source: io_err,
        };

        use miette::Diagnostic;
        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: CycleSentinelError = io_err.into();

        match err {
            CycleSentinelError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: CycleSentinelError = json_err.into();

        match err {
            CycleSentinelError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
