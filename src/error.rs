use thiserror::Error;

/// Failure to bring a data document into memory.
///
/// Fetch, status, and parse failures are all handled the same way by the
/// view controller: logged, shown as a single status line, and fatal for
/// the load attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request or read itself failed (network, IO, missing file).
    #[error("Failed to load {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a non-success status.
    #[error("Failed to load {path} ({status})")]
    Status { path: String, status: u16 },

    /// The body is not GeoJSON of the expected shape.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl LoadError {
    pub(crate) fn fetch(path: &str, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Fetch { path: path.to_string(), source: Box::new(source) }
    }

    pub(crate) fn parse(path: &str, message: impl Into<String>) -> Self {
        Self::Parse { path: path.to_string(), message: message.into() }
    }

    /// Pack-relative path of the document that failed.
    pub fn path(&self) -> &str {
        match self {
            Self::Fetch { path, .. } | Self::Status { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_path_and_code() {
        let err = LoadError::Status { path: "data/boundary.geojson".to_string(), status: 503 };
        assert_eq!(err.path(), "data/boundary.geojson");
        assert_eq!(err.to_string(), "Failed to load data/boundary.geojson (503)");
    }

    #[test]
    fn parse_error_message() {
        let err = LoadError::parse("data/points.geojson", "invalid JSON");
        assert_eq!(err.path(), "data/points.geojson");
        assert_eq!(err.to_string(), "Failed to parse data/points.geojson: invalid JSON");
    }
}
