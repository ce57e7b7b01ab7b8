use std::{collections::HashMap, io, path::PathBuf, sync::Arc};

use crate::error::LoadError;

/// Read-only access to data documents by relative path, e.g.
/// "data/boundary.geojson", "data/points.geojson".
pub trait DataSource: Send + Sync {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>, LoadError>;
    fn has(&self, rel: &str) -> bool;
}

/// Documents under a directory on disk.
pub struct DiskSource {
    root: PathBuf,
}

impl DiskSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn full(&self, rel: &str) -> PathBuf { self.root.join(rel) }
}

impl DataSource for DiskSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>, LoadError> {
        std::fs::read(self.full(rel))
            .map(Arc::from)
            .map_err(|e| LoadError::fetch(rel, e))
    }

    fn has(&self, rel: &str) -> bool { self.full(rel).is_file() }
}

/// Documents held in memory, keyed by relative path.
#[derive(Default, Clone)]
pub struct MemSource {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemSource {
    pub fn new(files: HashMap<String, Arc<[u8]>>) -> Self { Self { files } }

    pub fn insert(&mut self, rel: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.files.insert(rel.into(), bytes.into());
    }
}

impl DataSource for MemSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>, LoadError> {
        self.files.get(rel).cloned().ok_or_else(|| {
            LoadError::fetch(rel, io::Error::new(io::ErrorKind::NotFound, "no such document"))
        })
    }

    fn has(&self, rel: &str) -> bool { self.files.contains_key(rel) }
}

/// Documents served over HTTP relative to a base URL.
#[cfg(feature = "download")]
pub struct HttpSource {
    base: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "download")]
impl HttpSource {
    pub fn new(base: impl Into<String>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("geolayers/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build HTTP client")?;

        Ok(Self { base: base.into(), client })
    }

    fn url(&self, rel: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), rel.trim_start_matches('/'))
    }
}

#[cfg(feature = "download")]
impl DataSource for HttpSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>, LoadError> {
        let url = self.url(rel);
        tracing::debug!(%url, "GET");

        let resp = self.client.get(&url).send().map_err(|e| LoadError::fetch(rel, e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status { path: rel.to_string(), status: status.as_u16() });
        }

        let bytes = resp.bytes().map_err(|e| LoadError::fetch(rel, e))?;
        Ok(Arc::from(bytes.as_ref()))
    }

    fn has(&self, rel: &str) -> bool {
        self.client.head(self.url(rel)).send()
            .map(|resp| resp.status().is_success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mem_source_get_and_has() {
        let mut mem = MemSource::default();
        mem.insert("data/points.geojson", b"{}".to_vec());

        assert!(mem.has("data/points.geojson"));
        assert!(!mem.has("data/boundary.geojson"));
        assert_eq!(&*mem.get("data/points.geojson").unwrap(), b"{}");
    }

    #[test]
    fn mem_source_missing_is_fetch_error() {
        let mem = MemSource::default();
        let err = mem.get("data/boundary.geojson").unwrap_err();
        assert!(matches!(err, LoadError::Fetch { .. }));
        assert_eq!(err.path(), "data/boundary.geojson");
        assert!(err.to_string().starts_with("Failed to load data/boundary.geojson"));
    }

    #[test]
    fn disk_source_reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/points.geojson"), "[]").unwrap();

        let disk = DiskSource::new(dir.path());
        assert!(disk.has("data/points.geojson"));
        assert_eq!(&*disk.get("data/points.geojson").unwrap(), b"[]");
        assert!(matches!(disk.get("data/nope.geojson"), Err(LoadError::Fetch { .. })));
    }

    #[cfg(feature = "download")]
    #[test]
    fn http_source_joins_base_and_path() {
        let http = HttpSource::new("http://localhost:8000/").unwrap();
        assert_eq!(http.url("data/points.geojson"), "http://localhost:8000/data/points.geojson");
    }

    /// Local server that answers every request with 404. Returns its base URL.
    #[cfg(feature = "download")]
    fn serve_not_found() -> String {
        use std::io::{BufRead, BufReader, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                    if line == "\r\n" { break }
                    line.clear();
                }
                let _ = stream.write_all(
                    b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
                );
            }
        });
        format!("http://{addr}")
    }

    #[cfg(feature = "download")]
    #[test]
    fn http_source_non_success_is_status_error() {
        let http = HttpSource::new(serve_not_found()).unwrap();
        let err = http.get("data/points.geojson").unwrap_err();

        assert!(matches!(err, LoadError::Status { status: 404, .. }));
        assert_eq!(err.path(), "data/points.geojson");
        assert_eq!(err.to_string(), "Failed to load data/points.geojson (404)");
    }

    #[cfg(feature = "download")]
    #[test]
    fn http_not_found_boundary_stops_viewer() {
        use crate::{DataPaths, GeoJsonLayers, ViewController};

        let http = HttpSource::new(serve_not_found()).unwrap();
        let mut view = ViewController::new(GeoJsonLayers::new());
        let err = view.init(&http, &DataPaths::default()).unwrap_err();

        assert!(matches!(err, LoadError::Status { status: 404, .. }));
        assert_eq!(view.status().to_string(), "Error: Failed to load data/boundary.geojson (404)");
        assert_eq!(view.renderer().status(), "Error: Failed to load data/boundary.geojson (404)");
        assert!(view.renderer().boundary().is_null());
        assert!(view.renderer().points().is_null());
        assert!(!view.is_ready());
    }
}
