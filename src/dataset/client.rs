//! Dataset fetching
//!
//! One asynchronous fetch per load: HTTP for `http(s)://` sources, plain
//! filesystem reads for everything else (dev mode). The fetched text is
//! parsed and validated into a `Snapshot` before anything else runs.

use super::error::{Result, ViewerError};
use super::model::ProjectionDocument;
use super::snapshot::Snapshot;

/// Fetches the input document produced by the vectorization pipeline
#[derive(Debug, Clone, Default)]
pub struct DatasetClient {
    http: reqwest::Client,
}

impl DatasetClient {
    pub fn new() -> Self {
        DatasetClient {
            http: reqwest::Client::new(),
        }
    }

    /// Fetch and parse the raw input document from a URL or file path
    pub async fn fetch_document(&self, source: &str) -> Result<ProjectionDocument> {
        let body = if source.starts_with("http://") || source.starts_with("https://") {
            let response = self.http.get(source).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ViewerError::Status {
                    code: status.as_u16(),
                    url: source.to_string(),
                });
            }
            response.text().await?
        } else {
            tokio::fs::read_to_string(source).await?
        };

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch, parse, and validate one snapshot
    pub async fn load_snapshot(&self, source: &str) -> Result<Snapshot> {
        let document = self.fetch_document(source).await?;
        Snapshot::from_document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_io_error() {
        let client = DatasetClient::new();
        let err = client
            .fetch_document("/nonexistent/corpus-data.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ViewerError::Io(_)));
    }

    #[tokio::test]
    async fn test_fetch_malformed_json_is_json_error() {
        let path = temp_file("projection_viewer_malformed.json", "{not json");
        let client = DatasetClient::new();
        let err = client
            .fetch_document(path.to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ViewerError::Json(_)));
    }
}
