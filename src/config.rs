//! Viewer configuration
//!
//! Configuration comes from environment variables, optionally overridden by
//! command-line flags that are written back into the environment before the
//! config is read.

use crate::dataset::{Result, ViewerError};
use std::path::PathBuf;

/// Default input document name, matching the vectorization pipeline output
pub const DEFAULT_SOURCE: &str = "corpus-visualization-data.json";

/// Default directory receiving the per-container chart spec files
pub const DEFAULT_OUT_DIR: &str = "charts";

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Input document URL or file path
    pub source: String,
    /// Directory the render sink writes into
    pub out_dir: PathBuf,
}

impl ViewerConfig {
    /// Read configuration from the environment
    ///
    /// - `CORPUS_DATA_URL`: input document URL or file path
    /// - `CORPUS_OUT_DIR`: chart spec output directory
    pub fn from_env() -> Result<Self> {
        let source =
            std::env::var("CORPUS_DATA_URL").unwrap_or_else(|_| DEFAULT_SOURCE.to_string());
        if source.trim().is_empty() {
            return Err(ViewerError::Config("CORPUS_DATA_URL is empty".into()));
        }

        let out_dir =
            std::env::var("CORPUS_OUT_DIR").unwrap_or_else(|_| DEFAULT_OUT_DIR.to_string());

        Ok(ViewerConfig {
            source,
            out_dir: PathBuf::from(out_dir),
        })
    }
}

/// Apply command-line flag overrides to the environment
///
/// Supported flags: `--dataFile <url-or-path>`, `--outDir <dir>`.
pub fn parse_args(args: &[String]) {
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dataFile" if i + 1 < args.len() => {
                std::env::set_var("CORPUS_DATA_URL", &args[i + 1]);
                i += 2;
            }
            "--outDir" if i + 1 < args.len() => {
                std::env::set_var("CORPUS_OUT_DIR", &args[i + 1]);
                i += 2;
            }
            _ => i += 1,
        }
    }
}
