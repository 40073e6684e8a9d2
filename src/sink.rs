//! Renderer hand-off
//!
//! The external charting library is an opaque sink invoked with
//! `(container_id, traces, layout, config)`. Production writes one
//! `{data, layout, config}` JSON file per container; tests record the calls.

use crate::charts::assemble::{self, ErrorPresentation};
use crate::charts::ChartSpec;
use crate::dataset::Result;
use std::path::{Path, PathBuf};

/// Container receiving the 2D PCA chart
pub const CONTAINER_PCA_2D: &str = "chart-pca-2d";
/// Container receiving the 3D PCA chart
pub const CONTAINER_PCA_3D: &str = "chart-pca-3d";
/// Container receiving the language distribution chart
pub const CONTAINER_LANGUAGE_DISTRIBUTION: &str = "chart-language-distribution";

/// All chart containers, reset together on a failed load
pub const ALL_CONTAINERS: [&str; 3] = [
    CONTAINER_PCA_2D,
    CONTAINER_PCA_3D,
    CONTAINER_LANGUAGE_DISTRIBUTION,
];

/// Where assembled chart specifications are handed off
pub trait RenderSink {
    /// Hand one chart specification to the renderer
    fn render(&mut self, container_id: &str, spec: &ChartSpec) -> Result<()>;

    /// Reset one container to the "data unavailable" state
    fn render_error(&mut self, container_id: &str, presentation: &ErrorPresentation) -> Result<()> {
        self.render(container_id, &assemble::unavailable(presentation))
    }
}

/// Writes one spec file per container into an output directory
#[derive(Debug)]
pub struct FileSink {
    out_dir: PathBuf,
}

impl FileSink {
    pub fn new(out_dir: impl AsRef<Path>) -> Result<Self> {
        let out_dir: PathBuf = out_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&out_dir)?;
        Ok(FileSink { out_dir })
    }
}

impl RenderSink for FileSink {
    fn render(&mut self, container_id: &str, spec: &ChartSpec) -> Result<()> {
        let path = self.out_dir.join(format!("{}.json", container_id));
        let json = serde_json::to_string_pretty(spec)?;
        std::fs::write(&path, json)?;
        println!("✓ Wrote {} ({} traces)", path.display(), spec.data.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::assemble::assemble_distribution;
    use crate::dataset::model::LanguageCount;

    #[test]
    fn test_file_sink_writes_one_file_per_container() {
        let dir = std::env::temp_dir().join("projection_viewer_sink_test");
        let mut sink = FileSink::new(&dir).unwrap();

        let entries = vec![LanguageCount {
            language: "eng".to_string(),
            count: 3,
            color: "#1f77b4".to_string(),
        }];
        let spec = assemble_distribution("Vectors per language", &entries);

        sink.render(CONTAINER_LANGUAGE_DISTRIBUTION, &spec).unwrap();

        let path = dir.join(format!("{}.json", CONTAINER_LANGUAGE_DISTRIBUTION));
        let written = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["data"][0]["type"], "bar");
    }

    #[test]
    fn test_render_error_writes_unavailable_spec() {
        let dir = std::env::temp_dir().join("projection_viewer_sink_err_test");
        let mut sink = FileSink::new(&dir).unwrap();

        sink.render_error(
            CONTAINER_PCA_2D,
            &ErrorPresentation {
                source: "corpus-data.json".to_string(),
                message: "HTTP 404 fetching 'corpus-data.json'".to_string(),
            },
        )
        .unwrap();

        let path = dir.join(format!("{}.json", CONTAINER_PCA_2D));
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("404"));
        assert!(written.contains("Data unavailable"));
    }
}
