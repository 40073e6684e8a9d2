//! Corpus Projection Viewer - Main entry point
//!
//! Loads the visualization document produced by the external vectorization
//! pipeline, transforms it into ordered chart specifications, and writes one
//! `{data, layout, config}` file per chart container for the page renderer.

use anyhow::Context;
use corpus_projection_viewer::config::{self, ViewerConfig};
use corpus_projection_viewer::dataset::DatasetClient;
use corpus_projection_viewer::pipeline::Viewer;
use corpus_projection_viewer::sink::FileSink;
use corpus_projection_viewer::surface::ConsoleSurface;

#[tokio::main]
async fn main() {
    println!(
        "Corpus Projection Viewer v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Flags override the environment before the config is read
    // --dataFile <url-or-path>, --outDir <dir>
    let args: Vec<String> = std::env::args().collect();
    config::parse_args(&args);

    match run().await {
        Ok(()) => println!("\n✓ All charts written"),
        Err(e) => {
            eprintln!("\n✗ Load failed: {:#}", e);
            eprintln!("\nNote: configure the viewer with:");
            eprintln!("  export CORPUS_DATA_URL=https://example.org/corpus-visualization-data.json");
            eprintln!("  export CORPUS_OUT_DIR=charts");
            std::process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = ViewerConfig::from_env().context("reading configuration")?;

    println!("\n[1/3] Configuration");
    println!("  Source: {}", config.source);
    println!("  Output: {}", config.out_dir.display());

    let sink = FileSink::new(&config.out_dir).context("creating output directory")?;
    let mut viewer = Viewer::new(DatasetClient::new(), sink, ConsoleSurface, config.source);

    println!("\n[2/3] Loading dataset and writing charts");
    viewer.load().await.context("loading dataset")?;

    if let Some(snapshot) = viewer.snapshot() {
        println!("\n[3/3] Summary");
        println!(
            "  2D points: {}, 3D points: {}, languages: {}",
            snapshot.pca_2d.points.len(),
            snapshot.pca_3d.points.len(),
            snapshot.language_distribution.entries.len()
        );
    }

    Ok(())
}
