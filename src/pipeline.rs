//! Load-and-render pipeline
//!
//! One load: fetch → parse → validate → publish statistics → build, order,
//! and assemble all three charts → hand each specification to the render
//! sink. Transformation completes fully before any hand-off; nothing is
//! streamed or rendered partially.
//!
//! The `Viewer` owns the single in-memory snapshot, which is fully replaced
//! on every successful load. A refresh runs as a spawned cancellable task and
//! supersedes any in-flight load, so a stale response is never applied.

use crate::charts::assemble::{self, ErrorPresentation};
use crate::charts::{legend, traces, ChartKind, ChartSpec};
use crate::dataset::{DatasetClient, Language, Result, Snapshot, ViewerError};
use crate::sink::{
    RenderSink, ALL_CONTAINERS, CONTAINER_LANGUAGE_DISTRIBUTION, CONTAINER_PCA_2D,
    CONTAINER_PCA_3D,
};
use crate::surface::{DisplaySurface, Slot};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Build the three chart specifications for one snapshot
pub fn build_chart_specs(snapshot: &Snapshot) -> Vec<(&'static str, ChartSpec)> {
    let pca_2d = scatter_spec(snapshot, ChartKind::Scatter2d);
    let pca_3d = scatter_spec(snapshot, ChartKind::Scatter3d);
    let distribution = assemble::assemble_distribution(
        &snapshot.language_distribution.title,
        &snapshot.language_distribution.entries,
    );

    vec![
        (CONTAINER_PCA_2D, pca_2d),
        (CONTAINER_PCA_3D, pca_3d),
        (CONTAINER_LANGUAGE_DISTRIBUTION, distribution),
    ]
}

fn scatter_spec(snapshot: &Snapshot, kind: ChartKind) -> ChartSpec {
    let chart = match kind {
        ChartKind::Scatter2d => &snapshot.pca_2d,
        ChartKind::Scatter3d => &snapshot.pca_3d,
    };

    let grouped = traces::build_traces(&chart.points, kind);
    let ordered = legend::order_traces(grouped);
    assemble::assemble_scatter(ordered, kind, &chart.title, &chart.variance_explained)
}

/// Write every display slot from the snapshot's metadata and statistics
pub fn publish_statistics<D: DisplaySurface>(snapshot: &Snapshot, surface: &mut D) {
    let metadata = &snapshot.metadata;
    let stats = &snapshot.statistics;

    surface.set_slot(Slot::ModelName, metadata.model.clone());
    surface.set_slot(Slot::Dimensions, metadata.dimensions.to_string());
    surface.set_slot(Slot::Task, metadata.task.clone());
    surface.set_slot(Slot::GeneratedAt, metadata.generated_readable.clone());

    surface.set_slot(Slot::TotalDocuments, stats.total_documents.to_string());
    surface.set_slot(Slot::TotalVectors, stats.total_vectors.to_string());
    surface.set_slot(Slot::Coverage, format!("{:.1}%", stats.coverage_percent));

    for language in Language::ALL {
        let count = stats.languages.get(language.code()).copied().unwrap_or(0);
        surface.set_slot(Slot::LanguageDocuments(language), count.to_string());
    }

    surface.set_slot(Slot::DocumentVectors, stats.granularity.document.to_string());
    surface.set_slot(Slot::SectionVectors, stats.granularity.section.to_string());
    surface.set_slot(
        Slot::ParagraphVectors,
        stats.granularity.paragraph.to_string(),
    );
}

/// Owns the load pipeline and the current snapshot
pub struct Viewer<S: RenderSink, D: DisplaySurface> {
    client: DatasetClient,
    sink: S,
    surface: D,
    source: String,
    snapshot: Option<Arc<Snapshot>>,
    inflight: Option<JoinHandle<Result<Snapshot>>>,
}

impl<S: RenderSink, D: DisplaySurface> Viewer<S, D> {
    pub fn new(client: DatasetClient, sink: S, surface: D, source: impl Into<String>) -> Self {
        Viewer {
            client,
            sink,
            surface,
            source: source.into(),
            snapshot: None,
            inflight: None,
        }
    }

    /// Run the full load-and-render pipeline once
    pub async fn load(&mut self) -> Result<()> {
        self.begin_refresh();
        self.complete_refresh().await
    }

    /// Manual refresh: re-run the full pipeline against the current source
    pub async fn refresh(&mut self) -> Result<()> {
        self.load().await
    }

    /// Swap the input source and reload
    pub async fn set_source(&mut self, source: impl Into<String>) -> Result<()> {
        self.source = source.into();
        self.load().await
    }

    /// Start a fetch-and-validate task, superseding any in-flight one
    pub fn begin_refresh(&mut self) {
        if let Some(previous) = self.inflight.take() {
            previous.abort();
            eprintln!("⚠ Superseding in-flight load of '{}'", self.source);
        }

        let client = self.client.clone();
        let source = self.source.clone();
        self.inflight = Some(tokio::spawn(
            async move { client.load_snapshot(&source).await },
        ));
    }

    /// Wait for the in-flight load and apply or present its outcome
    pub async fn complete_refresh(&mut self) -> Result<()> {
        let handle = match self.inflight.take() {
            Some(handle) => handle,
            None => return Err(ViewerError::Other("no load in flight".into())),
        };

        match handle.await {
            Ok(Ok(snapshot)) => self.apply(snapshot),
            Ok(Err(err)) => {
                self.present_error(&err)?;
                Err(err)
            }
            Err(join_err) if join_err.is_cancelled() => Err(ViewerError::Superseded),
            Err(join_err) => Err(ViewerError::Other(join_err.to_string())),
        }
    }

    /// The most recently applied snapshot, if the last load succeeded
    pub fn snapshot(&self) -> Option<&Arc<Snapshot>> {
        self.snapshot.as_ref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Replace the snapshot, publish statistics, and hand off all charts
    fn apply(&mut self, snapshot: Snapshot) -> Result<()> {
        let snapshot = Arc::new(snapshot);

        publish_statistics(&snapshot, &mut self.surface);
        for (container, spec) in build_chart_specs(&snapshot) {
            self.sink.render(container, &spec)?;
        }

        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// Reset every chart container to the "data unavailable" state
    fn present_error(&mut self, err: &ViewerError) -> Result<()> {
        self.snapshot = None;

        let presentation = ErrorPresentation {
            source: self.source.clone(),
            message: err.to_string(),
        };
        for container in ALL_CONTAINERS {
            self.sink.render_error(container, &presentation)?;
        }
        Ok(())
    }
}
