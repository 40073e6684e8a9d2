//! Input dataset handling
//!
//! Structure:
//! - `client.rs`: asynchronous fetch of the input document (HTTP or file)
//! - `model.rs`: raw serde model of the JSON document
//! - `snapshot.rs`: validated immutable snapshot and the closed vocabularies
//! - `error.rs`: error types

pub mod client;
pub mod error;
pub mod model;
pub mod snapshot;

pub use client::DatasetClient;
pub use error::{Result, ViewerError};
pub use snapshot::{
    Dimensionality, Granularity, Language, PointRecord, Popup, ProjectedChart, Snapshot,
};
