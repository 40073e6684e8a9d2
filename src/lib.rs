//! Corpus Projection Viewer
//!
//! Turns precomputed multilingual embedding-projection data into interactive
//! chart specifications with language-aware hover annotations.
//!
//! Module organization:
//! - `dataset`: input fetching, raw model, validated snapshot
//! - `charts`: the transformation core (formatting, grouping, ordering, assembly)
//! - `pipeline`: the load-and-render pipeline and refresh handling
//! - `sink`: the renderer hand-off boundary
//! - `surface`: the named display slots on the surrounding page
//! - `config`: environment and flag configuration

pub mod charts;
pub mod config;
pub mod dataset;
pub mod pipeline;
pub mod sink;
pub mod surface;
