//! vigil-core — connection-log dashboard core library.
//!
//! This crate exposes the pipeline layers as public modules, plus the
//! shared types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! RawInput ──► Normalizer ──► canonical Events ──► Filter ──► Aggregator ──► Report
//! ```
//!
//! The canonical event sequence is built once per input load and is
//! immutable afterward. Every downstream layer is a pure function over a
//! borrowed slice, so independent filter specifications can be evaluated
//! repeatedly (or in parallel) without coordination. Rendering the report
//! is the caller's concern; nothing in here draws a chart.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod normalizer;
pub mod types;

pub use error::NormalizeError;
pub use filter::FilterSpec;
pub use types::{Event, Layout, RawInput, RawTable};
