//! Session log viewer core (cclogview)
//!
//! Virtualization engine for a terminal viewer of AI-session JSONL
//! transcripts. Given a list of variable-height rows and a fixed number of
//! terminal rows, it decides which contiguous slice to show and how much
//! is hidden above and below.
//!
//! # Layers
//!
//! - [`viewport`]: pure list and text viewport calculators
//! - [`state`]: cursors, scroll offsets and collapse flags held between
//!   calculations
//! - [`model`]: row data, filtering and detail text
//! - [`config`] and [`logging`]: ambient setup for an embedding application
//!
//! Painting, terminal input and transcript parsing belong to the embedding
//! application.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod viewport;
