//! Test utilities and helpers for the verse-* crates.
//!
//! This crate provides:
//! - Synthetic term→postings data and its payload encoding
//! - Location of the sample index files shipped under `test/samples`
//! - Temporary data directories populated with those samples
//!
//! # Usage
//!
//! This crate is only meant for the workspace's own tests and tools.

pub mod data_gen;
pub mod dirs;
