//! Shared test mocks and utilities for the polydice workspace.

mod rng;

pub use rng::{MockRng, SequenceRng};
