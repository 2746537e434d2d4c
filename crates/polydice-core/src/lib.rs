//! Polydice Core — shared abstractions.
//!
//! This crate defines the randomness service and the domain error type
//! that the dice context depends on. It contains no dice logic.

pub mod error;
pub mod rng;
