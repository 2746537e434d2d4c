//! Polydice — the dice bounded context.
//!
//! Defines the closed [`DieFace`] enumeration of supported face counts and
//! the [`Die`] value object, which pairs a face count with a current rolled
//! value and re-seeds the randomness service before every roll.

pub mod die;
pub mod face;

pub use die::Die;
pub use face::DieFace;
