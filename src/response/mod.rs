//! Response normalization.
//!
//! Classifies raw transport results into a success/failure [`Outcome`] and
//! recursively strips null values from decoded JSON on the success path.

pub mod normalize;
pub mod sanitize;

pub use normalize::{Outcome, normalize};
pub use sanitize::strip_nulls;
