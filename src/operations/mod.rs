pub mod creation;
pub mod envelope;
pub mod filter;
pub mod merge;
pub mod next_cell;

mod decimate;

pub use decimate::{Decimate, DecimationResult, DecimationStats};
