pub mod quantize;
pub mod stats;

pub use quantize::{generate, quantize, raw_sample, sample_at, sample_phase};
pub use stats::StatsHelper;
