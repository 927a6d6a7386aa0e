//! KITTI label statistics
//!
//! Counts `Car` objects in KITTI label files by distance bucket and difficulty
//! tier, split into train and val by a list of val frame identifiers.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::Args;
pub use error::{LabelStatsError, Result};
pub use pipeline::{count_dataset, run};
pub use types::{
    ClassifiedObject, CountKey, CountTable, Difficulty, DistanceBucket, ProcessingStats, Split,
    SplitCounts,
};
