use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DATA_LOCATION, DEFAULT_DATA_NAME, DEFAULT_FRAME_COUNT, DEFAULT_GROUP_SIZE,
};
use crate::error::{MergeError, Result};
use crate::merge::reduce::SkipSet;

/// Parameters for one merge run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MergeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of source frames to consider (clamped to what is available).
    #[serde(default = "default_frame_count")]
    pub n_frames: usize,
    /// Number of consecutive frames summed into one merged frame.
    #[serde(default = "default_group_size")]
    pub group_size: usize,
    /// Positions within each group excluded from the sum.
    #[serde(default)]
    pub skip: Vec<usize>,
    /// HDF5 group path containing the frame dataset.
    #[serde(default = "default_data_location")]
    pub data_location: String,
    /// Name of the frame dataset inside the group.
    #[serde(default = "default_data_name")]
    pub data_name: String,
    /// Worker count for the concurrent strategy; defaults to available cores.
    #[serde(default)]
    pub workers: Option<usize>,
    /// Merge groups in order on a single thread.
    #[serde(default)]
    pub sequential: bool,
}

impl MergeConfig {
    /// Check the merge parameters and build the skip set.
    ///
    /// Runs before any file is touched, so bad parameters never leave a
    /// half-written output behind.
    pub fn validate(&self) -> Result<SkipSet> {
        if self.group_size == 0 {
            return Err(MergeError::InvalidGroupSize(0));
        }
        SkipSet::new(&self.skip, self.group_size)
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.h5"),
            output: PathBuf::from("merged.h5"),
            n_frames: DEFAULT_FRAME_COUNT,
            group_size: DEFAULT_GROUP_SIZE,
            skip: Vec::new(),
            data_location: DEFAULT_DATA_LOCATION.to_string(),
            data_name: DEFAULT_DATA_NAME.to_string(),
            workers: None,
            sequential: false,
        }
    }
}

fn default_frame_count() -> usize {
    DEFAULT_FRAME_COUNT
}

fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

fn default_data_location() -> String {
    DEFAULT_DATA_LOCATION.to_string()
}

fn default_data_name() -> String {
    DEFAULT_DATA_NAME.to_string()
}
