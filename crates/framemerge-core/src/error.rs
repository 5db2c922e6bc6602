use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Invalid group size: {0} (must be positive)")]
    InvalidGroupSize(usize),

    #[error("Skip index {index} out of range for group size {group_size}")]
    SkipIndexOutOfRange { index: usize, group_size: usize },

    #[error("Skip set with {len} entries covers a whole group of {group_size}")]
    SkipSetTooLarge { len: usize, group_size: usize },

    #[error("Could not open {}: {}", path.display(), message)]
    OpenFailure { path: PathBuf, message: String },

    #[error("Could not create {}: {}", path.display(), message)]
    CreateFailure { path: PathBuf, message: String },

    #[error("Dataset {} not found in {}", path, file.display())]
    DatasetNotFound { path: String, file: PathBuf },

    #[error("Dataset {path} has {ndim} dimensions, expected a (frames, height, width) stack")]
    NotAFrameStack { path: String, ndim: usize },

    #[error("Unsupported element type: {0}")]
    UnsupportedElementType(String),

    #[error("Group [{start}, {start} + {group_size}) out of range (total: {total})")]
    GroupOutOfRange {
        start: usize,
        group_size: usize,
        total: usize,
    },

    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),
}

pub type Result<T> = std::result::Result<T, MergeError>;
