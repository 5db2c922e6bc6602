use std::path::{Path, PathBuf};

use hdf5::types::{FloatSize, IntSize, TypeDescriptor};
use hdf5::{Dataset, File, H5Type};
use ndarray::{s, Array3};
use tracing::warn;

use crate::error::{MergeError, Result};
use crate::frame::{ElementType, SourceInfo};

/// Read handle for a source frame dataset.
///
/// The underlying file closes when this struct drops, on every exit path.
pub struct DatasetSource {
    file: File,
    dataset: Dataset,
    dataset_path: String,
}

impl DatasetSource {
    /// Open a file and locate the frame dataset at `<data_location>/<data_name>`.
    ///
    /// A file that cannot be opened and a file that lacks the dataset are
    /// distinct failures, so callers can tell a bad path from a wrong
    /// layout.
    pub fn open(path: &Path, data_location: &str, data_name: &str) -> Result<Self> {
        let file = File::open(path).map_err(|e| MergeError::OpenFailure {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let dataset_path = dataset_path(data_location, data_name);
        let dataset = file
            .dataset(&dataset_path)
            .map_err(|_| MergeError::DatasetNotFound {
                path: dataset_path.clone(),
                file: path.to_path_buf(),
            })?;

        let ndim = dataset.ndim();
        if ndim != 3 {
            return Err(MergeError::NotAFrameStack {
                path: dataset_path,
                ndim,
            });
        }

        Ok(Self {
            file,
            dataset,
            dataset_path,
        })
    }

    pub fn total_frames(&self) -> usize {
        self.dataset.shape()[0]
    }

    /// (height, width) of a single frame.
    pub fn frame_shape(&self) -> (usize, usize) {
        let shape = self.dataset.shape();
        (shape[1], shape[2])
    }

    pub fn element_type(&self) -> Result<ElementType> {
        let descriptor = self.dataset.dtype()?.to_descriptor()?;
        element_type_from(&descriptor)
            .ok_or_else(|| MergeError::UnsupportedElementType(format!("{:?}", descriptor)))
    }

    pub fn source_info(&self) -> Result<SourceInfo> {
        let (height, width) = self.frame_shape();
        Ok(SourceInfo {
            filename: PathBuf::from(self.file.filename()),
            dataset_path: self.dataset_path.clone(),
            total_frames: self.total_frames(),
            height,
            width,
            element_type: self.element_type()?,
        })
    }

    /// Load the first `n_frames` frames into memory.
    ///
    /// Requesting more frames than the dataset holds is not an error; the
    /// count clamps down to what is available.
    pub fn read_frames<T: H5Type>(&self, n_frames: usize) -> Result<Array3<T>> {
        let total = self.total_frames();
        let n = if n_frames > total {
            warn!(
                requested = n_frames,
                available = total,
                "Fewer frames available than requested; clamping"
            );
            total
        } else {
            n_frames
        };
        Ok(self.dataset.read_slice(s![..n, .., ..])?)
    }
}

/// Join the group path and dataset name into one HDF5 path.
pub fn dataset_path(data_location: &str, data_name: &str) -> String {
    let location = data_location.trim_matches('/');
    if location.is_empty() {
        data_name.to_string()
    } else {
        format!("{}/{}", location, data_name)
    }
}

fn element_type_from(descriptor: &TypeDescriptor) -> Option<ElementType> {
    match descriptor {
        TypeDescriptor::Unsigned(IntSize::U1) => Some(ElementType::U8),
        TypeDescriptor::Unsigned(IntSize::U2) => Some(ElementType::U16),
        TypeDescriptor::Unsigned(IntSize::U4) => Some(ElementType::U32),
        TypeDescriptor::Unsigned(IntSize::U8) => Some(ElementType::U64),
        TypeDescriptor::Integer(IntSize::U1) => Some(ElementType::I8),
        TypeDescriptor::Integer(IntSize::U2) => Some(ElementType::I16),
        TypeDescriptor::Integer(IntSize::U4) => Some(ElementType::I32),
        TypeDescriptor::Integer(IntSize::U8) => Some(ElementType::I64),
        TypeDescriptor::Float(FloatSize::U4) => Some(ElementType::F32),
        TypeDescriptor::Float(FloatSize::U8) => Some(ElementType::F64),
        _ => None,
    }
}
