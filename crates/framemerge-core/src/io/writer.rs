use std::path::Path;

use hdf5::{File, Group, H5Type};
use ndarray::Array3;

use crate::consts::OUTPUT_DEFLATE_LEVEL;
use crate::error::{MergeError, Result};

/// Write the merged stack to a new HDF5 file.
///
/// The dataset lands at `<data_location>/<data_name>`, chunked one frame
/// per chunk and deflate-compressed.
pub fn write_merged<A: H5Type>(
    path: &Path,
    data_location: &str,
    data_name: &str,
    merged: &Array3<A>,
) -> Result<()> {
    let file = File::create(path).map_err(|e| MergeError::CreateFailure {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let group = ensure_group(&file, data_location)?;
    let (n_frames, height, width) = merged.dim();

    if n_frames == 0 {
        // HDF5 rejects chunk extents larger than a fixed dataset's
        // dimensions, so an empty result is written unchunked.
        group
            .new_dataset_builder()
            .with_data(merged)
            .create(data_name)?;
    } else {
        group
            .new_dataset_builder()
            .chunk((1, height, width))
            .deflate(OUTPUT_DEFLATE_LEVEL)
            .with_data(merged)
            .create(data_name)?;
    }

    Ok(())
}

fn ensure_group(file: &File, data_location: &str) -> Result<Group> {
    let mut group = file.group("/")?;
    for part in data_location.split('/').filter(|p| !p.is_empty()) {
        group = match group.group(part) {
            Ok(existing) => existing,
            Err(_) => group.create_group(part)?,
        };
    }
    Ok(group)
}
