use std::path::Path;

use hdf5::File;
use ndarray::Array3;

/// Frame stack where frame `i` is filled with the constant value `i`.
pub fn constant_frames(n: usize, height: usize, width: usize) -> Array3<i32> {
    let mut data = Array3::zeros((n, height, width));
    for (i, mut frame) in data.outer_iter_mut().enumerate() {
        frame.fill(i as i32);
    }
    data
}

/// Write a frame stack to `entry/data/data` in a fresh HDF5 file.
#[allow(dead_code)]
pub fn write_test_h5(path: &Path, frames: &Array3<i32>) {
    let file = File::create(path).expect("create test file");
    let entry = file.create_group("entry").expect("create entry group");
    let data = entry.create_group("data").expect("create data group");
    data.new_dataset_builder()
        .with_data(frames)
        .create("data")
        .expect("write dataset");
}
