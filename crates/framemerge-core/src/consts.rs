/// Default number of source frames to read when not specified.
pub const DEFAULT_FRAME_COUNT: usize = 10_000;

/// Default number of consecutive frames summed into one merged frame.
pub const DEFAULT_GROUP_SIZE: usize = 10;

/// Default HDF5 group path containing the frame dataset.
pub const DEFAULT_DATA_LOCATION: &str = "entry/data";

/// Default name of the frame dataset inside the group.
pub const DEFAULT_DATA_NAME: &str = "data";

/// Deflate level applied to the merged output dataset.
pub const OUTPUT_DEFLATE_LEVEL: u8 = 4;
