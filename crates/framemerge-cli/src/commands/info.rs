use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use framemerge_core::io::reader::DatasetSource;

#[derive(Args)]
pub struct InfoArgs {
    /// Input HDF5 file
    pub file: PathBuf,

    /// HDF5 group path containing the frame dataset
    #[arg(long, default_value = "entry/data")]
    pub data_location: String,

    /// Dataset name inside the group
    #[arg(long, default_value = "data")]
    pub data_name: String,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let source = DatasetSource::open(&args.file, &args.data_location, &args.data_name)?;
    let info = source.source_info()?;

    println!("File:          {}", info.filename.display());
    println!("Dataset:       {}", info.dataset_path);
    println!("Frames:        {}", info.total_frames);
    println!("Dimensions:    {}x{}", info.width, info.height);
    println!("Element type:  {}", info.element_type);

    let frame_bytes = info.height * info.width * info.element_type.byte_size();
    let total_mb = (frame_bytes * info.total_frames) as f64 / (1024.0 * 1024.0);
    println!("Data size:     {:.1} MB", total_mb);

    Ok(())
}
