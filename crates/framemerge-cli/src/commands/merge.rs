use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use framemerge_core::config::MergeConfig;
use framemerge_core::pipeline::run_merge;
use indicatif::{ProgressBar, ProgressStyle};

use crate::summary::print_merge_summary;

#[derive(Args)]
pub struct MergeArgs {
    /// Input HDF5 file
    pub file: PathBuf,

    /// Merge config file (TOML); overrides the flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of source frames to read
    #[arg(long, default_value = "10000")]
    pub frames: usize,

    /// Number of consecutive frames summed into each merged frame
    #[arg(long, default_value = "10")]
    pub group_size: usize,

    /// Comma-separated positions within each group to leave out
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<usize>,

    /// HDF5 group path containing the frame dataset
    #[arg(long, default_value = "entry/data")]
    pub data_location: String,

    /// Dataset name inside the group
    #[arg(long, default_value = "data")]
    pub data_name: String,

    /// Number of parallel workers (defaults to available cores)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Merge groups in order on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Output HDF5 file path
    #[arg(short, long, default_value = "merged.h5")]
    pub output: PathBuf,
}

pub fn run(args: &MergeArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid merge config")?
    } else {
        build_config_from_args(args)
    };

    print_merge_summary(&config);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message("Merging frames...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = run_merge(&config);
    pb.finish_and_clear();
    let summary = result?;

    println!(
        "Merged {} frames into {} ({} per group)",
        summary.frames_used, summary.merged_frames, summary.group_size
    );
    println!(
        "Element type: {} -> {}",
        summary.input_type, summary.output_type
    );
    println!("Output saved to {}", summary.output.display());

    Ok(())
}

fn build_config_from_args(args: &MergeArgs) -> MergeConfig {
    MergeConfig {
        input: args.file.clone(),
        output: args.output.clone(),
        n_frames: args.frames,
        group_size: args.group_size,
        skip: args.skip.clone(),
        data_location: args.data_location.clone(),
        data_name: args.data_name.clone(),
        workers: args.workers,
        sequential: args.sequential,
    }
}
