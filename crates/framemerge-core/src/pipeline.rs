use std::ops::AddAssign;
use std::path::PathBuf;

use hdf5::H5Type;
use ndarray::Array3;
use num_traits::Zero;
use tracing::info;

use crate::config::MergeConfig;
use crate::error::Result;
use crate::frame::ElementType;
use crate::io::reader::DatasetSource;
use crate::io::writer::write_merged;
use crate::merge::executor::{default_worker_count, execute, Strategy};
use crate::merge::reduce::SkipSet;

/// Outcome of a merge run.
#[derive(Clone, Debug)]
pub struct MergeSummary {
    pub frames_requested: usize,
    pub frames_used: usize,
    pub merged_frames: usize,
    pub group_size: usize,
    pub input_type: ElementType,
    pub output_type: ElementType,
    pub strategy: Strategy,
    pub workers: usize,
    pub output: PathBuf,
}

/// Run a full merge: validate, read, merge, write.
///
/// The configuration is checked before the source is opened, and the
/// source handle closes on every path out of this function.
pub fn run_merge(config: &MergeConfig) -> Result<MergeSummary> {
    let skip = config.validate()?;

    let source = DatasetSource::open(&config.input, &config.data_location, &config.data_name)?;
    let element_type = source.element_type()?;

    info!(
        input = %config.input.display(),
        total_frames = source.total_frames(),
        element_type = %element_type,
        "Opened source dataset"
    );

    // Keep in sync with ElementType::accumulator.
    match element_type {
        ElementType::U8 => run_typed::<u8, u32>(config, &source, &skip, element_type),
        ElementType::U16 => run_typed::<u16, u32>(config, &source, &skip, element_type),
        ElementType::U32 => run_typed::<u32, u64>(config, &source, &skip, element_type),
        ElementType::U64 => run_typed::<u64, u64>(config, &source, &skip, element_type),
        ElementType::I8 => run_typed::<i8, i32>(config, &source, &skip, element_type),
        ElementType::I16 => run_typed::<i16, i32>(config, &source, &skip, element_type),
        ElementType::I32 => run_typed::<i32, i64>(config, &source, &skip, element_type),
        ElementType::I64 => run_typed::<i64, i64>(config, &source, &skip, element_type),
        ElementType::F32 => run_typed::<f32, f32>(config, &source, &skip, element_type),
        ElementType::F64 => run_typed::<f64, f64>(config, &source, &skip, element_type),
    }
}

fn run_typed<T, A>(
    config: &MergeConfig,
    source: &DatasetSource,
    skip: &SkipSet,
    input_type: ElementType,
) -> Result<MergeSummary>
where
    T: H5Type + Copy + Sync,
    A: H5Type + Copy + Zero + AddAssign + From<T> + Send,
{
    let frames: Array3<T> = source.read_frames(config.n_frames)?;
    let frames_used = frames.dim().0;

    let strategy = if config.sequential {
        Strategy::Sequential
    } else {
        Strategy::Concurrent
    };
    let workers = config.workers.unwrap_or_else(default_worker_count);

    let merged: Array3<A> = execute(
        frames.view(),
        config.group_size,
        skip,
        strategy,
        Some(workers),
    )?;
    let merged_frames = merged.dim().0;

    info!(
        frames_used,
        merged_frames,
        group_size = config.group_size,
        ?strategy,
        workers,
        "Merge complete"
    );

    write_merged(
        &config.output,
        &config.data_location,
        &config.data_name,
        &merged,
    )?;

    Ok(MergeSummary {
        frames_requested: config.n_frames,
        frames_used,
        merged_frames,
        group_size: config.group_size,
        input_type,
        output_type: input_type.accumulator(),
        strategy,
        workers,
        output: config.output.clone(),
    })
}
