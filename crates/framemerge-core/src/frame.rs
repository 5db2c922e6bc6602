use std::fmt;
use std::path::PathBuf;

/// Element type of a frame dataset, discovered at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl ElementType {
    /// Size of one element in bytes.
    pub fn byte_size(&self) -> usize {
        match self {
            ElementType::U8 | ElementType::I8 => 1,
            ElementType::U16 | ElementType::I16 => 2,
            ElementType::U32 | ElementType::I32 | ElementType::F32 => 4,
            ElementType::U64 | ElementType::I64 | ElementType::F64 => 8,
        }
    }

    /// Accumulation type used when merging frames of this type.
    ///
    /// Integers widen so that a whole group can be summed without overflow;
    /// floats keep their width. Must agree with the dispatch in
    /// `pipeline::run_merge`.
    pub fn accumulator(&self) -> ElementType {
        match self {
            ElementType::U8 | ElementType::U16 => ElementType::U32,
            ElementType::U32 | ElementType::U64 => ElementType::U64,
            ElementType::I8 | ElementType::I16 => ElementType::I32,
            ElementType::I32 | ElementType::I64 => ElementType::I64,
            ElementType::F32 => ElementType::F32,
            ElementType::F64 => ElementType::F64,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::U8 => "uint8",
            ElementType::U16 => "uint16",
            ElementType::U32 => "uint32",
            ElementType::U64 => "uint64",
            ElementType::I8 => "int8",
            ElementType::I16 => "int16",
            ElementType::I32 => "int32",
            ElementType::I64 => "int64",
            ElementType::F32 => "float32",
            ElementType::F64 => "float64",
        };
        write!(f, "{}", name)
    }
}

/// Metadata about the source dataset.
#[derive(Clone, Debug)]
pub struct SourceInfo {
    pub filename: PathBuf,
    pub dataset_path: String,
    pub total_frames: usize,
    pub height: usize,
    pub width: usize,
    pub element_type: ElementType,
}
