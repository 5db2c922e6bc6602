pub mod executor;
pub mod plan;
pub mod reduce;

pub use executor::{execute, Strategy};
pub use plan::merge_plan;
pub use reduce::{reduce_group, SkipSet};
