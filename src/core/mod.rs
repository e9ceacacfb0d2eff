pub mod aggregator;
pub mod etl;
pub mod loader;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{AggregateResult, GroupKey, GroupSummary, OutputRow, Record};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
