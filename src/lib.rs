pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::{
    aggregator::aggregate,
    etl::EtlEngine,
    loader::load_listings,
    pipeline::SummaryPipeline,
    writer::{write_summary, write_summary_json},
};
pub use domain::model::{AggregateResult, GroupKey, GroupSummary, OutputRow, Record};
pub use utils::error::{EtlError, Result};
