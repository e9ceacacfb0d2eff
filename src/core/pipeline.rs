use crate::core::{aggregator, loader, writer};
use crate::core::{AggregateResult, ConfigProvider, Pipeline, Record};
use crate::utils::error::Result;

/// Listings CSV in, grouped average prices out.
pub struct SummaryPipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> SummaryPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C: ConfigProvider> Pipeline for SummaryPipeline<C> {
    fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading listings from: {}", self.config.input_path());
        loader::load_listings(self.config.input_path())
    }

    fn transform(&self, records: Vec<Record>) -> Result<AggregateResult> {
        aggregator::aggregate(&records)
    }

    fn load(&self, result: AggregateResult) -> Result<String> {
        let output_path = self.config.output_path();
        writer::write_summary(output_path, &result)?;

        if let Some(json_path) = self.config.json_path() {
            writer::write_summary_json(json_path, &result)?;
        }

        Ok(output_path.to_string())
    }
}
