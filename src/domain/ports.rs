use crate::domain::model::{AggregateResult, Record};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Where to also write the summary as JSON, if anywhere.
    fn json_path(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Record>>;
    fn transform(&self, records: Vec<Record>) -> Result<AggregateResult>;
    fn load(&self, result: AggregateResult) -> Result<String>;
}
