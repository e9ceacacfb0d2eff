use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    /// Runs extract, transform and load in order; the first error stops the run.
    pub fn run(&self) -> Result<String> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        tracing::info!("Starting listing summary");

        tracing::info!("Extracting listings...");
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());
        monitor.log_stats("Extract");

        tracing::info!("Aggregating prices...");
        let result = self.pipeline.transform(records)?;
        tracing::info!("Computed averages for {} groups", result.len());
        monitor.log_stats("Transform");

        tracing::info!("Writing summary...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);
        monitor.log_stats("Load");

        monitor.log_final_stats();
        Ok(output_path)
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AggregateResult, Record};
    use crate::utils::error::EtlError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPipeline {
        calls: RefCell<Vec<&'static str>>,
        fail_extract: bool,
    }

    impl Pipeline for RecordingPipeline {
        fn extract(&self) -> Result<Vec<Record>> {
            self.calls.borrow_mut().push("extract");
            if self.fail_extract {
                return Err(EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "listings.csv",
                )));
            }
            Ok(vec![Record::default()])
        }

        fn transform(&self, records: Vec<Record>) -> Result<AggregateResult> {
            assert_eq!(records.len(), 1);
            self.calls.borrow_mut().push("transform");
            Ok(AggregateResult::default())
        }

        fn load(&self, _result: AggregateResult) -> Result<String> {
            self.calls.borrow_mut().push("load");
            Ok("summary.csv".to_string())
        }
    }

    #[test]
    fn test_run_calls_stages_in_order() {
        let engine = EtlEngine::new(RecordingPipeline::default());

        assert_eq!(engine.run().unwrap(), "summary.csv");
        assert_eq!(
            *engine.pipeline().calls.borrow(),
            vec!["extract", "transform", "load"]
        );
    }

    #[test]
    fn test_run_stops_on_first_error() {
        let engine = EtlEngine::new(RecordingPipeline {
            fail_extract: true,
            ..Default::default()
        });

        assert!(matches!(engine.run(), Err(EtlError::IoError(_))));
        assert_eq!(*engine.pipeline().calls.borrow(), vec!["extract"]);
    }
}
