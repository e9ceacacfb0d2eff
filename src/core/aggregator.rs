use crate::domain::model::{
    AggregateResult, GroupKey, GroupSummary, Record, NEIGHBOURHOOD_GROUP, PRICE, ROOM_TYPE,
};
use crate::utils::error::{EtlError, Result};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default, Clone, Copy)]
struct PriceAccumulator {
    sum: f64,
    count: usize,
}

impl PriceAccumulator {
    fn add(&mut self, price: f64) {
        self.sum += price;
        self.count += 1;
    }

    fn finish(self) -> GroupSummary {
        GroupSummary {
            average_price: self.sum / self.count as f64,
            listing_count: self.count,
        }
    }
}

fn parse_price(row: usize, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| EtlError::InvalidPrice {
        row,
        value: raw.to_string(),
    })
}

/// Average price per (neighbourhood_group, room_type), in a single pass over `records`.
///
/// Keys are compared exactly; no trimming or case folding is applied.
/// Any missing field or unparsable price aborts the whole aggregation.
pub fn aggregate(records: &[Record]) -> Result<AggregateResult> {
    let mut accumulators: HashMap<GroupKey, PriceAccumulator> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let key = GroupKey::new(record.field(NEIGHBOURHOOD_GROUP)?, record.field(ROOM_TYPE)?);
        // 1-based data row number, header excluded
        let price = parse_price(index + 1, record.field(PRICE)?)?;

        accumulators.entry(key).or_default().add(price);
    }

    let groups: BTreeMap<GroupKey, GroupSummary> = accumulators
        .into_iter()
        .map(|(key, acc)| (key, acc.finish()))
        .collect();

    for (key, summary) in &groups {
        tracing::debug!(
            "{} / {}: {} listings, average {:.2}",
            key.neighbourhood_group,
            key.room_type,
            summary.listing_count,
            summary.average_price
        );
    }
    tracing::info!(
        "Aggregated {} listings into {} groups",
        records.len(),
        groups.len()
    );

    Ok(AggregateResult::new(groups))
}
