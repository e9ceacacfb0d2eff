use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const NEIGHBOURHOOD_GROUP: &str = "neighbourhood_group";
pub const ROOM_TYPE: &str = "room_type";
pub const PRICE: &str = "price";

/// One input row, keyed by header name. Values are kept as they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, String>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(String::as_str)
    }

    pub fn field(&self, field: &str) -> Result<&str> {
        self.get(field).ok_or_else(|| EtlError::MissingField {
            field: field.to_string(),
        })
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.data.contains_key(field)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered by neighbourhood group first, then room type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupKey {
    pub neighbourhood_group: String,
    pub room_type: String,
}

impl GroupKey {
    pub fn new(neighbourhood_group: impl Into<String>, room_type: impl Into<String>) -> Self {
        Self {
            neighbourhood_group: neighbourhood_group.into(),
            room_type: room_type.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupSummary {
    pub average_price: f64,
    pub listing_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    groups: BTreeMap<GroupKey, GroupSummary>,
}

impl AggregateResult {
    pub fn new(groups: BTreeMap<GroupKey, GroupSummary>) -> Self {
        Self { groups }
    }

    pub fn average(&self, key: &GroupKey) -> Option<f64> {
        self.groups.get(key).map(|summary| summary.average_price)
    }

    pub fn summary(&self, key: &GroupKey) -> Option<&GroupSummary> {
        self.groups.get(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &GroupSummary)> {
        self.groups.iter()
    }

    pub fn rows(&self) -> Vec<OutputRow> {
        self.iter()
            .map(|(key, summary)| OutputRow {
                neighbourhood_group: key.neighbourhood_group.clone(),
                room_type: key.room_type.clone(),
                average_price: summary.average_price,
            })
            .collect()
    }
}

/// Field order here is the column order of the summary file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    pub neighbourhood_group: String,
    pub room_type: String,
    pub average_price: f64,
}
