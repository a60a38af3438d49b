//! Dataset file → `Dataset`, skipping records that cannot be displayed.

use std::collections::BTreeMap;
use std::path::Path;

use bevy::log::warn;
use serde_json::{Map, Value};

use crate::data::model::{within_tree_cap, CountryRecord, Dataset, Period, PeriodChange};
use crate::data::DataError;

const GAIN_SUFFIX: &str = " umd_tree_cover_gain__ha";
const LOSS_SUFFIX: &str = "_cover_loss";

/// Reads and parses the dataset at `path`.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let json = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&json)
}

/// Parses a JSON array of country records.
///
/// Malformed entries are logged and skipped; only an unreadable document or a
/// non-array top level fails the whole load.
pub fn parse_dataset(json: &str) -> Result<Dataset, DataError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = value else {
        return Err(DataError::NotAnArray);
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match record_from_value(entry) {
            Ok(record) => records.push(record),
            Err(err) => warn!("skipping dataset entry {index}: {err}"),
        }
    }
    Ok(Dataset { records })
}

fn record_from_value(value: &Value) -> Result<CountryRecord, DataError> {
    let Value::Object(fields) = value else {
        return Err(DataError::Malformed("entry is not an object".into()));
    };

    let iso = string_field(fields, &["iso"])?;
    if iso.is_empty() {
        return Err(DataError::Malformed("empty iso".into()));
    }
    let country = string_field(fields, &["country", "name"])?;
    let basic_ha = fields
        .get("basic")
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .ok_or_else(|| DataError::Malformed(format!("{iso}: missing numeric basic")))?
        .max(0.0);
    if !within_tree_cap(basic_ha) {
        return Err(DataError::Malformed(format!(
            "{iso}: basic {basic_ha} ha exceeds the tree cap"
        )));
    }

    let changes = period_changes(fields);
    if let Some(period) = changes
        .iter()
        .find(|(_, c)| !within_tree_cap(c.gain_ha) || !within_tree_cap(c.loss_ha))
        .map(|(period, _)| period)
    {
        return Err(DataError::Malformed(format!(
            "{iso}: {period} figures exceed the tree cap"
        )));
    }

    Ok(CountryRecord {
        iso,
        country,
        basic_ha,
        changes,
    })
}

fn string_field(fields: &Map<String, Value>, keys: &[&str]) -> Result<String, DataError> {
    keys.iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str))
        .map(|s| s.trim().to_string())
        .ok_or_else(|| DataError::Malformed(format!("missing string field {:?}", keys[0])))
}

/// Collects gain/loss columns by period. A period with only one side present takes
/// zero for the other; non-numeric values count as absent.
fn period_changes(fields: &Map<String, Value>) -> BTreeMap<Period, PeriodChange> {
    let mut changes: BTreeMap<Period, PeriodChange> = BTreeMap::new();
    for (key, value) in fields {
        let Some(amount) = value.as_f64().filter(|v| v.is_finite()) else {
            continue;
        };
        if let Some(period) = key.strip_suffix(GAIN_SUFFIX).and_then(Period::parse) {
            changes.entry(period).or_default().gain_ha = amount;
        } else if let Some(period) = key.strip_suffix(LOSS_SUFFIX).and_then(Period::parse) {
            changes.entry(period).or_default().loss_ha = amount;
        }
    }
    changes
}
