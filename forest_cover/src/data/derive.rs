//! Preparation of the viewer dataset from raw per-country rows.
//!
//! Raw rows carry yearly loss columns (`tc_loss_ha_<year>`) and cumulative gain
//! columns (`<start>-<horizon> umd_tree_cover_gain__ha`, each counting gain from
//! `start` up to the horizon year). The viewer wants one gain and one loss figure
//! per period, so:
//!
//! - period loss is the sum of the yearly losses available in `start..=end`;
//! - period gain is the cumulative gain from `start` minus the cumulative gain
//!   from `end`; the last period takes its cumulative figure unchanged.

use std::collections::BTreeMap;

use bevy::log::warn;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::data::model::Period;
use crate::data::DataError;

const YEARLY_LOSS_PREFIX: &str = "tc_loss_ha_";

/// Which periods to emit: `first..horizon` in steps of `step`.
#[derive(Clone, Copy, Debug)]
pub struct PeriodPlan {
    pub first: u16,
    pub horizon: u16,
    pub step: u16,
}

impl Default for PeriodPlan {
    fn default() -> Self {
        Self {
            first: 2000,
            horizon: 2020,
            step: 5,
        }
    }
}

impl PeriodPlan {
    pub fn periods(&self) -> Vec<Period> {
        if self.step == 0 {
            return Vec::new();
        }
        (self.first..self.horizon)
            .step_by(self.step as usize)
            .map(|start| Period::new(start, start.saturating_add(self.step).min(self.horizon)))
            .collect()
    }

    fn cumulative_key(&self, start: u16) -> String {
        format!("{start}-{} umd_tree_cover_gain__ha", self.horizon)
    }
}

/// A record in the format `parse_dataset` reads.
#[derive(Clone, Debug, Serialize)]
pub struct PreparedRecord {
    pub iso: String,
    pub country: String,
    pub basic: f64,
    #[serde(flatten)]
    pub periods: BTreeMap<String, f64>,
}

/// Sum of the yearly losses recorded within the period, inclusive on both ends.
pub fn period_loss(yearly: &BTreeMap<u16, f64>, period: Period) -> f64 {
    yearly.range(period.start..=period.end).map(|(_, ha)| ha).sum()
}

/// Gain within the period from cumulative-to-horizon figures.
pub fn period_gain(cumulative: &BTreeMap<u16, f64>, period: Period, horizon: u16) -> Option<f64> {
    let from_start = *cumulative.get(&period.start)?;
    if period.end >= horizon {
        return Some(from_start);
    }
    let from_end = *cumulative.get(&period.end)?;
    Some(from_start - from_end)
}

/// Converts raw rows into prepared records. Rows without `iso` are skipped.
pub fn prepare_rows(rows: &Value, plan: PeriodPlan) -> Result<Vec<PreparedRecord>, DataError> {
    let Value::Array(rows) = rows else {
        return Err(DataError::NotAnArray);
    };

    let periods = plan.periods();
    let mut prepared = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let Value::Object(fields) = row else {
            warn!("skipping raw row {index}: not an object");
            continue;
        };
        let Some(iso) = fields.get("iso").and_then(Value::as_str) else {
            warn!("skipping raw row {index}: no iso");
            continue;
        };
        let country = fields
            .get("country")
            .or_else(|| fields.get("name"))
            .and_then(Value::as_str)
            .unwrap_or(iso);

        let yearly = yearly_losses(fields);
        let cumulative = cumulative_gains(fields, &plan);

        let mut columns = BTreeMap::new();
        for period in &periods {
            columns.insert(period.loss_key(), period_loss(&yearly, *period));
            match period_gain(&cumulative, *period, plan.horizon) {
                Some(gain) => {
                    columns.insert(period.gain_key(), gain);
                }
                None => warn!("{iso}: no cumulative gain for {period}"),
            }
        }

        prepared.push(PreparedRecord {
            iso: iso.to_string(),
            country: country.to_string(),
            basic: fields.get("basic").and_then(Value::as_f64).unwrap_or(0.0),
            periods: columns,
        });
    }
    Ok(prepared)
}

fn yearly_losses(fields: &Map<String, Value>) -> BTreeMap<u16, f64> {
    fields
        .iter()
        .filter_map(|(key, value)| {
            let year = key.strip_prefix(YEARLY_LOSS_PREFIX)?.parse().ok()?;
            Some((year, value.as_f64()?))
        })
        .collect()
}

fn cumulative_gains(fields: &Map<String, Value>, plan: &PeriodPlan) -> BTreeMap<u16, f64> {
    (plan.first..plan.horizon)
        .step_by(plan.step.max(1) as usize)
        .filter_map(|start| {
            let value = fields.get(&plan.cumulative_key(start))?.as_f64()?;
            Some((start, value))
        })
        .collect()
}
