//! Series values, optional labels, and content identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::transform::series_max;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable identifier for a chart's gradient definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradientId(String);

impl GradientId {
    /// Wrap a caller-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an identifier from series content.
    pub fn from_values(values: &[f64]) -> Self {
        let mut hash = FNV_OFFSET;
        for value in values {
            for byte in value.to_bits().to_le_bytes() {
                hash ^= u64::from(byte);
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
        Self(format!("trend-gradient-{hash:016x}"))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GradientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered values plotted left to right, with optional display labels.
///
/// Deserialized series go through the same label-count check as
/// [`Series::with_labels`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct Series {
    values: Vec<f64>,
    labels: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct RawSeries {
    values: Vec<f64>,
    #[serde(default)]
    labels: Option<Vec<String>>,
}

impl TryFrom<RawSeries> for Series {
    type Error = ChartError;

    fn try_from(raw: RawSeries) -> ChartResult<Self> {
        let series = Series::new(raw.values);
        match raw.labels {
            Some(labels) => series.with_labels(labels),
            None => Ok(series),
        }
    }
}

impl Series {
    /// Create a series without labels.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            labels: None,
        }
    }

    /// Build a series from any iterator of numbers.
    pub fn from_iter_values<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Self::new(iter.into_iter().map(Into::into).collect::<Vec<f64>>())
    }

    /// Attach labels, one per value.
    pub fn with_labels<I, S>(mut self, labels: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.values.len() {
            return Err(ChartError::LabelCountMismatch {
                values: self.values.len(),
                labels: labels.len(),
            });
        }
        self.labels = Some(labels);
        Ok(self)
    }

    /// Access the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Access the labels, if any.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Label for a single index.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.as_ref()?.get(index).map(String::as_str)
    }

    /// Value at an index.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the series has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum value used for scaling, never below 1.
    pub fn max(&self) -> f64 {
        series_max(&self.values)
    }

    /// Content-derived gradient identifier.
    pub fn gradient_id(&self) -> GradientId {
        GradientId::from_values(&self.values)
    }
}
