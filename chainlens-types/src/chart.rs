//! Chart-ready output shared by every chain.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ChainLensError;

/// Uniform `(labels, dates, series, colors)` tuple handed to a renderer.
///
/// Invariants, checked by [`ChainTransformResult::new`]:
/// `labels`, `series` and `colors` have the same length, and every series
/// has exactly one value per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainTransformResult {
    labels: Vec<String>,
    dates: Vec<NaiveDateTime>,
    series: Vec<Vec<u64>>,
    colors: Vec<String>,
}

impl ChainTransformResult {
    /// Validate and assemble a result.
    ///
    /// # Errors
    /// Returns `Data` if the width or length invariants do not hold.
    pub fn new(
        labels: Vec<String>,
        dates: Vec<NaiveDateTime>,
        series: Vec<Vec<u64>>,
        colors: Vec<String>,
    ) -> Result<Self, ChainLensError> {
        if labels.len() != series.len() || colors.len() != series.len() {
            return Err(ChainLensError::Data(format!(
                "chart width mismatch: {} labels, {} series, {} colors",
                labels.len(),
                series.len(),
                colors.len()
            )));
        }
        if let Some((i, s)) = series
            .iter()
            .enumerate()
            .find(|(_, s)| s.len() != dates.len())
        {
            return Err(ChainLensError::Data(format!(
                "series `{}` has {} points for {} dates",
                labels[i],
                s.len(),
                dates.len()
            )));
        }
        Ok(Self {
            labels,
            dates,
            series,
            colors,
        })
    }

    /// Legend labels, one per series.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Bucket dates, parallel to each series.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDateTime] {
        &self.dates
    }

    /// One value sequence per label.
    #[must_use]
    pub fn series(&self) -> &[Vec<u64>] {
        &self.series
    }

    /// Color names, one per series.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Values of every series at bucket `index`.
    #[must_use]
    pub fn column(&self, index: usize) -> Vec<u64> {
        self.series.iter().map(|s| s[index]).collect()
    }

    /// Decompose into `(labels, dates, series, colors)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<NaiveDateTime>, Vec<Vec<u64>>, Vec<String>) {
        (self.labels, self.dates, self.series, self.colors)
    }
}
