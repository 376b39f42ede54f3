//! Temperature dataset types and parsing of the upstream JSON document.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MONTHS_PER_YEAR: u32 = 12;

/// One recorded temperature deviation from the dataset base temperature.
/// Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceRecord {
    pub year: i32,
    /// Zero-based month index: 0 = January, 11 = December.
    pub month: u32,
    /// Deviation in degrees Celsius from the base temperature.
    pub variance: f64,
}

impl VarianceRecord {
    pub fn absolute_temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// English month name for a zero-based month index.
pub fn month_name(month: u32) -> &'static str {
    chrono::Month::try_from((month + 1) as u8)
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// A full retrieval result: base temperature plus the ordered record
/// sequence. Replaces any prior dataset wholesale; a new dataset triggers
/// full scale recomputation and a re-render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub base_temperature: f64,
    pub records: Vec<VarianceRecord>,
}

/// Summary values surfaced to the page shell. All-zero until the first
/// successful retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DatasetSummary {
    pub min_year: i32,
    pub max_year: i32,
    pub base_temperature: f64,
}

/// Upstream document shape: months are 1-based in the source.
#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(rename = "baseTemperature")]
    base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    monthly_variance: Vec<RawVariance>,
}

#[derive(Debug, Deserialize)]
struct RawVariance {
    year: i32,
    month: u32,
    variance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    Json(String),
    MonthOutOfRange { year: i32, month: u32 },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Json(msg) => write!(f, "failed to parse dataset JSON: {}", msg),
            DatasetError::MonthOutOfRange { year, month } => {
                write!(f, "month {} out of range for year {}", month, year)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

impl Dataset {
    /// Parse the upstream JSON document, converting months to 0-based.
    /// Record order in the document is preserved.
    pub fn from_json(body: &str) -> Result<Dataset, DatasetError> {
        let raw: RawDataset =
            serde_json::from_str(body).map_err(|e| DatasetError::Json(e.to_string()))?;
        let records = raw
            .monthly_variance
            .into_iter()
            .map(|r| {
                if r.month < 1 || r.month > MONTHS_PER_YEAR {
                    return Err(DatasetError::MonthOutOfRange {
                        year: r.year,
                        month: r.month,
                    });
                }
                Ok(VarianceRecord {
                    year: r.year,
                    month: r.month - 1,
                    variance: r.variance,
                })
            })
            .collect::<Result<Vec<VarianceRecord>, DatasetError>>()?;
        Ok(Dataset {
            base_temperature: raw.base_temperature,
            records,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inclusive (min, max) over record years, or None with no records.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let first = self.records.first()?.year;
        Some(self.records.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.year), hi.max(r.year))
        }))
    }

    /// Inclusive (min, max) over record variances, or None with no records.
    pub fn variance_extent(&self) -> Option<(f64, f64)> {
        let first = self.records.first()?.variance;
        Some(self.records.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.variance), hi.max(r.variance))
        }))
    }

    /// Host-visible summary; zeros for an empty dataset.
    pub fn summary(&self) -> DatasetSummary {
        match self.year_extent() {
            Some((min_year, max_year)) => DatasetSummary {
                min_year,
                max_year,
                base_temperature: self.base_temperature,
            },
            None => DatasetSummary::default(),
        }
    }
}
