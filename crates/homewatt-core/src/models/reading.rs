use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ReadingType {
    /// Whole-household meter reading
    Total,
    /// Reading for a single device
    Device,
}

/// Window the backend aggregates an analysis over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPeriod {
    #[default]
    CurrentMonth,
    LastMonth,
    #[serde(rename = "last_3_months")]
    Last3Months,
    #[serde(rename = "last_6_months")]
    Last6Months,
    CurrentYear,
    /// Requires explicit start and end dates
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct EnergyReading {
    pub id: i64,
    pub user_id: i64,
    /// kWh
    pub reading_value: f64,
    pub reading_type: ReadingType,
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub reading_date: NaiveDate,
    pub cost: Option<f64>,
    pub device_id: Option<i64>,
    #[serde(with = "super::datetime")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct EnergyReadingCreate {
    pub reading_value: f64,
    pub reading_type: ReadingType,
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub reading_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,
}

/// Filters for the signed-in user's reading list
#[derive(Debug, Clone, Serialize)]
pub struct ReadingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub skip: u32,
    pub limit: u32,
}

impl Default for ReadingQuery {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            skip: 0,
            limit: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct EnergyAnalysis {
    pub total_consumption: f64,
    pub average_daily_consumption: f64,
    /// Percent above (positive) or below the benchmark
    pub comparison_with_benchmark: f64,
    pub cost_analysis: f64,
    #[cfg_attr(feature = "ts", ts(type = "Array<Record<string, unknown>>"))]
    pub monthly_trend: Vec<Value>,
    #[cfg_attr(feature = "ts", ts(type = "Array<Record<string, unknown>>"))]
    pub device_breakdown: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PeriodOption {
    pub value: AnalysisPeriod,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct AnalysisPeriods {
    pub available_periods: Vec<PeriodOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct BenchmarkComparison {
    pub user_consumption: f64,
    pub benchmark_consumption: f64,
    pub difference_percentage: f64,
    pub season: Season,
    pub family_size: i64,
    pub house_size_range: String,
}

impl BenchmarkComparison {
    pub fn is_above_benchmark(&self) -> bool {
        self.user_consumption > self.benchmark_consumption
    }
}
