use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    DeviceUsage,
    Lifestyle,
    DeviceUpgrade,
    Other,
}

impl RecommendationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            RecommendationCategory::DeviceUsage => "Device usage",
            RecommendationCategory::Lifestyle => "Lifestyle",
            RecommendationCategory::DeviceUpgrade => "Device upgrade",
            RecommendationCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Recommendation {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub category: RecommendationCategory,
    /// kWh per month
    pub estimated_saving: Option<f64>,
    pub estimated_cost_saving: Option<f64>,
    pub implementation_difficulty: Option<DifficultyLevel>,
    pub device_id: Option<i64>,
    pub is_implemented: bool,
    #[serde(with = "super::datetime")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    pub fn difficulty(&self) -> DifficultyLevel {
        self.implementation_difficulty.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct RecommendationCreate {
    pub title: String,
    pub description: String,
    pub category: RecommendationCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_saving: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost_saving: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_difficulty: Option<DifficultyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct RecommendationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RecommendationCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_saving: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost_saving: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_difficulty: Option<DifficultyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_implemented: Option<bool>,
}

/// Filters for the signed-in user's recommendation list
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RecommendationCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_implemented: Option<bool>,
    pub skip: u32,
    pub limit: u32,
}

impl Default for RecommendationQuery {
    fn default() -> Self {
        Self {
            category: None,
            is_implemented: None,
            skip: 0,
            limit: 100,
        }
    }
}

/// Where a user's recommendations came from, and which generators are available
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct RecommendationSources {
    pub source_stats: BTreeMap<String, i64>,
    pub available_ai_providers: Vec<String>,
}
