use chrono::NaiveDate;
use serde::Serialize;

use super::ApiClient;
use crate::http::{ApiError, RequestDescriptor};
use crate::models::{
    AnalysisPeriod, AnalysisPeriods, BenchmarkComparison, EnergyAnalysis, EnergyReading,
    EnergyReadingCreate, ReadingQuery,
};

#[derive(Serialize)]
struct AnalysisParams {
    user_id: i64,
    period: AnalysisPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
}

impl ApiClient {
    /// Readings recorded by the signed-in user, newest first
    pub async fn my_energy_readings(
        &self,
        query: &ReadingQuery,
    ) -> Result<Vec<EnergyReading>, ApiError> {
        let request = RequestDescriptor::get("/energy-readings/my-energy-reading").query(query);
        self.http().request(request).await
    }

    pub async fn create_energy_reading(
        &self,
        reading: &EnergyReadingCreate,
    ) -> Result<EnergyReading, ApiError> {
        self.http().post_json("/energy-readings/", reading).await
    }

    /// Consumption analysis for `user_id`.
    ///
    /// `start_date`/`end_date` only matter for `AnalysisPeriod::Custom`.
    pub async fn energy_analysis(
        &self,
        user_id: i64,
        period: AnalysisPeriod,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<EnergyAnalysis, ApiError> {
        let request = RequestDescriptor::get("/energy-readings/analysis").query(&AnalysisParams {
            user_id,
            period,
            start_date,
            end_date,
        });
        self.http().request(request).await
    }

    pub async fn analysis_periods(&self) -> Result<AnalysisPeriods, ApiError> {
        self.http().get("/energy-readings/periods").await
    }

    /// `None` when the backend has no benchmark for the user's household
    pub async fn benchmark_comparison(&self) -> Result<Option<BenchmarkComparison>, ApiError> {
        self.http().get("/energy-readings/benchmark-comparison").await
    }
}
