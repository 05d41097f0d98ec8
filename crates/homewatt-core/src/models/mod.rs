//! Data models exchanged with the energy service.
//!
//! - `User`, `UserCreate`, `UserUpdate`, `TokenResponse`: accounts and login
//! - `Device`, `DeviceCreate`, `DeviceUpdate`, `DeviceType`: household appliances
//! - `EnergyReading*`, `EnergyAnalysis`, `BenchmarkComparison`: consumption data
//! - `Recommendation*`: energy-saving advice

pub mod datetime;
pub mod device;
pub mod reading;
pub mod recommendation;
pub mod user;

pub use device::{Device, DeviceCreate, DeviceType, DeviceUpdate};
pub use reading::{
    AnalysisPeriod, AnalysisPeriods, BenchmarkComparison, EnergyAnalysis, EnergyReading,
    EnergyReadingCreate, PeriodOption, ReadingQuery, ReadingType, Season,
};
pub use recommendation::{
    DifficultyLevel, Recommendation, RecommendationCategory, RecommendationCreate,
    RecommendationQuery, RecommendationSources, RecommendationUpdate,
};
pub use user::{TokenResponse, User, UserCreate, UserUpdate};
