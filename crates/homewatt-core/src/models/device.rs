use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    AirConditioner,
    Refrigerator,
    Television,
    WashingMachine,
    WaterHeater,
    Lighting,
    Computer,
    Other,
}

impl DeviceType {
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceType::AirConditioner => "Air conditioner",
            DeviceType::Refrigerator => "Refrigerator",
            DeviceType::Television => "Television",
            DeviceType::WashingMachine => "Washing machine",
            DeviceType::WaterHeater => "Water heater",
            DeviceType::Lighting => "Lighting",
            DeviceType::Computer => "Computer",
            DeviceType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Device {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub device_type: DeviceType,
    /// Watts
    pub power_rating: f64,
    pub daily_usage_hours: Option<f64>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
    #[serde(with = "super::datetime")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
}

impl Device {
    /// Estimated daily consumption in kWh
    pub fn daily_energy_kwh(&self) -> f64 {
        self.power_rating * self.daily_usage_hours.unwrap_or(0.0) / 1000.0
    }

    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct DeviceCreate {
    pub name: String,
    pub device_type: DeviceType,
    pub power_rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_usage_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct DeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_usage_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device() {
        let json = r#"{"id":9,"user_id":4,"name":"Kitchen fridge","device_type":"refrigerator","power_rating":150.0,"daily_usage_hours":24.0,"location":"Kitchen","is_active":true,"created_at":"2024-05-01T08:30:00"}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.device_type, DeviceType::Refrigerator);
        assert!((device.daily_energy_kwh() - 3.6).abs() < 1e-9);
        assert!(device.is_active());
    }

    #[test]
    fn test_device_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&DeviceType::AirConditioner).unwrap(),
            r#""air_conditioner""#
        );
        assert_eq!(DeviceType::WaterHeater.display_name(), "Water heater");
    }

    #[test]
    fn test_energy_without_usage_hours() {
        let json = r#"{"id":1,"user_id":1,"name":"TV","device_type":"television","power_rating":100.0,"daily_usage_hours":null,"location":null,"is_active":null,"created_at":"2024-05-01T08:30:00"}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.daily_energy_kwh(), 0.0);
        assert!(device.is_active());
    }
}
