use super::ApiClient;
use crate::http::ApiError;
use crate::models::{Device, DeviceCreate, DeviceUpdate};

/// Backend default page size
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

impl ApiClient {
    /// Devices owned by the signed-in user
    pub async fn my_devices(&self, skip: u32, limit: u32) -> Result<Vec<Device>, ApiError> {
        self.http()
            .get(&format!("/devices/my-devices?skip={}&limit={}", skip, limit))
            .await
    }

    pub async fn get_device(&self, device_id: i64) -> Result<Device, ApiError> {
        self.http().get(&format!("/devices/{}", device_id)).await
    }

    pub async fn create_device(&self, device: &DeviceCreate) -> Result<Device, ApiError> {
        self.http().post_json("/devices/", device).await
    }

    pub async fn update_device(
        &self,
        device_id: i64,
        update: &DeviceUpdate,
    ) -> Result<Device, ApiError> {
        self.http()
            .put_json(&format!("/devices/{}", device_id), update)
            .await
    }

    pub async fn delete_device(&self, device_id: i64) -> Result<(), ApiError> {
        self.http().delete(&format!("/devices/{}", device_id)).await?;
        Ok(())
    }
}
