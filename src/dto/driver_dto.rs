use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::driver::Driver;

// Request para crear un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub national_id: String,
    #[validate(length(min = 1, max = 20))]
    pub license_number: String,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
}

pub type UpdateDriverRequest = CreateDriverRequest;

// Response de conductor
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub license_number: String,
    pub phone: Option<String>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            national_id: driver.national_id,
            license_number: driver.license_number,
            phone: driver.phone,
        }
    }
}
