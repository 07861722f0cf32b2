//! Equipment model

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Calendar date format used by every date field (YYYY-MM-DD)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default status given to new equipment
pub const DEFAULT_STATUS: &str = "operational";

/// Equipment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    /// Server-assigned identifier (UUID)
    pub id: String,
    pub name: String,
    pub serial_number: String,
    pub manufacturer: String,
    pub model: Option<String>,
    /// Installation date (YYYY-MM-DD)
    pub installation_date: Option<String>,
    pub location: String,
    /// Service interval in days
    pub service_interval: Option<i32>,
    /// Last service date (YYYY-MM-DD)
    pub last_service: Option<String>,
    /// Derived from last service date and service interval
    pub next_service: Option<String>,
    /// Life expectancy in years
    pub life_expectancy: Option<i32>,
    /// Free-form status (operational, in_repair, faulty, decommissioned, ...)
    pub status: String,
    pub notes: Option<String>,
}

/// Create equipment request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields: name, serialNumber, manufacturer, location"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields: name, serialNumber, manufacturer, location"))]
    pub serial_number: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields: name, serialNumber, manufacturer, location"))]
    pub manufacturer: String,
    pub model: Option<String>,
    pub installation_date: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields: name, serialNumber, manufacturer, location"))]
    pub location: String,
    #[validate(range(min = 0, message = "serviceInterval must not be negative"))]
    pub service_interval: Option<i32>,
    pub last_service: Option<String>,
    #[validate(range(min = 0, message = "lifeExpectancy must not be negative"))]
    pub life_expectancy: Option<i32>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Update equipment request
///
/// Empty strings and zero numbers count as "not supplied", so a field cannot
/// be cleared through an update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub installation_date: Option<String>,
    pub location: Option<String>,
    pub service_interval: Option<i32>,
    pub last_service: Option<String>,
    pub life_expectancy: Option<i32>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Compute the next service date as `last_service + interval` days.
///
/// Returns `None` when the interval is not positive or the date does not parse.
pub fn next_service_date(last_service: &str, service_interval: i32) -> Option<String> {
    if service_interval <= 0 {
        return None;
    }
    let last = NaiveDate::parse_from_str(last_service, DATE_FORMAT).ok()?;
    last.checked_add_days(Days::new(service_interval as u64))
        .map(|d| d.format(DATE_FORMAT).to_string())
}

/// Treat `Some("")` the same as `None`
fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Treat `Some(n)` with `n <= 0` the same as `None`
fn supplied_positive(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v > 0)
}

impl EquipmentItem {
    /// Build a new record from a validated create request
    pub fn new(id: String, data: CreateEquipment) -> Self {
        let status = supplied(&data.status).unwrap_or(DEFAULT_STATUS).to_string();
        let mut item = Self {
            id,
            name: data.name,
            serial_number: data.serial_number,
            manufacturer: data.manufacturer,
            model: data.model,
            installation_date: data.installation_date,
            location: data.location,
            service_interval: data.service_interval,
            last_service: data.last_service,
            next_service: None,
            life_expectancy: data.life_expectancy,
            status,
            notes: data.notes,
        };
        item.refresh_next_service();
        item
    }

    /// Recompute `next_service`; left unchanged when it cannot be derived
    pub fn refresh_next_service(&mut self) {
        let (Some(last), Some(interval)) = (self.last_service.as_deref(), self.service_interval) else {
            return;
        };
        if let Some(next) = next_service_date(last, interval) {
            self.next_service = Some(next);
        }
    }

    /// Merge an update request into this record
    pub fn apply_update(&mut self, data: &UpdateEquipment) {
        if let Some(name) = supplied(&data.name) {
            self.name = name.to_string();
        }
        if let Some(serial_number) = supplied(&data.serial_number) {
            self.serial_number = serial_number.to_string();
        }
        if let Some(manufacturer) = supplied(&data.manufacturer) {
            self.manufacturer = manufacturer.to_string();
        }
        if let Some(model) = supplied(&data.model) {
            self.model = Some(model.to_string());
        }
        if let Some(installation_date) = supplied(&data.installation_date) {
            self.installation_date = Some(installation_date.to_string());
        }
        if let Some(location) = supplied(&data.location) {
            self.location = location.to_string();
        }
        if let Some(interval) = supplied_positive(data.service_interval) {
            self.service_interval = Some(interval);
        }
        if let Some(last_service) = supplied(&data.last_service) {
            self.last_service = Some(last_service.to_string());
            self.refresh_next_service();
        }
        if let Some(life_expectancy) = supplied_positive(data.life_expectancy) {
            self.life_expectancy = Some(life_expectancy);
        }
        if let Some(status) = supplied(&data.status) {
            self.status = status.to_string();
        }
        if let Some(notes) = supplied(&data.notes) {
            self.notes = Some(notes.to_string());
        }
    }
}
