//! Car model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{blank_as_none, merge, nullable_blank};
use crate::error::ValidationError;
use crate::validation::{Validate, validate_latitude, validate_longitude, validate_required};

/// Operational status of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

/// Car entity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    /// Free-text owner name, not a reference to a user
    pub owner: String,
    pub status: CarStatus,
    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Car {
    /// Shallow-merge a patch over this record
    pub fn apply(&mut self, patch: CarPatch) {
        merge(&mut self.make, patch.make);
        merge(&mut self.model, patch.model);
        merge(&mut self.year, patch.year);
        merge(&mut self.license_plate, patch.license_plate);
        merge(&mut self.owner, patch.owner);
        merge(&mut self.status, patch.status);
        merge(&mut self.location, patch.location);
        merge(&mut self.latitude, patch.latitude);
        merge(&mut self.longitude, patch.longitude);
        merge(&mut self.image, patch.image);
    }
}

/// New car creation payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub owner: String,
    pub status: CarStatus,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub latitude: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub longitude: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,
}

impl NewCar {
    /// Build the stored record, stamping the creation time
    pub fn into_car(self, id: Uuid, now: DateTime<Utc>) -> Car {
        Car {
            id,
            make: self.make,
            model: self.model,
            year: self.year,
            license_plate: self.license_plate,
            owner: self.owner,
            status: self.status,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            image: self.image,
            created_at: now,
        }
    }
}

impl Validate for NewCar {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_required("make", &self.make)?;
        validate_required("model", &self.model)?;
        validate_required("licensePlate", &self.license_plate)?;
        validate_required("owner", &self.owner)?;
        validate_latitude(self.latitude.as_deref())?;
        validate_longitude(self.longitude.as_deref())?;
        Ok(())
    }
}

/// Car update payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CarPatch {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub license_plate: Option<String>,
    pub owner: Option<String>,
    pub status: Option<CarStatus>,
    #[serde(default, deserialize_with = "nullable_blank")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable_blank")]
    pub latitude: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable_blank")]
    pub longitude: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable_blank")]
    pub image: Option<Option<String>>,
}

impl Validate for CarPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(make) = &self.make {
            validate_required("make", make)?;
        }
        if let Some(model) = &self.model {
            validate_required("model", model)?;
        }
        if let Some(plate) = &self.license_plate {
            validate_required("licensePlate", plate)?;
        }
        if let Some(owner) = &self.owner {
            validate_required("owner", owner)?;
        }
        validate_latitude(self.latitude.as_ref().and_then(|v| v.as_deref()))?;
        validate_longitude(self.longitude.as_ref().and_then(|v| v.as_deref()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_new_car_requires_status_and_integer_year() {
        let missing_status = serde_json::from_value::<NewCar>(json!({
            "make": "Toyota",
            "model": "Camry",
            "year": 2024,
            "licensePlate": "ABC-123",
            "owner": "John Smith",
        }));
        assert!(missing_status.is_err());

        let string_year = serde_json::from_value::<NewCar>(json!({
            "make": "Toyota",
            "model": "Camry",
            "year": "2024",
            "licensePlate": "ABC-123",
            "owner": "John Smith",
            "status": "active",
        }));
        assert!(string_year.is_err());
    }

    #[test]
    fn test_car_serializes_camel_case() {
        let car = NewCar {
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2023,
            license_plate: "XYZ-456".to_string(),
            owner: "Sarah Johnson".to_string(),
            status: CarStatus::Maintenance,
            location: None,
            latitude: None,
            longitude: None,
            image: None,
        }
        .into_car(Uuid::new_v4(), Utc::now());

        let value = serde_json::to_value(&car).expect("serialize car");
        assert_eq!(value["licensePlate"], "XYZ-456");
        assert_eq!(value["status"], "maintenance");
        assert!(value["createdAt"].is_string());
        assert!(value["location"].is_null());
    }

    #[test]
    fn test_patch_rejects_bad_coordinates() {
        let patch: CarPatch = serde_json::from_value(json!({ "latitude": "north" }))
            .expect("deserialize patch");
        assert!(patch.validate().is_err());

        let patch: CarPatch = serde_json::from_value(json!({ "latitude": null }))
            .expect("deserialize patch");
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let new_car: NewCar = serde_json::from_value(json!({
            "make": "Toyota",
            "model": "Camry",
            "year": 2024,
            "licensePlate": "ABC-123",
            "owner": "John Smith",
            "status": "active",
            "location": "",
            "latitude": "",
            "longitude": "  ",
        }))
        .expect("deserialize new car");

        assert!(new_car.validate().is_ok());
        assert_eq!(new_car.location, None);
        assert_eq!(new_car.latitude, None);
        assert_eq!(new_car.longitude, None);

        let patch: CarPatch = serde_json::from_value(json!({ "latitude": "" }))
            .expect("deserialize patch");
        assert!(patch.validate().is_ok());
        assert_eq!(patch.latitude, Some(None));
        assert_eq!(patch.longitude, None);
    }
}
