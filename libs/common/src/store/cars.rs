//! Car repository

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::table::Table;
use crate::error::{EntityKind, StoreError, StoreResult, UniqueField};
use crate::models::{Car, CarPatch, NewCar};

/// Cars plus the license plate index, guarded together
#[derive(Debug, Default)]
struct CarTable {
    records: Table<Car>,
    by_license_plate: HashMap<String, Uuid>,
}

impl CarTable {
    fn check_unique(&self, license_plate: &str, owner: Option<Uuid>) -> StoreResult<()> {
        let taken = self
            .by_license_plate
            .get(license_plate)
            .is_some_and(|id| Some(*id) != owner);

        if taken {
            return Err(StoreError::conflict(UniqueField::LicensePlate, license_plate));
        }
        Ok(())
    }

    fn insert(&mut self, car: Car) -> StoreResult<()> {
        self.check_unique(&car.license_plate, None)?;
        self.by_license_plate.insert(car.license_plate.clone(), car.id);
        self.records.insert(car.id, car);
        Ok(())
    }
}

/// In-memory car repository
#[derive(Debug, Clone, Default)]
pub struct CarRepository {
    inner: Arc<RwLock<CarTable>>,
}

impl CarRepository {
    /// Create an empty car repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a car by ID
    pub async fn get(&self, id: Uuid) -> Option<Car> {
        self.inner.read().await.records.get(&id).cloned()
    }

    /// Get all cars in insertion order
    pub async fn get_all(&self) -> Vec<Car> {
        self.inner.read().await.records.to_vec()
    }

    /// Find a car by license plate
    pub async fn get_by_license_plate(&self, license_plate: &str) -> Option<Car> {
        let table = self.inner.read().await;
        let id = table.by_license_plate.get(license_plate)?;
        table.records.get(id).cloned()
    }

    /// Register a new car with a fresh ID
    pub async fn create(&self, new_car: NewCar) -> StoreResult<Car> {
        let mut table = self.inner.write().await;
        let car = new_car.into_car(table.records.fresh_id(), Utc::now());
        table.insert(car.clone())?;

        info!(car_id = %car.id, license_plate = %car.license_plate, "Registered car");
        Ok(car)
    }

    /// Store a fully-formed car record, keeping its ID and timestamps
    pub async fn insert(&self, car: Car) -> StoreResult<Car> {
        self.inner.write().await.insert(car.clone())?;
        Ok(car)
    }

    /// Apply a patch to an existing car
    pub async fn update(&self, id: Uuid, patch: CarPatch) -> StoreResult<Car> {
        let mut table = self.inner.write().await;
        let mut updated = table
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityKind::Car, id))?;
        let previous_plate = updated.license_plate.clone();

        updated.apply(patch);
        table.check_unique(&updated.license_plate, Some(id))?;

        table.by_license_plate.remove(&previous_plate);
        table
            .by_license_plate
            .insert(updated.license_plate.clone(), id);
        table.records.insert(id, updated.clone());

        info!(car_id = %id, "Updated car");
        Ok(updated)
    }

    /// Delete a car, returning whether a record was removed
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut table = self.inner.write().await;
        let Some(car) = table.records.remove(&id) else {
            return false;
        };
        table.by_license_plate.remove(&car.license_plate);

        info!(car_id = %id, "Deleted car");
        true
    }
}
