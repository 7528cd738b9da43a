//! Car API handlers.
//!
//! Each handler issues a single statement through the store and serializes
//! the result to JSON. Validation happens before storage is touched.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use carlot_store::{Car, NewCar};

use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::state::AppState;

/// Request to create a car.
///
/// All fields are optional at the deserialization layer so a missing field
/// reaches the presence check below instead of a framework rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCarRequest {
    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub price: Option<String>,
}

impl CreateCarRequest {
    /// Validate that all three fields are present and non-empty.
    fn into_new_car(self) -> Result<NewCar, ApiError> {
        match (
            non_empty(self.brand),
            non_empty(self.model),
            non_empty(self.price),
        ) {
            (Some(brand), Some(model), Some(price)) => Ok(NewCar {
                brand,
                model,
                price,
            }),
            _ => Err(ApiError::MissingFields),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Response listing every car.
#[derive(Debug, Serialize)]
pub struct CarsResponse {
    pub cars: Vec<Car>,
}

/// Confirmation response for the clear operation.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

/// List every car in the table.
///
/// GET /cars
pub async fn list_cars(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CarsResponse>, ApiError> {
    let cars = state.store.list().await?;
    Ok(Json(CarsResponse { cars }))
}

/// Create a car from a JSON or form body.
///
/// POST /cars
pub async fn create_car(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<CreateCarRequest>,
) -> Result<(StatusCode, Json<Car>), ApiError> {
    let new_car = req.into_new_car()?;
    let car = state.store.insert(new_car).await?;

    info!("created car id={} brand={}", car.id, car.brand);
    Ok((StatusCode::CREATED, Json(car)))
}

/// Delete every car unconditionally.
///
/// GET /clear-cars
pub async fn clear_cars(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClearResponse>, ApiError> {
    let removed = state.store.clear().await?;

    info!("cleared {} cars", removed);
    Ok(Json(ClearResponse {
        message: format!("Removed {} cars", removed),
    }))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
