use super::*;

use carlot_store::CarStore;

async fn test_state() -> Arc<AppState> {
    let store = Arc::new(CarStore::in_memory().await.unwrap());
    Arc::new(AppState::new(store))
}

fn request(brand: Option<&str>, model: Option<&str>, price: Option<&str>) -> CreateCarRequest {
    CreateCarRequest {
        brand: brand.map(String::from),
        model: model.map(String::from),
        price: price.map(String::from),
    }
}

#[test]
fn test_create_request_all_fields_present() {
    let req = request(Some("Volvo"), Some("V70"), Some("70000"));
    let new_car = req.into_new_car().unwrap();
    assert_eq!(new_car.brand, "Volvo");
    assert_eq!(new_car.model, "V70");
    assert_eq!(new_car.price, "70000");
}

#[test]
fn test_create_request_missing_field_rejected() {
    for req in [
        request(None, Some("V70"), Some("70000")),
        request(Some("Volvo"), None, Some("70000")),
        request(Some("Volvo"), Some("V70"), None),
        request(Some("Volvo"), None, None),
        request(None, None, None),
    ] {
        assert!(matches!(req.into_new_car(), Err(ApiError::MissingFields)));
    }
}

#[test]
fn test_create_request_empty_field_rejected() {
    let req = request(Some("Volvo"), Some(""), Some("70000"));
    assert!(matches!(req.into_new_car(), Err(ApiError::MissingFields)));
}

#[test]
fn test_create_request_deserialize_with_missing_fields() {
    // A partial body must deserialize so the presence check can reject it
    let req: CreateCarRequest = serde_json::from_str(r#"{"brand": "Volvo"}"#).unwrap();
    assert_eq!(req.brand, Some("Volvo".to_string()));
    assert!(req.model.is_none());
    assert!(req.price.is_none());
}

#[test]
fn test_cars_response_serialize() {
    let resp = CarsResponse {
        cars: vec![Car {
            id: 1,
            brand: "Volvo".to_string(),
            model: "V70".to_string(),
            price: "70000".to_string(),
        }],
    };
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "cars": [{"id": 1, "brand": "Volvo", "model": "V70", "price": "70000"}]
        })
    );
}

#[test]
fn test_clear_response_serialize() {
    let resp = ClearResponse {
        message: "Removed 2 cars".to_string(),
    };
    let json = serde_json::to_string(&resp).unwrap();
    assert!(json.contains("Removed 2 cars"));
}

#[tokio::test]
async fn test_create_car_handler_assigns_id() {
    let state = test_state().await;
    let req = request(Some("Volvo"), Some("V70"), Some("70000"));

    let (status, Json(car)) = create_car(State(state.clone()), JsonOrForm(req))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(car.id, 1);
    assert_eq!(car.brand, "Volvo");
}

#[tokio::test]
async fn test_create_car_handler_rejects_before_storage() {
    let state = test_state().await;
    let req = request(Some("Volvo"), None, None);

    let err = create_car(State(state.clone()), JsonOrForm(req))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, ApiError::MissingFields));

    // No partial insert
    assert_eq!(state.store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_cars_handler_empty() {
    let state = test_state().await;
    let Json(resp) = list_cars(State(state)).await.unwrap();
    assert!(resp.cars.is_empty());
}

#[tokio::test]
async fn test_clear_cars_handler_reports_count() {
    let state = test_state().await;
    state
        .store
        .insert(NewCar::new("Volvo", "V70", "70000"))
        .await
        .unwrap();

    let Json(resp) = clear_cars(State(state.clone())).await.unwrap();
    assert_eq!(resp.message, "Removed 1 cars");
    assert_eq!(state.store.count().await.unwrap(), 0);
}
