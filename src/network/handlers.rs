//! Request handlers
//!
//! Translate HTTP requests into engine calls and engine results into
//! status codes and JSON envelopes.
//!
//! Status mapping: invalid input → 400, not found → 404,
//! id collision → 409, anything else → 500.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::engine::Engine;
use crate::error::FleetError;
use crate::protocol::{
    DataResponse, ErrorResponse, MessageResponse, UpdateFuelTypeBody, UpdateMaxSpeedBody,
    VehicleBody, VehicleJson, REQUIRED_FIELDS,
};
use crate::vehicle::{Vehicle, VehicleId};

type EngineState = State<Arc<Engine>>;

// =============================================================================
// Response Helpers
// =============================================================================

fn fail(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

fn unexpected(err: &FleetError) -> Response {
    tracing::warn!("Unexpected engine error: {}", err);
    fail(StatusCode::INTERNAL_SERVER_ERROR, "an unexpected error occurred")
}

fn ok_list(status: StatusCode, message: &str, vehicles: Vec<Vehicle>) -> Response {
    let data: Vec<VehicleJson> = vehicles.into_iter().map(VehicleJson::from).collect();
    (status, Json(DataResponse::new(message, data))).into_response()
}

fn ok_one(status: StatusCode, message: &str, vehicle: Vehicle) -> Response {
    (status, Json(DataResponse::new(message, VehicleJson::from(vehicle)))).into_response()
}

/// Errors of a filtered read: bad argument → 400, empty result → 404
fn filter_failure(err: FleetError, invalid: &str, not_found: &str) -> Response {
    match err {
        e if e.is_invalid_input() => fail(StatusCode::BAD_REQUEST, invalid),
        FleetError::VehiclesNotFound => fail(StatusCode::NOT_FOUND, not_found),
        e => unexpected(&e),
    }
}

/// Errors of a targeted update
fn update_failure(err: FleetError, invalid: &str) -> Response {
    match err {
        e if e.is_invalid_input() => fail(StatusCode::BAD_REQUEST, invalid),
        FleetError::VehicleNotFound => fail(StatusCode::NOT_FOUND, "vehicle not found"),
        e => unexpected(&e),
    }
}

fn parse_id(raw: &str) -> Result<VehicleId, Response> {
    raw.parse()
        .map_err(|_| fail(StatusCode::BAD_REQUEST, "invalid identifier"))
}

fn parse_year(raw: &str) -> Result<i32, Response> {
    raw.parse()
        .map_err(|_| fail(StatusCode::BAD_REQUEST, "invalid year"))
}

/// Check required fields in order, then decode the typed body
fn parse_vehicle_body(value: Value) -> Result<Vehicle, Response> {
    let Value::Object(map) = &value else {
        return Err(fail(StatusCode::BAD_REQUEST, "invalid request body"));
    };

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !map.contains_key(**f)) {
        return Err(fail(
            StatusCode::BAD_REQUEST,
            format!("missing required field: {}", missing),
        ));
    }

    serde_json::from_value::<VehicleBody>(value)
        .map(Vehicle::from)
        .map_err(|_| fail(StatusCode::BAD_REQUEST, "invalid request body"))
}

/// Split `"min-max"` into its two (possibly unparsable) bounds
fn split_bounds(raw: Option<&String>) -> Option<(Option<f64>, Option<f64>)> {
    let (min, max) = raw?.split_once('-')?;
    if max.contains('-') {
        return None;
    }
    Some((min.parse().ok(), max.parse().ok()))
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /vehicles`
pub async fn get_all(State(engine): EngineState) -> Response {
    match engine.find_all() {
        Ok(vehicles) => ok_list(StatusCode::OK, "success to find vehicles", vehicles),
        Err(FleetError::VehiclesNotFound) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("vehicles not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Unexpected engine error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("internal server error")),
            )
                .into_response()
        }
    }
}

/// `POST /vehicles`
pub async fn create(
    State(engine): EngineState,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(value)) = body else {
        return fail(StatusCode::BAD_REQUEST, "invalid request body");
    };
    let vehicle = match parse_vehicle_body(value) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match engine.insert(vehicle) {
        Ok(stored) => ok_one(StatusCode::CREATED, "vehicle created", stored),
        Err(e) if e.is_invalid_input() => fail(StatusCode::BAD_REQUEST, "invalid vehicle"),
        Err(FleetError::VehicleIdAlreadyExists) => {
            fail(StatusCode::CONFLICT, "vehicle already exists")
        }
        Err(e) => unexpected(&e),
    }
}

/// `POST /vehicles/batch`
pub async fn create_many(
    State(engine): EngineState,
    body: Result<Json<Vec<Value>>, JsonRejection>,
) -> Response {
    let Ok(Json(values)) = body else {
        return fail(StatusCode::BAD_REQUEST, "invalid request body");
    };

    let mut vehicles = Vec::with_capacity(values.len());
    for value in values {
        match parse_vehicle_body(value) {
            Ok(v) => vehicles.push(v),
            Err(resp) => return resp,
        }
    }

    match engine.insert_many(vehicles) {
        Ok(stored) => ok_list(StatusCode::CREATED, "vehicles created", stored),
        Err(e) if e.is_invalid_input() => {
            fail(StatusCode::BAD_REQUEST, "some vehicles are invalid")
        }
        Err(FleetError::VehicleIdAlreadyExists) => {
            fail(StatusCode::CONFLICT, "some vehicles already exists")
        }
        Err(e) => unexpected(&e),
    }
}

/// `GET /vehicles/color/:color/year/:year`
pub async fn get_by_color_and_year(
    State(engine): EngineState,
    Path((color, year)): Path<(String, String)>,
) -> Response {
    let year = match parse_year(&year) {
        Ok(y) => y,
        Err(resp) => return resp,
    };

    match engine.find_by_color_and_year(&color, year) {
        Ok(vehicles) => ok_list(
            StatusCode::OK,
            "vehicles with that color and year were found",
            vehicles,
        ),
        Err(e) => filter_failure(
            e,
            "invalid params",
            "there are not any vehicles with that color and year",
        ),
    }
}

/// `GET /vehicles/brand/:brand/between/:start_year/:end_year`
pub async fn get_by_brand_between_years(
    State(engine): EngineState,
    Path((brand, start_year, end_year)): Path<(String, String, String)>,
) -> Response {
    let (start_year, end_year) = match (parse_year(&start_year), parse_year(&end_year)) {
        (Ok(s), Ok(e)) => (s, e),
        (Err(resp), _) | (_, Err(resp)) => return resp,
    };

    match engine.find_by_brand_between_years(&brand, start_year, end_year) {
        Ok(vehicles) => ok_list(
            StatusCode::OK,
            "vehicles with that brand and range of years were found",
            vehicles,
        ),
        Err(e) => filter_failure(
            e,
            "invalid params",
            "there are not any vehicles with that brand and range of years",
        ),
    }
}

/// `GET /vehicles/average_speed/brand/:brand`
pub async fn average_speed_by_brand(
    State(engine): EngineState,
    Path(brand): Path<String>,
) -> Response {
    match engine.average_speed_by_brand(&brand) {
        Ok(avg) => Json(MessageResponse::new(format!(
            "the average max speed of {} vehicles is {:.2}",
            brand, avg
        )))
        .into_response(),
        Err(e) => filter_failure(e, "invalid brand", "there are not any vehicles with that brand"),
    }
}

/// `GET /vehicles/average_capacity/brand/:brand`
pub async fn average_capacity_by_brand(
    State(engine): EngineState,
    Path(brand): Path<String>,
) -> Response {
    match engine.average_capacity_by_brand(&brand) {
        Ok(avg) => Json(MessageResponse::new(format!(
            "the average capacity of {} vehicles is {:.2}",
            brand, avg
        )))
        .into_response(),
        Err(e) => filter_failure(e, "invalid brand", "there are not any vehicles with that brand"),
    }
}

/// `PUT /vehicles/:id/update_speed`
pub async fn update_max_speed(
    State(engine): EngineState,
    Path(id): Path<String>,
    body: Result<Json<UpdateMaxSpeedBody>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Ok(Json(body)) = body else {
        return fail(StatusCode::BAD_REQUEST, "invalid request body");
    };

    match engine.update_max_speed(id, body.max_speed) {
        Ok(vehicle) => ok_one(StatusCode::OK, "updated max speed of vehicle", vehicle),
        Err(e) => update_failure(e, "invalid vehicle max speed"),
    }
}

/// `PUT /vehicles/:id/update_fuel`
pub async fn update_fuel_type(
    State(engine): EngineState,
    Path(id): Path<String>,
    body: Result<Json<UpdateFuelTypeBody>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Ok(Json(body)) = body else {
        return fail(StatusCode::BAD_REQUEST, "invalid request body");
    };

    match engine.update_fuel_type(id, &body.fuel_type) {
        Ok(vehicle) => ok_one(StatusCode::OK, "updated fuel type of vehicle", vehicle),
        Err(e) => update_failure(e, "invalid vehicle fuel type"),
    }
}

/// `GET /vehicles/fuel_type/:type`
pub async fn get_by_fuel_type(
    State(engine): EngineState,
    Path(fuel_type): Path<String>,
) -> Response {
    match engine.find_by_fuel_type(&fuel_type) {
        Ok(vehicles) => ok_list(
            StatusCode::OK,
            "vehicles with that fuel type were found",
            vehicles,
        ),
        Err(e) => filter_failure(
            e,
            "invalid vehicle fuel type",
            "there are not any vehicles with that fuel type",
        ),
    }
}

/// `GET /vehicles/transmission/:type`
pub async fn get_by_transmission(
    State(engine): EngineState,
    Path(transmission): Path<String>,
) -> Response {
    match engine.find_by_transmission(&transmission) {
        Ok(vehicles) => ok_list(
            StatusCode::OK,
            "vehicles with that transmission were found",
            vehicles,
        ),
        Err(e) => filter_failure(
            e,
            "invalid vehicle transmission",
            "there are not any vehicles with that transmission",
        ),
    }
}

/// `DELETE /vehicles/:id`
pub async fn delete(State(engine): EngineState, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match engine.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(FleetError::VehicleNotFound) => fail(StatusCode::NOT_FOUND, "vehicle not found"),
        Err(e) => unexpected(&e),
    }
}

/// `GET /vehicles/dimensions?height=min-max&width=min-max`
pub async fn get_by_dimensions(
    State(engine): EngineState,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some((min_h, max_h)) = split_bounds(params.get("height")) else {
        return fail(StatusCode::BAD_REQUEST, "invalid height");
    };
    let Some((min_w, max_w)) = split_bounds(params.get("width")) else {
        return fail(StatusCode::BAD_REQUEST, "invalid width");
    };

    let Some(min_h) = min_h else {
        return fail(StatusCode::BAD_REQUEST, "invalid min height");
    };
    let Some(max_h) = max_h else {
        return fail(StatusCode::BAD_REQUEST, "invalid max height");
    };
    let Some(min_w) = min_w else {
        return fail(StatusCode::BAD_REQUEST, "invalid min width");
    };
    let Some(max_w) = max_w else {
        return fail(StatusCode::BAD_REQUEST, "invalid max width");
    };

    match engine.find_by_dimensions(min_h, max_h, min_w, max_w) {
        Ok(vehicles) => ok_list(
            StatusCode::OK,
            "vehicles with that dimensions were found",
            vehicles,
        ),
        Err(e) => filter_failure(
            e,
            "invalid dimensions",
            "there are not any vehicles with that dimensions",
        ),
    }
}

/// `GET /vehicles/weight?min=a&max=b`
pub async fn get_by_weight(
    State(engine): EngineState,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let bound = |key: &str| params.get(key).and_then(|v| v.parse::<f64>().ok());

    let Some(min) = bound("min") else {
        return fail(StatusCode::BAD_REQUEST, "invalid min weight");
    };
    let Some(max) = bound("max") else {
        return fail(StatusCode::BAD_REQUEST, "invalid max weight");
    };

    match engine.find_by_weight(min, max) {
        Ok(vehicles) => ok_list(
            StatusCode::OK,
            "vehicles with that weight were found",
            vehicles,
        ),
        Err(e) => filter_failure(e, "invalid weight", "there are not any vehicles with that weight"),
    }
}
