//! HTTP request handlers for the pricing API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_multi_room_price, calculate_stay_price};
use crate::config::CatalogLoader;
use crate::error::EngineResult;
use crate::models::{MultiRoomCalculation, NightBreakdown, PriceCalculation};

use super::request::{MultiRoomQuoteRequest, QuoteRequest};
use super::response::{ApiError, ApiErrorResponse, QuoteResponse, QuoteWarning};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/calculate", post(calculate_handler))
        .route("/calculate/multi-room", post(calculate_multi_room_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /calculate.
///
/// Prices a single stay for one accommodation type.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_error(rejection_to_error(correlation_id, rejection)),
    };

    let start_time = Instant::now();
    match quote_single_stay(state.catalog(), &request) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                accommodation_type = %request.accommodation_type_id,
                nights = quote.pricing.total_nights,
                adjusted_nights = adjusted_nights(&quote.pricing.nights),
                grand_total = %quote.pricing.grand_total,
                duration_us = start_time.elapsed().as_micros(),
                "Quote calculated"
            );
            json_ok(&quote)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Quote rejected");
            json_error(err.into())
        }
    }
}

/// Handler for POST /calculate/multi-room.
///
/// Prices a group booking room by room and returns the group total with a
/// per-room breakdown.
async fn calculate_multi_room_handler(
    State(state): State<AppState>,
    payload: Result<Json<MultiRoomQuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing multi-room quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_error(rejection_to_error(correlation_id, rejection)),
    };

    let start_time = Instant::now();
    match quote_multi_room(state.catalog(), &request) {
        Ok(quote) => {
            if !quote.pricing.is_consistent() {
                error!(
                    correlation_id = %correlation_id,
                    grand_total = %quote.pricing.totals.grand_total,
                    "Per-room breakdown does not add up to the group total"
                );
            }
            info!(
                correlation_id = %correlation_id,
                rooms = quote.pricing.per_room_breakdown.len(),
                nights = quote.pricing.totals.total_nights,
                adjusted_nights = adjusted_nights(&quote.pricing.totals.nights),
                grand_total = %quote.pricing.totals.grand_total,
                duration_us = start_time.elapsed().as_micros(),
                "Multi-room quote calculated"
            );
            json_ok(&quote)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Multi-room quote rejected");
            json_error(err.into())
        }
    }
}

/// Validates, resolves and prices a single-stay request.
fn quote_single_stay(
    catalog: &CatalogLoader,
    request: &QuoteRequest,
) -> EngineResult<QuoteResponse<PriceCalculation>> {
    request.validate()?;

    let accommodation_type = catalog.get_accommodation_type(&request.accommodation_type_id)?;
    let addons = request.addon_selections(catalog)?;

    let pricing = calculate_stay_price(
        request.check_in,
        request.check_out,
        accommodation_type,
        catalog.rate_adjustments(),
        request.num_adults,
        request.num_children,
        &addons,
    );

    let mut warnings = Vec::new();
    let guests = request.num_adults.saturating_add(request.num_children);
    if accommodation_type.is_over_capacity(guests) {
        warnings.push(QuoteWarning::over_capacity(
            &accommodation_type.name,
            guests,
            accommodation_type.max_pax,
        ));
    }

    let grand_total = pricing.grand_total;
    Ok(build_quote(
        catalog,
        request.check_in,
        request.check_out,
        grand_total,
        pricing,
        warnings,
    ))
}

/// Validates, resolves and prices a multi-room request.
fn quote_multi_room(
    catalog: &CatalogLoader,
    request: &MultiRoomQuoteRequest,
) -> EngineResult<QuoteResponse<MultiRoomCalculation>> {
    request.validate()?;

    let rooms = request.room_entries(catalog)?;
    let room_addons = request.room_addon_selections(catalog)?;
    let group_addons = request.group_addon_selections(catalog)?;

    let pricing = calculate_multi_room_price(
        request.check_in,
        request.check_out,
        &rooms,
        catalog.rate_adjustments(),
        &group_addons,
        &room_addons,
    );

    let warnings = rooms
        .iter()
        .filter(|room| room.accommodation_type.is_over_capacity(room.total_guests()))
        .map(|room| {
            QuoteWarning::over_capacity(
                &format!("Room '{}'", room.room_id),
                room.total_guests(),
                room.accommodation_type.max_pax,
            )
        })
        .collect();

    let grand_total = pricing.totals.grand_total;
    Ok(build_quote(
        catalog,
        request.check_in,
        request.check_out,
        grand_total,
        pricing,
        warnings,
    ))
}

fn adjusted_nights(nights: &[NightBreakdown]) -> usize {
    nights.iter().filter(|night| night.is_adjusted()).count()
}

fn build_quote<T>(
    catalog: &CatalogLoader,
    check_in: NaiveDate,
    check_out: NaiveDate,
    grand_total: Decimal,
    pricing: T,
    warnings: Vec<QuoteWarning>,
) -> QuoteResponse<T> {
    let resort = catalog.resort();
    QuoteResponse {
        quote_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        resort_code: resort.code.clone(),
        check_in,
        check_out,
        formatted_grand_total: resort.currency.format(grand_total),
        pricing,
        warnings,
    }
}

/// Maps a JSON extraction failure to an API error.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn json_error(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
