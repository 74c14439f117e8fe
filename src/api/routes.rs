//! API route definitions

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::services::ServeDir;

use super::shared::AppStateHandle;
use super::types::*;
use crate::booking::{validate, BookingRequest, BookingResponse};
use crate::brand::{BrandSettings, BrandSettingsError, BrandSettingsUpdate};
use crate::catalog::{ClothingCategory, ClothingItem, ClothingType};
use crate::measurements::{Gender, MeasurementStore};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn error_response(error: ApiError) -> (StatusCode, Json<ApiError>) {
    let status = StatusCode::from_u16(error.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(error))
}

fn json_rejection(rejection: JsonRejection) -> (StatusCode, Json<ApiError>) {
    error_response(ApiError::bad_request(rejection.body_text()))
}

/// Create the API router with all endpoints and static asset mounts
pub fn create_router(state: AppStateHandle) -> Router {
    let assets = state.asset_dir().clone();

    Router::new()
        // Status
        .route("/api/status", get(status_handler))
        // Booking intake
        .route("/api/booking", post(booking_handler))
        // Catalog
        .route("/api/clothing", get(list_clothing))
        .route("/api/clothing/:id", get(get_clothing))
        .route("/api/clothing/type/:type", get(clothing_by_type))
        .route("/api/clothing/category/:category", get(clothing_by_category))
        // Brand settings
        .route("/api/brand-settings", get(get_brand_settings).put(update_brand_settings))
        .route("/api/brand-settings/reset", post(reset_brand_settings))
        // Mannequin
        .route("/api/mannequin/scale-factors", post(scale_factors_handler))
        .route("/api/mannequin/baseline/:gender", get(baseline_handler))
        // Static assets
        .nest_service("/models", ServeDir::new(assets.join("models")))
        .nest_service("/textures", ServeDir::new(assets.join("textures")))
        .nest_service("/sounds", ServeDir::new(assets.join("sounds")))
        .with_state(state)
}

// ============================================================================
// Status
// ============================================================================

async fn status_handler(State(state): State<AppStateHandle>) -> Json<StatusResponse> {
    let catalog_loaded = state.catalog().is_loaded();
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        catalog_loaded,
        mail_enabled: state.booking().mail_enabled(),
    })
}

// ============================================================================
// Booking
// ============================================================================

async fn booking_handler(
    State(state): State<AppStateHandle>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> ApiResult<BookingResponse> {
    let Json(request) = payload.map_err(json_rejection)?;
    let booking = validate(&request).map_err(|e| {
        tracing::debug!(invalid = e.fields().len(), "Booking rejected");
        error_response(ApiError::validation(e.0))
    })?;

    let outcome = state.booking().submit(&booking).await;
    Ok(Json(BookingResponse::from(&outcome)))
}

// ============================================================================
// Catalog
// ============================================================================

async fn list_clothing(State(state): State<AppStateHandle>) -> Json<Vec<ClothingItem>> {
    let items = state.catalog().all().to_vec();
    Json(items)
}

async fn get_clothing(
    State(state): State<AppStateHandle>,
    Path(id): Path<String>,
) -> ApiResult<ClothingItem> {
    let item = state.catalog().get(&id).cloned();
    item.map(Json)
        .ok_or_else(|| error_response(ApiError::not_found(format!("Clothing item {} not found", id))))
}

async fn clothing_by_type(
    State(state): State<AppStateHandle>,
    Path(tag): Path<String>,
) -> ApiResult<Vec<ClothingItem>> {
    let clothing_type: ClothingType = tag
        .parse()
        .map_err(|e: crate::catalog::UnknownTagError| error_response(ApiError::bad_request(e.to_string())))?;
    let items = state.catalog().by_type(clothing_type).into_iter().cloned().collect();
    Ok(Json(items))
}

async fn clothing_by_category(
    State(state): State<AppStateHandle>,
    Path(tag): Path<String>,
) -> ApiResult<Vec<ClothingItem>> {
    let category: ClothingCategory = tag
        .parse()
        .map_err(|e: crate::catalog::UnknownTagError| error_response(ApiError::bad_request(e.to_string())))?;
    let items = state.catalog().by_category(category).into_iter().cloned().collect();
    Ok(Json(items))
}

// ============================================================================
// Brand settings
// ============================================================================

async fn get_brand_settings(State(state): State<AppStateHandle>) -> Json<BrandSettings> {
    let settings = state.brand().settings().clone();
    Json(settings)
}

async fn update_brand_settings(
    State(state): State<AppStateHandle>,
    payload: Result<Json<BrandSettingsUpdate>, JsonRejection>,
) -> ApiResult<BrandSettings> {
    let Json(update) = payload.map_err(json_rejection)?;
    let saved = tokio::task::spawn_blocking(move || {
        let saved = state.brand_mut().update(update).map(|s| s.clone());
        saved
    })
    .await;
    brand_saved(saved)
}

async fn reset_brand_settings(State(state): State<AppStateHandle>) -> ApiResult<BrandSettings> {
    let saved = tokio::task::spawn_blocking(move || {
        let saved = state.brand_mut().reset().map(|s| s.clone());
        saved
    })
    .await;
    brand_saved(saved)
}

// File writes run on the blocking pool, holding the write lock there
fn brand_saved(
    result: Result<Result<BrandSettings, BrandSettingsError>, tokio::task::JoinError>,
) -> ApiResult<BrandSettings> {
    match result {
        Ok(Ok(settings)) => Ok(Json(settings)),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Failed to save brand settings");
            Err(error_response(ApiError::internal(e.to_string())))
        }
        Err(e) => {
            tracing::error!(error = %e, "Brand settings task failed");
            Err(error_response(ApiError::internal("Brand settings task failed")))
        }
    }
}

// ============================================================================
// Mannequin
// ============================================================================

async fn scale_factors_handler(
    State(state): State<AppStateHandle>,
    payload: Result<Json<ScaleFactorsRequest>, JsonRejection>,
) -> ApiResult<ScaleFactorsResponse> {
    let Json(request) = payload.map_err(json_rejection)?;

    let mut store = MeasurementStore::with_gender(request.gender);
    for (field, value) in request.measurements {
        store.update_measurement(field, value);
    }

    let frame = state.renderer().render(store.gender(), &store.scale_factors());
    Ok(Json(ScaleFactorsResponse {
        gender: store.gender(),
        measurements: *store.measurements(),
        scale_factors: store.scale_factors(),
        asset: frame.asset,
        deformation: frame.report,
    }))
}

async fn baseline_handler(Path(gender): Path<String>) -> ApiResult<BaselineResponse> {
    Gender::from_name(&gender)
        .map(|g| Json(BaselineResponse::for_gender(g)))
        .ok_or_else(|| error_response(ApiError::bad_request(format!("Unknown gender '{}'", gender))))
}
