use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;

use catalog_core::goods::{GoodUpdate, NewGood, ReprioritizeRequest};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectParams {
    project_id: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoodParams {
    id: i32,
    project_id: i32,
}

#[derive(Deserialize)]
struct PageParams {
    offset: Option<i64>,
    limit: Option<i64>,
}

#[derive(Deserialize)]
struct CreateGoodPayload {
    name: String,
}

#[derive(Deserialize)]
struct UpdateGoodPayload {
    name: String,
    description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReprioritizePayload {
    new_priority: i32,
}

async fn create_good(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ProjectParams>, QueryRejection>,
    payload: Result<Json<CreateGoodPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = params.map_err(|e| ApiError::QueryParam(e.to_string()))?;
    let Json(payload) = payload.map_err(|e| ApiError::Validation(e.to_string()))?;
    let new_good = NewGood {
        project_id: params.project_id,
        name: payload.name,
    };
    let good = state.goods_service.create_good(new_good).await?;
    Ok((StatusCode::CREATED, Json(good)))
}

async fn update_good(
    State(state): State<Arc<AppState>>,
    params: Result<Query<GoodParams>, QueryRejection>,
    payload: Result<Json<UpdateGoodPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = params.map_err(|e| ApiError::QueryParam(e.to_string()))?;
    let Json(payload) = payload.map_err(|e| ApiError::Validation(e.to_string()))?;
    let update = GoodUpdate {
        id: params.id,
        project_id: params.project_id,
        name: payload.name,
        description: payload.description,
    };
    let good = state.goods_service.update_good(update).await?;
    Ok(Json(good))
}

async fn remove_good(
    State(state): State<Arc<AppState>>,
    params: Result<Query<GoodParams>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = params.map_err(|e| ApiError::QueryParam(e.to_string()))?;
    let removed = state
        .goods_service
        .remove_good(params.id, params.project_id)
        .await?;
    Ok(Json(removed))
}

async fn reprioritize_good(
    State(state): State<Arc<AppState>>,
    params: Result<Query<GoodParams>, QueryRejection>,
    payload: Result<Json<ReprioritizePayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = params.map_err(|e| ApiError::QueryParam(e.to_string()))?;
    let Json(payload) = payload.map_err(|e| ApiError::Validation(e.to_string()))?;
    let request = ReprioritizeRequest {
        id: params.id,
        project_id: params.project_id,
        new_priority: payload.new_priority,
    };
    let result = state.goods_service.reprioritize_good(request).await?;
    Ok(Json(result))
}

async fn list_goods(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = params.map_err(|e| ApiError::QueryParam(e.to_string()))?;
    let offset = params.offset.unwrap_or(1);
    let limit = params.limit.unwrap_or(10);
    if offset < 1 || limit < 1 {
        return Err(ApiError::QueryParam(
            "offset and limit must be positive".to_string(),
        ));
    }
    let page = state.goods_service.list_goods(offset, limit).await?;
    Ok(Json(page))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/good/create", post(create_good))
        .route("/good/update", patch(update_good))
        .route("/good/remove", delete(remove_good))
        .route("/good/reprioritizy", patch(reprioritize_good))
        .route("/goods/list", get(list_goods))
}
