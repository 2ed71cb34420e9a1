use axum::{
    extract::{
        Json, Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{
    AppState,
    database::{EventEntity, EventInput},
    error::AppError,
};

use super::model::{DeleteEventResponse, EventRequest, ListQuery, MISSING_FIELDS, parse_event_id};

fn validated(
    req: Result<Json<EventRequest>, JsonRejection>,
) -> Result<EventInput, AppError> {
    match req {
        Ok(Json(req)) => req.into_input(),
        Err(e) => {
            tracing::debug!("Rejected event body: {}", e);
            Err(AppError::Validation(MISSING_FIELDS.into()))
        }
    }
}

#[axum::debug_handler]
pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<EventEntity>>, AppError> {
    // 查询串解析失败时按默认（只列未开始的活动）处理
    let query = query
        .map(|Query(pairs)| ListQuery::from_pairs(pairs))
        .unwrap_or_default();
    let events = state.events.list_events(query.include_past()).await?;
    Ok(Json(events))
}

#[axum::debug_handler]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventEntity>, AppError> {
    let id = parse_event_id(&id).ok_or(AppError::NotFound)?;
    state
        .events
        .get_event(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<AppState>,
    req: Result<Json<EventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EventEntity>), AppError> {
    let input = validated(req)?;
    let event = state.events.create_event(input).await?;
    tracing::info!("Created event {} ({})", event.id, event.title);
    Ok((StatusCode::CREATED, Json(event)))
}

#[axum::debug_handler]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    req: Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<EventEntity>, AppError> {
    let id = parse_event_id(&id).ok_or(AppError::NotFound)?;
    let input = validated(req)?;
    let event = state
        .events
        .update_event(id, input)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!("Updated event {}", event.id);
    Ok(Json(event))
}

#[axum::debug_handler]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteEventResponse>, AppError> {
    let id = parse_event_id(&id).ok_or(AppError::NotFound)?;
    if !state.events.delete_event(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!("Deleted event {}", id);
    Ok(Json(DeleteEventResponse { ok: true }))
}
