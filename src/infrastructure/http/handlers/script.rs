//! Script HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{CreateScript, DeleteScript, GetScript, ListScripts, UpdateScript};
use crate::infrastructure::http::dto::{
    ApiResponse, CreateScriptRequest, DeleteScriptRequest, Empty, GetScriptRequest,
    ScriptCreatedDto, ScriptDetailDto, ScriptSummaryDto, ScriptUpdatedDto, UpdateScriptRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /api/script/create
pub async fn create_script(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateScriptRequest>,
) -> Result<Json<ApiResponse<ScriptCreatedDto>>, ApiError> {
    let command = CreateScript {
        name: req.name,
        content: req.content,
        tags: req.tags,
    };

    let result = state.create_script_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(ScriptCreatedDto::from(result))))
}

/// POST /api/script/update
pub async fn update_script(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateScriptRequest>,
) -> Result<Json<ApiResponse<ScriptUpdatedDto>>, ApiError> {
    let command = UpdateScript {
        script_id: req.id,
        name: req.name,
        content: req.content,
        tags: req.tags,
        status: req.status,
    };

    let result = state.update_script_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(ScriptUpdatedDto::from(result))))
}

/// POST /api/script/delete
pub async fn delete_script(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteScriptRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DeleteScript { script_id: req.id };

    state.delete_script_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// POST /api/script/get
pub async fn get_script(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetScriptRequest>,
) -> Result<Json<ApiResponse<ScriptDetailDto>>, ApiError> {
    let query = GetScript { script_id: req.id };

    let result = state.get_script_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(ScriptDetailDto::from(result))))
}

/// GET /api/script/list
pub async fn list_scripts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ScriptSummaryDto>>>, ApiError> {
    let result = state.list_scripts_handler.handle(ListScripts).await?;

    Ok(Json(ApiResponse::success(
        result.into_iter().map(ScriptSummaryDto::from).collect(),
    )))
}
