//! Generation HTTP Handlers
//!
//! /api/generate-audio 保持原有前端约定的扁平响应格式
//! （{"success": ..., "audioUrl"/"error": ...} + 真实 HTTP 状态码），
//! 其余生成接口走统一 envelope。

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{
    ApplicationError, DeleteGenerationCommand, GenerateAudioCommand, ListGenerations,
};
use crate::infrastructure::http::dto::{
    ApiResponse, DeleteGenerationRequest, Empty, GenerateAudioRequest, GenerateAudioWireResponse,
    GenerationDto, ListGenerationsRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /api/generate-audio
pub async fn generate_audio(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateAudioRequest>,
) -> Response {
    let command = GenerateAudioCommand {
        script_id: req.script_id,
        text: req.text,
        voice: req.voice,
        speed: req.speed,
        temperature: req.temperature,
        model: req.model,
    };

    match state.generate_audio_handler.handle(command).await {
        Ok(result) => (
            StatusCode::OK,
            Json(GenerateAudioWireResponse::success(result)),
        )
            .into_response(),
        Err(e) => {
            let (status, message) = generation_error_response(e);
            (status, Json(GenerateAudioWireResponse::failure(message))).into_response()
        }
    }
}

/// 生成接口的错误映射
///
/// 校验错误原样透传给前端；内部错误（仓储/存储）只返回笼统信息，
/// 细节进日志
fn generation_error_response(e: ApplicationError) -> (StatusCode, String) {
    match e {
        ApplicationError::ValidationError(msg) | ApplicationError::InvalidState(msg) => {
            (StatusCode::BAD_REQUEST, msg)
        }
        e @ ApplicationError::NotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
        ApplicationError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        ApplicationError::ConfigurationError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        ApplicationError::ProviderError(msg) | ApplicationError::FetchError(msg) => {
            (StatusCode::INTERNAL_SERVER_ERROR, msg)
        }
        other => {
            tracing::error!(error = %other, "Audio generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate audio".to_string(),
            )
        }
    }
}

/// POST /api/generation/delete
pub async fn delete_generation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteGenerationRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DeleteGenerationCommand {
        generation_id: req.id,
    };

    state.delete_generation_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// POST /api/generation/list
pub async fn list_generations(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ListGenerationsRequest>,
) -> Result<Json<ApiResponse<Vec<GenerationDto>>>, ApiError> {
    let query = ListGenerations {
        script_id: req.script_id,
    };

    let result = state.list_generations_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(
        result.into_iter().map(GenerationDto::from).collect(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::Utc;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;
    use uuid::Uuid;

    use crate::application::ports::{
        AudioFetcherPort, FetchError, ScriptRecord, ScriptRepositoryPort, TtsEnginePort,
    };
    use crate::domain::script::ScriptStatus;
    use crate::infrastructure::adapters::{
        FakeTtsClient, FileAudioStorage, ReplicateTtsClient, ReplicateTtsClientConfig,
    };
    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::memory::InMemoryGenerationGuard;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteAudioGenerationRepository,
        SqliteScriptRepository,
    };

    /// 不出网的下载器
    struct StubFetcher;

    #[async_trait]
    impl AudioFetcherPort for StubFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
            Ok(vec![0x52, 0x49, 0x46, 0x46])
        }
    }

    struct TestApp {
        router: axum::Router,
        script_repo: Arc<SqliteScriptRepository>,
        tts_engine: Arc<FakeTtsClient>,
        _tmp: tempfile::TempDir,
    }

    async fn build_app(tts_engine: Arc<dyn TtsEnginePort>) -> (axum::Router, Arc<SqliteScriptRepository>, tempfile::TempDir) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let script_repo = Arc::new(SqliteScriptRepository::new(pool.clone()));
        let generation_repo = Arc::new(SqliteAudioGenerationRepository::new(pool));
        let tmp = tempfile::tempdir().unwrap();
        let storage = Arc::new(FileAudioStorage::new(tmp.path()).await.unwrap());

        let state = AppState::new(
            script_repo.clone(),
            generation_repo,
            tts_engine,
            Arc::new(StubFetcher),
            storage,
            Arc::new(InMemoryGenerationGuard::new()),
            "http://localhost:5070".to_string(),
        );

        let router = create_routes().with_state(Arc::new(state));
        (router, script_repo, tmp)
    }

    async fn setup() -> TestApp {
        let tts_engine = Arc::new(FakeTtsClient::with_defaults());
        let (router, script_repo, tmp) = build_app(tts_engine.clone()).await;
        TestApp {
            router,
            script_repo,
            tts_engine,
            _tmp: tmp,
        }
    }

    async fn insert_script(repo: &SqliteScriptRepository) -> Uuid {
        let now = Utc::now();
        let record = ScriptRecord {
            id: Uuid::new_v4(),
            name: "Test Script".to_string(),
            content: "Hello".to_string(),
            tags: vec![],
            status: ScriptStatus::Draft,
            created_at: now,
            updated_at: now,
        };
        repo.save(&record).await.unwrap();
        record.id
    }

    async fn post_generate(router: axum::Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate-audio")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_generate_audio_success() {
        let app = setup().await;
        let script_id = insert_script(&app.script_repo).await;

        let (status, body) = post_generate(
            app.router,
            json!({"scriptId": script_id, "text": "Hello", "model": "jaaari/kokoro-82m"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        let audio_url = body["audioUrl"].as_str().unwrap();
        assert!(audio_url.starts_with("http://localhost:5070/api/audio/"));
        // generationId 指向落库的生成记录，音频 URL 以它结尾
        let generation_id = body["generationId"].as_str().unwrap();
        assert!(Uuid::parse_str(generation_id).is_ok());
        assert!(audio_url.ends_with(generation_id));
        assert_eq!(app.tts_engine.call_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_audio_empty_text_rejected_before_engine() {
        let app = setup().await;
        let script_id = insert_script(&app.script_repo).await;

        let (status, body) = post_generate(
            app.router,
            json!({"scriptId": script_id, "text": "   "}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Text content is required"));
        assert_eq!(app.tts_engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_audio_unknown_model() {
        let app = setup().await;
        let script_id = insert_script(&app.script_repo).await;

        let (status, body) = post_generate(
            app.router,
            json!({"scriptId": script_id, "text": "Hello", "model": "bark"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Unsupported model"));
    }

    #[tokio::test]
    async fn test_generate_audio_speed_out_of_range() {
        let app = setup().await;
        let script_id = insert_script(&app.script_repo).await;

        let (status, body) = post_generate(
            app.router,
            json!({"scriptId": script_id, "text": "Hello", "speed": 3.0}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Speed must be between 0.5 and 2.0"));
    }

    #[tokio::test]
    async fn test_generate_audio_unknown_script_is_404() {
        let app = setup().await;

        let (status, body) = post_generate(
            app.router,
            json!({"scriptId": Uuid::new_v4(), "text": "Hello"}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn test_generate_audio_missing_token_is_500() {
        // 真实 Replicate 客户端 + 无凭证：凭证检查先于外呼，base_url 不可达也无妨
        let engine = ReplicateTtsClient::new(ReplicateTtsClientConfig {
            api_token: None,
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        let (router, script_repo, _tmp) = build_app(Arc::new(engine)).await;
        let script_id = insert_script(&script_repo).await;

        let (status, body) = post_generate(
            router,
            json!({"scriptId": script_id, "text": "Hello"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], json!("Replicate API token not configured"));
    }

    #[tokio::test]
    async fn test_generation_list_after_generate() {
        let app = setup().await;
        let script_id = insert_script(&app.script_repo).await;

        let (status, _) = post_generate(
            app.router.clone(),
            json!({"scriptId": script_id, "text": "Hello", "voice": "am_adam"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let request = Request::builder()
            .method("POST")
            .uri("/api/generation/list")
            .header("content-type", "application/json")
            .body(Body::from(json!({"script_id": script_id}).to_string()))
            .unwrap();

        let response = app.router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["errno"], json!(0));
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["voice_used"], json!("am_adam"));
    }
}
