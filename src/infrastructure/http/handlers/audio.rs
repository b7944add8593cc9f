//! Audio Handlers
//!
//! 音频文件下载接口。直接服务字节流，状态码为真实 HTTP 语义
//! （浏览器 <audio> 标签依赖 404 判断资源缺失）

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{ApplicationError, GetAudioQuery};
use crate::infrastructure::http::state::AppState;

/// GET /api/audio/{generation_id}
pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(generation_id): Path<Uuid>,
) -> Response {
    let query = GetAudioQuery { generation_id };

    match state.get_audio_handler.handle(query).await {
        Ok(result) => {
            let len = result.data.len();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "audio/wav")
                .header(header::CONTENT_LENGTH, len)
                .body(Body::from(result.data))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        Err(ApplicationError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, "Audio not found").into_response()
        }
        Err(e) => {
            tracing::error!(generation_id = %generation_id, error = %e, "Failed to read audio");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    use crate::application::ports::{
        AudioGenerationRecord, AudioGenerationRepositoryPort, AudioStoragePort, ScriptRecord,
        ScriptRepositoryPort, TtsEnginePort,
    };
    use crate::domain::script::ScriptStatus;
    use crate::infrastructure::adapters::{FakeTtsClient, FileAudioStorage, HttpAudioFetcher};
    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::memory::InMemoryGenerationGuard;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteAudioGenerationRepository,
        SqliteScriptRepository,
    };

    async fn setup() -> (
        Router,
        Arc<SqliteScriptRepository>,
        Arc<SqliteAudioGenerationRepository>,
        Arc<FileAudioStorage>,
        tempfile::TempDir,
    ) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let script_repo = Arc::new(SqliteScriptRepository::new(pool.clone()));
        let generation_repo = Arc::new(SqliteAudioGenerationRepository::new(pool));
        let tmp = tempfile::tempdir().unwrap();
        let storage = Arc::new(FileAudioStorage::new(tmp.path()).await.unwrap());
        let tts_engine: Arc<dyn TtsEnginePort> = Arc::new(FakeTtsClient::with_defaults());

        let state = AppState::new(
            script_repo.clone(),
            generation_repo.clone(),
            tts_engine,
            Arc::new(HttpAudioFetcher::with_defaults().unwrap()),
            storage.clone(),
            Arc::new(InMemoryGenerationGuard::new()),
            "http://localhost:5070".to_string(),
        );

        let router = create_routes().with_state(Arc::new(state));
        (router, script_repo, generation_repo, storage, tmp)
    }

    #[tokio::test]
    async fn test_get_audio_serves_stored_bytes() {
        let (router, script_repo, generation_repo, storage, _tmp) = setup().await;

        let now = chrono::Utc::now();
        let script = ScriptRecord {
            id: Uuid::new_v4(),
            name: "s".to_string(),
            content: String::new(),
            tags: vec![],
            status: ScriptStatus::Draft,
            created_at: now,
            updated_at: now,
        };
        script_repo.save(&script).await.unwrap();

        let generation_id = Uuid::new_v4();
        storage
            .save_audio(generation_id, &[1, 2, 3, 4])
            .await
            .unwrap();
        generation_repo
            .save(&AudioGenerationRecord {
                id: generation_id,
                script_id: script.id,
                file_url: format!("http://localhost:5070/api/audio/{}", generation_id),
                file_size: Some(4),
                duration_ms: None,
                voice_used: "af_nicole".to_string(),
                speed: 1.0,
                temperature: 0.7,
                model_used: "kokoro".to_string(),
                created_at: now,
            })
            .await
            .unwrap();

        let request = Request::builder()
            .uri(format!("/api/audio/{}", generation_id))
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "audio/wav"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes.as_ref(), &[1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_get_audio_unknown_id_is_404() {
        let (router, _, _, _, _tmp) = setup().await;

        let request = Request::builder()
            .uri(format!("/api/audio/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
