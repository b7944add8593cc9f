//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{
    CreateScriptResponse, GenerateAudioResponse, GenerationResponse, ScriptDetailResponse,
    ScriptSummaryResponse, UpdateScriptResponse,
};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }

    /// 错误响应
    #[allow(dead_code)]
    pub fn error(errno: i32, error: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

// ============================================================================
// Script DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateScriptRequest {
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateScriptRequest {
    pub id: Uuid,
    pub name: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteScriptRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct GetScriptRequest {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ScriptCreatedDto {
    pub id: Uuid,
    pub name: String,
    pub status: String,
}

impl From<CreateScriptResponse> for ScriptCreatedDto {
    fn from(r: CreateScriptResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            status: r.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScriptUpdatedDto {
    pub id: Uuid,
    pub status: String,
    pub updated_at: String,
}

impl From<UpdateScriptResponse> for ScriptUpdatedDto {
    fn from(r: UpdateScriptResponse) -> Self {
        Self {
            id: r.id,
            status: r.status.as_str().to_string(),
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScriptSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub tags: Vec<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ScriptSummaryResponse> for ScriptSummaryDto {
    fn from(r: ScriptSummaryResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            tags: r.tags,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScriptDetailDto {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub tags: Vec<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub generations: Vec<GenerationDto>,
}

impl From<ScriptDetailResponse> for ScriptDetailDto {
    fn from(r: ScriptDetailResponse) -> Self {
        Self {
            id: r.id,
            name: r.name,
            content: r.content,
            tags: r.tags,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
            generations: r.generations.into_iter().map(GenerationDto::from).collect(),
        }
    }
}

// ============================================================================
// Generation DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GenerationDto {
    pub id: Uuid,
    pub file_url: String,
    pub file_size: Option<u64>,
    pub duration_ms: Option<u32>,
    pub voice_used: String,
    pub speed: f64,
    pub temperature: f64,
    pub model_used: String,
    pub created_at: String,
}

impl From<GenerationResponse> for GenerationDto {
    fn from(r: GenerationResponse) -> Self {
        Self {
            id: r.id,
            file_url: r.file_url,
            file_size: r.file_size,
            duration_ms: r.duration_ms,
            voice_used: r.voice_used,
            speed: r.speed,
            temperature: r.temperature,
            model_used: r.model_used,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteGenerationRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ListGenerationsRequest {
    pub script_id: Uuid,
}

// ============================================================================
// 生成接口（保持原有前端约定的扁平格式，不走统一 envelope）
// ============================================================================

/// POST /api/generate-audio 请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudioRequest {
    pub script_id: Uuid,
    pub text: String,
    pub voice: Option<String>,
    pub speed: Option<f64>,
    pub temperature: Option<f64>,
    pub model: Option<String>,
}

/// POST /api/generate-audio 响应体
///
/// 成功: {"success": true, "audioUrl": "..."}
/// 失败: {"success": false, "error": "..."}（配合真实 HTTP 状态码）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudioWireResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateAudioWireResponse {
    pub fn success(r: GenerateAudioResponse) -> Self {
        Self {
            success: true,
            audio_url: Some(r.audio_url),
            generation_id: Some(r.generation_id),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            audio_url: None,
            generation_id: None,
            error: Some(error.into()),
        }
    }
}
