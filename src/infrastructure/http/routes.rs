//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping                 GET   健康检查
//! - /api/script/create        POST  创建脚本
//! - /api/script/update        POST  更新脚本（名称/内容/标签/状态）
//! - /api/script/delete        POST  删除脚本（级联删除生成记录和音频文件）
//! - /api/script/get           POST  获取脚本详情（含生成历史）
//! - /api/script/list          GET   列出所有脚本
//! - /api/generate-audio       POST  生成音频（校验 → Replicate 合成 → 下载 → 落盘 → 入库）
//! - /api/generation/delete    POST  删除单条生成记录
//! - /api/generation/list      POST  列出脚本的生成历史
//! - /api/audio/{id}           GET   下载生成的音频文件

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/script", script_routes())
        .route("/generate-audio", post(handlers::generate_audio))
        .nest("/generation", generation_routes())
        .route("/audio/:generation_id", get(handlers::get_audio))
}

/// Script 路由
fn script_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_script))
        .route("/update", post(handlers::update_script))
        .route("/delete", post(handlers::delete_script))
        .route("/get", post(handlers::get_script))
        .route("/list", get(handlers::list_scripts))
}

/// Generation 路由
fn generation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/delete", post(handlers::delete_generation))
        .route("/list", post(handlers::list_generations))
}
