//! TTS Studio - 脚本创作与语音合成系统
//!
//! - Domain: script/, generation/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, persistence, adapters

use std::sync::Arc;

use tts_studio::config::{load_config, print_config};
use tts_studio::infrastructure::adapters::{
    FileAudioStorage, HttpAudioFetcher, HttpAudioFetcherConfig, ReplicateTtsClient,
    ReplicateTtsClientConfig,
};
use tts_studio::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tts_studio::infrastructure::memory::InMemoryGenerationGuard;
use tts_studio::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteAudioGenerationRepository,
    SqliteScriptRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},tts_studio={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("TTS Studio - 脚本创作与语音合成系统");
    print_config(&config);

    // 确保数据目录存在
    tokio::fs::create_dir_all(&config.storage.audio_dir).await?;
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let script_repo = Arc::new(SqliteScriptRepository::new(pool.clone()));
    let generation_repo = Arc::new(SqliteAudioGenerationRepository::new(pool.clone()));

    // 创建 Replicate TTS 引擎
    // 凭证允许缺失：启动照常，生成请求时报错（便于无凭证调试其余功能）
    let tts_engine = Arc::new(ReplicateTtsClient::new(ReplicateTtsClientConfig {
        api_token: config.replicate.api_token.clone(),
        base_url: config.replicate.base_url.clone(),
        timeout_secs: config.replicate.timeout_secs,
    })?);
    if config.replicate.api_token.is_none() {
        tracing::warn!("REPLICATE_API_TOKEN not set, audio generation will be rejected");
    }

    // 创建音频下载器和文件存储
    let audio_fetcher = Arc::new(HttpAudioFetcher::new(HttpAudioFetcherConfig::default())?);
    let audio_storage = Arc::new(FileAudioStorage::new(&config.storage.audio_dir).await?);

    // 创建生成锁
    let generation_guard = Arc::new(InMemoryGenerationGuard::new());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        script_repo,
        generation_repo,
        tts_engine,
        audio_fetcher,
        audio_storage,
        generation_guard,
        config.server.public_base_url(),
    );

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
