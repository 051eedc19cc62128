//! Radiodeck - 电台直播播放服务

use std::sync::Arc;

use radiodeck::application::ports::{MediaBackendPort, StationConfigPort};
use radiodeck::application::AudioSession;
use radiodeck::config::{load_config, print_config, AppConfig, MediaBackendKind};
use radiodeck::infrastructure::adapters::{
    FakeMediaBackend, HttpStationClient, HttpStationClientConfig, HttpStreamBackend,
    HttpStreamBackendConfig,
};
use radiodeck::infrastructure::events::EventPublisher;
use radiodeck::infrastructure::http::{AppState, HttpServer, ServerConfig};
use radiodeck::infrastructure::persistence::{SledPreferenceConfig, SledPreferenceStore};
use tokio::sync::mpsc;

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},radiodeck={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Radiodeck - 电台直播播放服务");
    print_config(&config);

    if let Some(parent) = std::path::Path::new(&config.storage.prefs_path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 偏好存储
    let preferences = Arc::new(SledPreferenceStore::new(&SledPreferenceConfig {
        db_path: config.storage.prefs_path.clone(),
    })?);

    // 电台配置客户端
    let station_config = HttpStationClientConfig::new(&config.station.base_url)
        .with_path(&config.station.path)
        .with_timeout(config.station.timeout_secs);
    let station: Arc<dyn StationConfigPort> = Arc::new(HttpStationClient::new(station_config)?);

    // 媒体后端，外部事件经由通道回到会话
    let (media_tx, media_rx) = mpsc::channel(64);
    let media: Arc<dyn MediaBackendPort> = match config.player.backend {
        MediaBackendKind::Stream => Arc::new(HttpStreamBackend::new(
            HttpStreamBackendConfig {
                connect_timeout_secs: config.player.connect_timeout_secs,
            },
            media_tx,
        )?),
        MediaBackendKind::Fake => Arc::new(FakeMediaBackend::with_defaults()),
    };

    let event_publisher = EventPublisher::new().arc();

    let session = AudioSession::new(station, media, preferences, event_publisher.clone()).arc();

    tokio::spawn(session.clone().run_media_events(media_rx));

    // 启动时解析一次流地址，失败只记录，不阻塞服务启动
    {
        let session = session.clone();
        tokio::spawn(async move {
            session.resolve_stream().await;
        });
    }

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(session, event_publisher);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
