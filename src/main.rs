// region:    --- Imports
use crate::auction_store::{AuctionStore, PostgresAuctionStore};
use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::scheduler::ExpirationScheduler;
use axum::{routing::post, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Modules
mod auction;
mod auction_store;
mod config;
mod database;
mod handlers;
mod scheduler;

// endregion: --- Modules

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드 (프로세스 시작 시 1회)
    let config = AppConfig::from_env();
    info!("{:<12} --> 설정 로드 완료: {:?}", "Main", config);

    // DatabaseManager 생성
    let db_manager = Arc::new(DatabaseManager::new().await);

    // 데이터베이스 초기화
    if let Err(e) = db_manager.initialize_database().await {
        error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 데이터베이스 초기화 성공", "Main");

    // 경매 저장소 생성
    let store: Arc<dyn AuctionStore> = Arc::new(PostgresAuctionStore::new(db_manager.get_pool()));

    // 만료 경매 자동 종료 스케줄러 시작
    let cancellation_token = CancellationToken::new();
    let scheduler = ExpirationScheduler::new(Arc::clone(&store), config.check_interval);
    scheduler.start(cancellation_token.clone()).await;

    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = Router::new()
        .route("/auction", post(handlers::handle_create_auction))
        .layer(cors)
        .with_state((store, config));

    // 리스너 생성(로컬 호스트의 3000번 포트를 사용)
    let listener = TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr().unwrap()
    );

    // 서버 실행 (종료 시그널 수신 시 스케줄러도 함께 정지)
    let shutdown_token = cancellation_token.clone();
    if let Err(err) = axum::serve(listener, routes_all.into_make_service())
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("{:<12} --> 종료 시그널 대기 실패: {:?}", "Main", e);
            }
            info!("{:<12} --> 종료 시그널 수신, 스케줄러 정지", "Main");
            shutdown_token.cancel();
        })
        .await
    {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
