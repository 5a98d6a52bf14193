// region:    --- Imports
use crate::auction::commands::{
    handle_create_auction as command_handle_create_auction, CreateAuctionCommand,
};
use crate::auction_store::AuctionStore;
use crate::config::AppConfig;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Command Handlers

/// 경매 생성 요청 처리
pub async fn handle_create_auction(
    State((store, config)): State<(Arc<dyn AuctionStore>, AppConfig)>,
    Json(cmd): Json<CreateAuctionCommand>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 생성 요청 처리 시작: {:?}", "Command", cmd);

    // 경매 생성 처리 (종료 시각은 설정된 유지 시간으로 계산)
    match command_handle_create_auction(cmd, store.as_ref(), config.auction_duration).await {
        Ok(auction) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({
                "message": "경매가 성공적으로 생성되었습니다.",
                "id": auction.id,
                "end_timestamp": auction.end_timestamp.timestamp()
            })),
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

// endregion: --- Command Handlers
