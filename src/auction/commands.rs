/// 경매 생성 커맨드 처리
/// 경매는 생성 시점에 종료 시각이 확정되며, 이후 스케줄러가 자동으로 종료 처리한다.
// region:    --- Imports
use crate::auction::model::{Auction, ProductCondition};
use crate::auction_store::{AuctionStore, StoreError};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::info;

// endregion: --- Imports

// region:    --- Commands
/// 경매 생성 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateAuctionCommand {
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
}

/// 경매 생성
pub async fn handle_create_auction(
    cmd: CreateAuctionCommand,
    store: &dyn AuctionStore,
    auction_duration: Duration,
) -> Result<Auction, StoreError> {
    let auction = Auction::new(
        cmd.id,
        cmd.product_name,
        cmd.category,
        cmd.description,
        cmd.condition,
        auction_duration,
    );

    // 저장 실패는 해당 생성 요청의 실패로 호출자에게 그대로 전달
    store.insert(&auction).await?;

    info!(
        "{:<12} --> 경매 생성 완료: id={}, 종료 시각={}",
        "Command", auction.id, auction.end_timestamp
    );
    Ok(auction)
}
// endregion: --- Commands
