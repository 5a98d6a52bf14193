/// 만료 경매 자동 종료 스케줄러
/// 설정된 주기마다 저장소에 만료 경매 일괄 종료를 요청한다.
/// 스캔 실패는 다음 틱에서 자동으로 재시도되므로 루프를 중단하지 않는다.
// region:    --- Imports
use crate::auction_store::AuctionStore;
use chrono::Utc;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Expiration Scheduler
/// 만료 경매 종료 스케줄러
pub struct ExpirationScheduler {
    store: Arc<dyn AuctionStore>,
    check_interval: Duration,
}

/// 만료 경매 종료 스케줄러 생성
impl ExpirationScheduler {
    pub fn new(store: Arc<dyn AuctionStore>, check_interval: Duration) -> Self {
        ExpirationScheduler {
            store,
            check_interval,
        }
    }

    /// 스케줄러 시작
    /// 호출자를 블로킹하지 않으며, 취소 토큰이 취소될 때까지 하나의 루프를 돈다.
    pub async fn start(&self, cancellation_token: CancellationToken) {
        let store = Arc::clone(&self.store);
        let check_interval = self.check_interval;
        tokio::spawn(async move {
            info!(
                "{:<12} --> 만료 경매 감시 시작: 주기 {:?}",
                "Scheduler", check_interval
            );
            loop {
                // 다음 틱까지 대기 (대기 중에도 취소 가능)
                tokio::select! {
                    _ = cancellation_token.cancelled() => break,
                    _ = sleep(check_interval) => {}
                }

                let now = Utc::now();

                // 만료 경매 일괄 종료 (저장소 호출 중에도 취소 가능)
                tokio::select! {
                    _ = cancellation_token.cancelled() => break,
                    result = store.close_expired(now) => match result {
                        Ok(0) => {}
                        Ok(count) => info!(
                            "{:<12} --> 만료 경매 {}건 자동 종료",
                            "Scheduler", count
                        ),
                        Err(e) => error!(
                            "{:<12} --> 만료 경매 종료 중 오류 발생: {:?}",
                            "Scheduler", e
                        ),
                    },
                }
            }
            info!("{:<12} --> 만료 경매 감시 종료", "Scheduler");
        });
    }
}
// endregion: --- Expiration Scheduler
