/// 경매 저장소 어댑터
/// 도메인 경매 모델과 저장소 레코드 간 변환, 단건 저장, 만료 경매 일괄 종료를 담당한다.
// region:    --- Imports
use crate::auction::model::Auction;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use std::fmt;
use std::sync::Arc;
use tracing::error;

// endregion: --- Imports

// region:    --- Store Error
/// 저장소 오류 (중복 키 충돌 포함, 이 계층에서는 한 종류로 취급)
#[derive(Debug)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "저장소 오류: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError(e.to_string())
    }
}
// endregion: --- Store Error

// region:    --- Auction Row
/// 저장소에 기록되는 경매 레코드 (타임스탬프는 epoch 초, 상태는 대문자 문자열)
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AuctionRow {
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: String,
    pub status: String,
    pub timestamp: i64,
    pub end_timestamp: i64,
}

impl AuctionRow {
    /// 도메인 경매 모델을 저장소 레코드로 변환
    pub fn from_entity(auction: &Auction) -> Self {
        AuctionRow {
            id: auction.id.clone(),
            product_name: auction.product_name.clone(),
            category: auction.category.clone(),
            description: auction.description.clone(),
            condition: auction.condition.as_str().to_string(),
            status: auction.status.as_str().to_string(),
            timestamp: auction.timestamp.timestamp(),
            end_timestamp: auction.end_timestamp.timestamp(),
        }
    }
}
// endregion: --- Auction Row

// region:    --- Auction Store
/// 경매 저장소 트레이트
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// 경매 레코드 1건 저장
    async fn insert(&self, auction: &Auction) -> Result<(), StoreError>;

    /// 종료 시각이 지난 활성 경매를 일괄 종료하고 종료 건수를 반환
    /// 실패 시 부분 적용을 가정하지 않으며, 호출자는 다음 틱에서 재시도한다.
    async fn close_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError>;
}

/// 경매 저장소 구현체
pub struct PostgresAuctionStore {
    pool: Arc<PgPool>,
}

/// 경매 저장소 생성
impl PostgresAuctionStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        PostgresAuctionStore { pool }
    }
}

/// 경매 저장소 구현체 메서드 구현
#[async_trait]
impl AuctionStore for PostgresAuctionStore {
    async fn insert(&self, auction: &Auction) -> Result<(), StoreError> {
        let row = AuctionRow::from_entity(auction);

        sqlx::query(
            "INSERT INTO auctions (id, product_name, category, description, condition, status, timestamp, end_timestamp)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&row.id)
        .bind(&row.product_name)
        .bind(&row.category)
        .bind(&row.description)
        .bind(&row.condition)
        .bind(&row.status)
        .bind(row.timestamp)
        .bind(row.end_timestamp)
        .execute(&*self.pool)
        .await
        .map_err(|e| {
            error!("{:<12} --> 경매 저장 실패: {:?}", "AuctionStore", e);
            StoreError::from(e)
        })?;

        Ok(())
    }

    async fn close_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        // 조건부 일괄 UPDATE 한 번으로 처리 (읽고-쓰기 경합 없음)
        // 스캔 조건의 end_timestamp는 저장 시 기록하는 컬럼과 동일한 이름이어야 한다
        let result = sqlx::query(
            "UPDATE auctions SET status = 'COMPLETED'
             WHERE status = 'ACTIVE' AND end_timestamp <= $1",
        )
        .bind(now.timestamp())
        .execute(&*self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(result.rows_affected())
    }
}
// endregion: --- Auction Store
