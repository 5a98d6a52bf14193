use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// 경매 상태 (ACTIVE -> COMPLETED 단방향 전환만 존재)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuctionStatus {
    Active,
    Completed,
}

impl AuctionStatus {
    /// 저장소에 기록되는 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Active => "ACTIVE",
            AuctionStatus::Completed => "COMPLETED",
        }
    }
}

// 상품 상태
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

impl ProductCondition {
    /// 저장소에 기록되는 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCondition::New => "NEW",
            ProductCondition::Used => "USED",
            ProductCondition::Refurbished => "REFURBISHED",
        }
    }
}

// 경매 모델
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Auction {
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
    pub status: AuctionStatus,
    pub timestamp: DateTime<Utc>,
    pub end_timestamp: DateTime<Utc>,
}

impl Auction {
    /// 경매 생성 (상태는 ACTIVE로 고정, 종료 시각은 현재 시각 + 유지 시간)
    pub fn new(
        id: String,
        product_name: String,
        category: String,
        description: String,
        condition: ProductCondition,
        duration: Duration,
    ) -> Self {
        let timestamp = Utc::now();
        Auction {
            id,
            product_name,
            category,
            description,
            condition,
            status: AuctionStatus::Active,
            timestamp,
            end_timestamp: timestamp + duration,
        }
    }
}
