/// 환경 변수 기반 설정
/// 프로세스 시작 시 1회 읽어 각 컴포넌트에 전달한다.
/// 잘못된 값은 기본값으로 대체하고 오류 로그만 남긴다 (호출자에게 실패를 전파하지 않음).
// region:    --- Imports
use std::env;
use tracing::error;

// endregion: --- Imports

// region:    --- App Config
/// 경매 유지 시간 기본값 (분)
pub const DEFAULT_AUCTION_DURATION_MINUTES: i64 = 5;
/// 경매 유지 시간 상한 (1년, 분). 초과 값은 종료 시각 계산이 안전하지 않아 기본값으로 대체한다.
pub const MAX_AUCTION_DURATION_MINUTES: i64 = 525_600;
/// 만료 검사 주기 기본값 (초)
pub const DEFAULT_CHECK_INTERVAL_SECONDS: u64 = 10;
/// 만료 검사 주기 상한 (1일, 초)
pub const MAX_CHECK_INTERVAL_SECONDS: u64 = 86_400;

/// 서비스 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 생성 시각에 더해 종료 시각을 계산하는 경매 유지 시간
    pub auction_duration: chrono::Duration,
    /// 만료 경매 스캔 주기
    pub check_interval: std::time::Duration,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Self {
        AppConfig {
            auction_duration: parse_auction_duration(env::var("AUCTION_DURATION_MINUTES").ok()),
            check_interval: parse_check_interval(env::var("AUCTION_CHECK_INTERVAL_SECONDS").ok()),
        }
    }
}

/// 경매 유지 시간 파싱 (0분 이상 상한 이하 유효, 그 외에는 기본값 사용)
pub fn parse_auction_duration(raw: Option<String>) -> chrono::Duration {
    let minutes = match raw {
        None => DEFAULT_AUCTION_DURATION_MINUTES,
        Some(value) => match value.parse::<i64>() {
            Ok(minutes) if minutes >= 0 && minutes <= MAX_AUCTION_DURATION_MINUTES => minutes,
            _ => {
                error!(
                    "{:<12} --> AUCTION_DURATION_MINUTES 값이 잘못되어 기본값 {}분을 사용합니다: {:?}",
                    "Config", DEFAULT_AUCTION_DURATION_MINUTES, value
                );
                DEFAULT_AUCTION_DURATION_MINUTES
            }
        },
    };
    chrono::Duration::minutes(minutes)
}

/// 만료 검사 주기 파싱 (1초 이상 상한 이하 유효, 그 외에는 기본값 사용)
pub fn parse_check_interval(raw: Option<String>) -> std::time::Duration {
    let seconds = match raw {
        None => DEFAULT_CHECK_INTERVAL_SECONDS,
        Some(value) => match value.parse::<u64>() {
            Ok(seconds) if seconds > 0 && seconds <= MAX_CHECK_INTERVAL_SECONDS => seconds,
            _ => {
                error!(
                    "{:<12} --> AUCTION_CHECK_INTERVAL_SECONDS 값이 잘못되어 기본값 {}초를 사용합니다: {:?}",
                    "Config", DEFAULT_CHECK_INTERVAL_SECONDS, value
                );
                DEFAULT_CHECK_INTERVAL_SECONDS
            }
        },
    };
    std::time::Duration::from_secs(seconds)
}
// endregion: --- App Config
