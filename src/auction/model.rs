use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// region:    --- Auction Status
/// 경매 상태
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuctionStatus {
    #[default]
    Live,
    Finished,
    ReserveNotMet,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Live => "Live",
            AuctionStatus::Finished => "Finished",
            AuctionStatus::ReserveNotMet => "ReserveNotMet",
        }
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown auction status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for AuctionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Live" => Ok(AuctionStatus::Live),
            "Finished" => Ok(AuctionStatus::Finished),
            "ReserveNotMet" => Ok(AuctionStatus::ReserveNotMet),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
// endregion: --- Auction Status

// region:    --- Entities
/// 경매 모델
#[derive(Debug, Clone, PartialEq)]
pub struct Auction {
    pub id: Uuid,
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: Option<DateTime<Utc>>,
    pub status: AuctionStatus,
    pub item: Item,
}

/// 상품 모델, 경매에 종속된다
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}
// endregion: --- Entities

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_its_own_name() {
        for status in [
            AuctionStatus::Live,
            AuctionStatus::Finished,
            AuctionStatus::ReserveNotMet,
        ] {
            assert_eq!(status.as_str().parse::<AuctionStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "Cancelled".parse::<AuctionStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown auction status: Cancelled");
    }

    #[test]
    fn new_auctions_default_to_live() {
        assert_eq!(AuctionStatus::default(), AuctionStatus::Live);
    }
}
