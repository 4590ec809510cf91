//! 경매 요청/응답 DTO 및 엔티티 매핑
// region:    --- Imports
use super::model::{Auction, AuctionStatus, Item};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
// endregion: --- Imports

// region:    --- DTOs
/// 경매 응답 (상품 필드 평탄화)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: Option<DateTime<Utc>>,
    pub seller: String,
    pub winner: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
    pub status: AuctionStatus,
    pub reserve_price: i32,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
}

/// 경매 생성 요청
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionDto {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub reserve_price: i32,
    #[serde(default)]
    pub auction_end: Option<DateTime<Utc>>,
}

/// 경매 수정 요청, 없는 필드는 기존 값 유지
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuctionDto {
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub year: Option<i32>,
}
// endregion: --- DTOs

// region:    --- Mapping
impl From<&Auction> for AuctionDto {
    fn from(auction: &Auction) -> Self {
        AuctionDto {
            id: auction.id,
            created_at: auction.created_at,
            updated_at: auction.updated_at,
            auction_end: auction.auction_end,
            seller: auction.seller.clone(),
            winner: auction.winner.clone(),
            make: auction.item.make.clone(),
            model: auction.item.model.clone(),
            year: auction.item.year,
            color: auction.item.color.clone(),
            mileage: auction.item.mileage,
            image_url: auction.item.image_url.clone(),
            status: auction.status,
            reserve_price: auction.reserve_price,
            sold_amount: auction.sold_amount,
            current_high_bid: auction.current_high_bid,
        }
    }
}

impl From<Auction> for AuctionDto {
    fn from(auction: Auction) -> Self {
        AuctionDto::from(&auction)
    }
}

impl CreateAuctionDto {
    /// 새 경매 엔티티 생성 (id 및 시간은 서버에서 부여)
    pub fn into_auction(self, seller: String, now: DateTime<Utc>) -> Auction {
        Auction {
            id: Uuid::new_v4(),
            reserve_price: self.reserve_price,
            seller,
            winner: None,
            sold_amount: None,
            current_high_bid: None,
            created_at: now,
            updated_at: now,
            auction_end: self.auction_end,
            status: AuctionStatus::Live,
            item: Item {
                id: Uuid::new_v4(),
                make: self.make,
                model: self.model,
                year: self.year,
                color: self.color,
                mileage: self.mileage,
                image_url: self.image_url,
            },
        }
    }
}

impl UpdateAuctionDto {
    /// 상품 필드에 부분 수정 적용
    pub fn apply_to(self, item: &mut Item) {
        if let Some(make) = self.make {
            item.make = make;
        }
        if let Some(model) = self.model {
            item.model = model;
        }
        if let Some(color) = self.color {
            item.color = color;
        }
        if let Some(mileage) = self.mileage {
            item.mileage = mileage;
        }
        if let Some(year) = self.year {
            item.year = year;
        }
    }
}
// endregion: --- Mapping

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ford() -> CreateAuctionDto {
        CreateAuctionDto {
            make: "Ford".to_string(),
            model: "GT".to_string(),
            year: 2020,
            color: "white".to_string(),
            mileage: 50,
            image_url: String::new(),
            reserve_price: 0,
            auction_end: None,
        }
    }

    #[test]
    fn create_dto_becomes_live_auction_for_seller() {
        let now = Utc::now();
        let auction = ford().into_auction("test".to_string(), now);

        assert_eq!(auction.seller, "test");
        assert_eq!(auction.status, AuctionStatus::Live);
        assert_eq!(auction.created_at, now);
        assert_eq!(auction.updated_at, now);
        assert_eq!(auction.item.make, "Ford");
        assert_eq!(auction.item.mileage, 50);
        assert_ne!(auction.id, auction.item.id);
    }

    #[test]
    fn create_dto_accepts_minimal_body() {
        let dto: CreateAuctionDto = serde_json::from_value(json!({
            "make": "Ford",
            "model": "GT",
            "color": "white",
            "mileage": 50,
            "year": 2020
        }))
        .unwrap();

        assert_eq!(dto.reserve_price, 0);
        assert_eq!(dto.image_url, "");
        assert!(dto.auction_end.is_none());
    }

    #[test]
    fn auction_dto_flattens_item_in_camel_case() {
        let auction = ford().into_auction("test".to_string(), Utc::now());
        let value = serde_json::to_value(AuctionDto::from(&auction)).unwrap();

        assert_eq!(value["id"], json!(auction.id));
        assert_eq!(value["make"], "Ford");
        assert_eq!(value["imageUrl"], "");
        assert_eq!(value["reservePrice"], 0);
        assert_eq!(value["status"], "Live");
        assert!(value.get("item").is_none());
    }

    #[test]
    fn update_keeps_fields_missing_from_patch() {
        let mut item = ford().into_auction("test".to_string(), Utc::now()).item;
        let patch: UpdateAuctionDto =
            serde_json::from_value(json!({ "mileage": 100, "color": null })).unwrap();

        patch.apply_to(&mut item);

        assert_eq!(item.mileage, 100);
        assert_eq!(item.color, "white");
        assert_eq!(item.make, "Ford");
        assert_eq!(item.model, "GT");
        assert_eq!(item.year, 2020);
    }

    #[test]
    fn empty_update_changes_nothing() {
        let original = ford().into_auction("test".to_string(), Utc::now()).item;
        let mut item = original.clone();

        UpdateAuctionDto::default().apply_to(&mut item);

        assert_eq!(item, original);
    }

    #[test]
    fn update_overwrites_every_given_field() {
        let mut item = ford().into_auction("test".to_string(), Utc::now()).item;
        let patch = UpdateAuctionDto {
            make: Some("Ferrari".to_string()),
            model: Some("F40".to_string()),
            color: Some("red".to_string()),
            mileage: Some(10),
            year: Some(1990),
        };

        patch.apply_to(&mut item);

        assert_eq!(item.make, "Ferrari");
        assert_eq!(item.model, "F40");
        assert_eq!(item.color, "red");
        assert_eq!(item.mileage, 10);
        assert_eq!(item.year, 1990);
    }
}
