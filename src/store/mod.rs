// region:    --- Imports
use crate::auction::model::Auction;
use async_trait::async_trait;
use uuid::Uuid;

mod postgres;
pub mod queries;

pub use postgres::PostgresAuctionStore;
// endregion: --- Imports

// region:    --- Auction Store Trait
/// 경매 저장소 트레이트
///
/// 쓰기 메서드는 영향받은 행 수를 반환한다. 0 이면 저장 실패로 본다.
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// 모든 경매 조회, 상품 제조사 오름차순
    async fn list_auctions(&self) -> Result<Vec<Auction>, sqlx::Error>;

    async fn find_auction(&self, id: Uuid) -> Result<Option<Auction>, sqlx::Error>;

    /// 경매와 상품을 함께 저장
    async fn insert_auction(&self, auction: &Auction) -> Result<u64, sqlx::Error>;

    /// 상품 필드 저장
    async fn update_auction_item(&self, auction: &Auction) -> Result<u64, sqlx::Error>;

    async fn delete_auction(&self, id: Uuid) -> Result<u64, sqlx::Error>;
}
// endregion: --- Auction Store Trait
