// region:    --- Imports
use super::{queries, AuctionStore};
use crate::auction::model::{Auction, AuctionStatus, Item};
use crate::database::DatabaseManager;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
// endregion: --- Imports

// region:    --- Row Model
/// 경매 + 상품 조인 결과
#[derive(FromRow)]
struct AuctionRow {
    id: Uuid,
    reserve_price: i32,
    seller: String,
    winner: Option<String>,
    sold_amount: Option<i32>,
    current_high_bid: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    auction_end: Option<DateTime<Utc>>,
    status: String,
    item_id: Uuid,
    make: String,
    model: String,
    year: i32,
    color: String,
    mileage: i32,
    image_url: String,
}

impl TryFrom<AuctionRow> for Auction {
    type Error = sqlx::Error;

    fn try_from(row: AuctionRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<AuctionStatus>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Auction {
            id: row.id,
            reserve_price: row.reserve_price,
            seller: row.seller,
            winner: row.winner,
            sold_amount: row.sold_amount,
            current_high_bid: row.current_high_bid,
            created_at: row.created_at,
            updated_at: row.updated_at,
            auction_end: row.auction_end,
            status,
            item: Item {
                id: row.item_id,
                make: row.make,
                model: row.model,
                year: row.year,
                color: row.color,
                mileage: row.mileage,
                image_url: row.image_url,
            },
        })
    }
}
// endregion: --- Row Model

// region:    --- Postgres Auction Store
/// PostgreSQL 경매 저장소
pub struct PostgresAuctionStore {
    db_manager: Arc<DatabaseManager>,
}

impl PostgresAuctionStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl AuctionStore for PostgresAuctionStore {
    async fn list_auctions(&self) -> Result<Vec<Auction>, sqlx::Error> {
        info!("{:<12} --> 모든 경매 조회", "Store");
        let rows = sqlx::query_as::<_, AuctionRow>(queries::GET_ALL_AUCTIONS)
            .fetch_all(self.db_manager.pool())
            .await?;

        rows.into_iter().map(Auction::try_from).collect()
    }

    async fn find_auction(&self, id: Uuid) -> Result<Option<Auction>, sqlx::Error> {
        info!("{:<12} --> 경매 조회 id: {}", "Store", id);
        let row = sqlx::query_as::<_, AuctionRow>(queries::GET_AUCTION)
            .bind(id)
            .fetch_optional(self.db_manager.pool())
            .await?;

        row.map(Auction::try_from).transpose()
    }

    async fn insert_auction(&self, auction: &Auction) -> Result<u64, sqlx::Error> {
        info!("{:<12} --> 경매 생성 id: {}", "Store", auction.id);
        let auction = auction.clone();
        self.db_manager
            .transaction(move |tx| {
                Box::pin(async move {
                    let auction_rows = sqlx::query(queries::INSERT_AUCTION)
                        .bind(auction.id)
                        .bind(auction.reserve_price)
                        .bind(&auction.seller)
                        .bind(&auction.winner)
                        .bind(auction.sold_amount)
                        .bind(auction.current_high_bid)
                        .bind(auction.created_at)
                        .bind(auction.updated_at)
                        .bind(auction.auction_end)
                        .bind(auction.status.as_str())
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();

                    let item = &auction.item;
                    let item_rows = sqlx::query(queries::INSERT_ITEM)
                        .bind(item.id)
                        .bind(auction.id)
                        .bind(&item.make)
                        .bind(&item.model)
                        .bind(item.year)
                        .bind(&item.color)
                        .bind(item.mileage)
                        .bind(&item.image_url)
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();

                    Ok(auction_rows + item_rows)
                })
            })
            .await
    }

    async fn update_auction_item(&self, auction: &Auction) -> Result<u64, sqlx::Error> {
        info!("{:<12} --> 경매 상품 수정 id: {}", "Store", auction.id);
        let auction_id = auction.id;
        let updated_at = auction.updated_at;
        let item = auction.item.clone();
        self.db_manager
            .transaction(move |tx| {
                Box::pin(async move {
                    let item_rows = sqlx::query(queries::UPDATE_ITEM)
                        .bind(&item.make)
                        .bind(&item.model)
                        .bind(&item.color)
                        .bind(item.mileage)
                        .bind(item.year)
                        .bind(auction_id)
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();

                    let auction_rows = sqlx::query(queries::TOUCH_AUCTION)
                        .bind(updated_at)
                        .bind(auction_id)
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();

                    Ok(item_rows + auction_rows)
                })
            })
            .await
    }

    async fn delete_auction(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        info!("{:<12} --> 경매 삭제 id: {}", "Store", id);
        let result = sqlx::query(queries::DELETE_AUCTION)
            .bind(id)
            .execute(self.db_manager.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
// endregion: --- Postgres Auction Store
