// region:    --- Imports
use crate::handlers;
use crate::store::AuctionStore;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
// endregion: --- Imports

/// 요청 바디 최대 크기 (1MB)
const MAX_BODY_BYTES: usize = 1024 * 1024;

// region:    --- App State
/// 요청 간 공유 상태
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn AuctionStore>,
    placeholder_seller: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn AuctionStore>, placeholder_seller: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            placeholder_seller: placeholder_seller.into(),
        }
    }

    pub fn store(&self) -> &dyn AuctionStore {
        self.store.as_ref()
    }

    pub fn placeholder_seller(&self) -> &str {
        &self.placeholder_seller
    }
}
// endregion: --- App State

// region:    --- Router
/// 라우터 설정
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/auctions",
            get(handlers::list_auctions).post(handlers::create_auction),
        )
        .route(
            "/api/auctions/:id",
            get(handlers::get_auction)
                .put(handlers::update_auction)
                .delete(handlers::delete_auction),
        )
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
// endregion: --- Router
