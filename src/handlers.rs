// region:    --- Imports
use crate::app::AppState;
use crate::auction::dto::{AuctionDto, CreateAuctionDto, UpdateAuctionDto};
use crate::auth::{authorize_seller, Principal};
use crate::error::{ensure_saved, ApiError};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;
// endregion: --- Imports

/// 경매 리소스 경로
pub const AUCTIONS_PATH: &str = "/api/auctions";

// region:    --- Query Handlers

/// 모든 경매 조회
pub async fn list_auctions(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuctionDto>>, ApiError> {
    info!("{:<12} --> 모든 경매 조회", "Handler");
    let auctions = state.store().list_auctions().await?;
    Ok(Json(auctions.into_iter().map(AuctionDto::from).collect()))
}

/// 경매 조회
pub async fn get_auction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AuctionDto>, ApiError> {
    info!("{:<12} --> 경매 조회 id: {}", "Handler", id);
    let auction = state
        .store()
        .find_auction(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(AuctionDto::from(auction)))
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// 경매 생성
pub async fn create_auction(
    State(state): State<AppState>,
    principal: Principal,
    Json(dto): Json<CreateAuctionDto>,
) -> Result<impl IntoResponse, ApiError> {
    info!("{:<12} --> 경매 생성 요청: {:?}", "Handler", dto);
    let auction = dto.into_auction(principal.name, Utc::now());

    ensure_saved(state.store().insert_auction(&auction).await?)?;

    let location = format!("{}/{}", AUCTIONS_PATH, auction.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AuctionDto::from(auction)),
    ))
}

/// 경매 상품 수정
pub async fn update_auction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    principal: Principal,
    Json(patch): Json<UpdateAuctionDto>,
) -> Result<StatusCode, ApiError> {
    info!("{:<12} --> 경매 수정 요청 id: {}, {:?}", "Handler", id, patch);
    let mut auction = state
        .store()
        .find_auction(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    authorize_seller(&auction, &principal)?;

    patch.apply_to(&mut auction.item);
    auction.updated_at = Utc::now();

    ensure_saved(state.store().update_auction_item(&auction).await?)?;
    Ok(StatusCode::OK)
}

/// 경매 삭제
pub async fn delete_auction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    principal: Principal,
) -> Result<StatusCode, ApiError> {
    info!("{:<12} --> 경매 삭제 요청 id: {}", "Handler", id);
    let auction = state
        .store()
        .find_auction(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    authorize_seller(&auction, &principal)?;

    ensure_saved(state.store().delete_auction(auction.id).await?)?;
    Ok(StatusCode::OK)
}

// endregion: --- Command Handlers

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
