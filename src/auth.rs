//! 요청자 식별 및 판매자 권한 확인
//! 인증 서비스 연동 전까지 요청자는 설정된 판매자 이름으로 고정한다.
// region:    --- Imports
use crate::app::AppState;
use crate::auction::model::Auction;
use crate::error::ApiError;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;
use tracing::warn;
// endregion: --- Imports

// region:    --- Principal
/// 현재 요청자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
}

#[async_trait]
impl FromRequestParts<AppState> for Principal {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Principal {
            name: state.placeholder_seller().to_string(),
        })
    }
}
// endregion: --- Principal

/// 판매자 본인 확인
pub fn authorize_seller(auction: &Auction, principal: &Principal) -> Result<(), ApiError> {
    if auction.seller == principal.name {
        return Ok(());
    }
    warn!(
        "{:<12} --> 판매자 불일치 id: {}, seller: {}, requester: {}",
        "Auth", auction.id, auction.seller, principal.name
    );
    Err(ApiError::Forbidden)
}
