// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;
use tracing::error;
// endregion: --- Imports

/// 저장 실패 시 응답 메시지
pub const SAVE_FAILED_MESSAGE: &str = "Could not save changes to the DB";

/// 데이터베이스 오류 응답 메시지, 상세 내용은 로그에만 남긴다
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// region:    --- Api Error
#[derive(Debug)]
pub enum ApiError {
    /// 해당 id 의 경매가 없음
    NotFound,
    /// 판매자 본인이 아님
    Forbidden,
    /// 저장 결과 영향받은 행이 없음
    PersistenceFailure,
    Database(sqlx::Error),
}

impl ApiError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, String::new()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, String::new()),
            ApiError::PersistenceFailure => {
                (StatusCode::BAD_REQUEST, SAVE_FAILED_MESSAGE.to_string())
            }
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => f.write_str("auction not found"),
            ApiError::Forbidden => f.write_str("requester is not the seller"),
            ApiError::PersistenceFailure => f.write_str(SAVE_FAILED_MESSAGE),
            ApiError::Database(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Database(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(e) = &self {
            error!("{:<12} --> 데이터베이스 오류: {:?}", "Error", e);
        }
        let (status, msg) = self.to_status_and_message();
        (status, msg).into_response()
    }
}
// endregion: --- Api Error

/// 쓰기 결과 확인, 영향받은 행이 없으면 저장 실패
pub fn ensure_saved(rows_affected: u64) -> Result<(), ApiError> {
    if rows_affected > 0 {
        Ok(())
    } else {
        Err(ApiError::PersistenceFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_kind() {
        assert_eq!(
            ApiError::NotFound.to_status_and_message().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Forbidden.to_status_and_message().0,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::PersistenceFailure.to_status_and_message(),
            (StatusCode::BAD_REQUEST, SAVE_FAILED_MESSAGE.to_string())
        );
        assert_eq!(
            ApiError::from(sqlx::Error::RowNotFound)
                .to_status_and_message()
                .0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn database_error_details_stay_out_of_the_body() {
        let err = ApiError::from(sqlx::Error::Protocol(
            "relation \"auctions\" violates not-null constraint".to_string(),
        ));

        let (status, msg) = err.to_status_and_message();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, INTERNAL_ERROR_MESSAGE);
        assert!(err.to_string().contains("not-null constraint"));
    }

    #[test]
    fn zero_rows_is_a_failed_save() {
        assert!(matches!(ensure_saved(0), Err(ApiError::PersistenceFailure)));
        assert!(ensure_saved(1).is_ok());
        assert!(ensure_saved(2).is_ok());
    }
}
