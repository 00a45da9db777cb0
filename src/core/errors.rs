//! # Application Error Handling System
//!
//! 지출(expense) API 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자만으로 HTTP 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! 이 API는 모든 실패를 `400 Bad Request`로 응답합니다.
//! 401/403/404/500의 구분은 하지 않으며, 응답 본문의 필드로만 구분합니다.
//!
//! | AppError | 응답 본문 |
//! |----------|-----------|
//! | `MissingUserId` | `{"error": "Invalid token, user id not exist"}` |
//! | `MissingParameter` | `{"message": "parameter event_id not exist"}` |
//! | `BindingError` | `{"message": "<extractor 에러 메시지>"}` |
//! | `ValidationError` | `{"message": "<검증 메시지>"}` |
//! | `NotFound` | `{"message": "record not found"}` |
//! | `DatabaseError` / `InternalError` | `{"message": "<일반화된 메시지>"}` |
//!
//! 데이터베이스/내부 에러의 상세 내용은 로그에만 남기고 클라이언트에게는 노출하지 않습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_expense(&self, request: &GetExpense) -> AppResult<ExpenseResponse> {
//!     let expense = self.expense_repo
//!         .find_one(&request.user_id, &request.event_id)
//!         .await?
//!         .ok_or(AppError::NotFound)?;
//!
//!     Ok(ExpenseResponse::from(expense))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 클라이언트에게 노출되는 내부 오류 메시지
const INTERNAL_ERROR_MESSAGE: &str = "요청을 처리하는 중 오류가 발생했습니다";

/// 애플리케이션 전역 에러 타입
///
/// 요청 파싱 단계의 에러(`MissingUserId`, `MissingParameter`, `BindingError`)와
/// 서비스 계층의 에러(`ValidationError`, `NotFound`, `DatabaseError`, `InternalError`)를
/// 하나의 열거형으로 표현합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// `user_id` 헤더가 없거나 비어 있음
    ///
    /// 신원 정보가 없으므로 서비스 호출 전에 즉시 거부됩니다.
    #[error("Invalid token, user id not exist")]
    MissingUserId,

    /// 필수 쿼리 파라미터 누락
    #[error("parameter {0} not exist")]
    MissingParameter(&'static str),

    /// 요청 본문/쿼리 바인딩 실패
    ///
    /// extractor가 돌려준 메시지를 그대로 담습니다.
    #[error("{0}")]
    BindingError(String),

    /// 입력값 검증 에러
    #[error("{0}")]
    ValidationError(String),

    /// 요청한 지출 기록이 존재하지 않음
    #[error("record not found")]
    NotFound,

    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지를 반환합니다.
    ///
    /// 데이터베이스/내부 에러는 원본 메시지 대신 일반화된 문구를 돌려줍니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 신원 누락은 `error` 필드로, 그 외의 모든 에러는 `message` 필드로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::MissingUserId => serde_json::json!({ "error": self.to_string() }),
            _ => serde_json::json!({ "message": self.client_message() }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// MongoDB 드라이버 에러처럼 `Display`만 구현된 에러에 컨텍스트를 붙여
/// `AppError::DatabaseError`로 변환합니다.
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let result = collection.insert_one(&expense).await
///     .context("지출 저장 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::DatabaseError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::DatabaseError(format!("{}: {}", f(), e)))
    }
}
