//! # Expense HTTP Handlers
//!
//! 지출 API의 HTTP 경계입니다. 헤더/쿼리/본문에서 요청 구조체를 조립하고,
//! 주입된 [`ExpenseService`]를 호출한 뒤 결과를 JSON으로 돌려줍니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 핸들러 | 입력 |
//! |--------|------|--------|------|
//! | `POST` | `/expense` | [`ExpenseController::create_expense`] | JSON/form 본문 |
//! | `PUT` | `/expense` | [`ExpenseController::update_expense`] | JSON/form 본문 |
//! | `DELETE` | `/expense` | [`ExpenseController::delete_expense`] | `event_id` |
//! | `GET` | `/expense` | [`ExpenseController::get_expense`] | `event_id` |
//! | `GET` | `/expense/list` | [`ExpenseController::get_expense_list`] | `is_invited` 외 |
//! | `GET` | `/expense/total` | [`ExpenseController::get_expense_total`] | `is_invited`, `offset`, `offset_order_type` |
//! | `GET` | `/expense/search` | [`ExpenseController::get_expense_search`] | `is_invited`, `name`, `order` |
//!
//! ## 검사 순서
//!
//! 1. `user_id` 헤더 (없으면 `{"error": ...}`)
//! 2. 필수 쿼리 파라미터 / 본문 바인딩
//! 3. 서비스 호출
//!
//! 어느 단계든 실패하면 즉시 `400`을 한 번만 응답하고 종료합니다.
//! 추출기를 `Result`로 감싸서, 본문/쿼리 파싱 에러보다 헤더 검사가 먼저 수행되도록 합니다.

use std::sync::Arc;
use actix_web::{web, Either, HttpRequest, HttpResponse};
use log::{error, warn};
use serde_json::json;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::expenses::request::{
    CreateExpense, ExpenseIdQuery, ExpenseListQuery, ExpenseSearchQuery, ExpenseTotalQuery,
    UpdateExpense,
};
use crate::services::expenses::ExpenseService;

/// 신원 정보를 담는 요청 헤더 이름
pub const USER_ID_HEADER: &str = "user_id";

/// JSON 또는 form-urlencoded 본문. `Content-Type`이 없으면 form입니다.
type Body<T> = Result<Either<web::Json<T>, web::Form<T>>, actix_web::Error>;

/// 쿼리 문자열
type Query<T> = Result<web::Query<T>, actix_web::Error>;

/// 지출 API 컨트롤러
///
/// 서비스 구현은 생성 시점에 주입되며, `web::Data`로 워커 간에 공유됩니다.
pub struct ExpenseController {
    service: Arc<dyn ExpenseService>,
}

impl ExpenseController {
    pub fn new(service: Arc<dyn ExpenseService>) -> Self {
        Self { service }
    }

    /// `POST /expense`
    pub async fn create_expense(
        controller: web::Data<ExpenseController>,
        req: HttpRequest,
        body: Body<CreateExpense>,
    ) -> Result<HttpResponse, AppError> {
        let user_id = extract_user_id(&req)?;
        let mut request = bind_body(body)?;
        request.user_id = user_id;

        let response = controller.service
            .create_expense(&request)
            .await
            .inspect_err(|e| error!("CreateExpense API error: {}", e))?;

        Ok(HttpResponse::Ok().json(response))
    }

    /// `PUT /expense`
    pub async fn update_expense(
        controller: web::Data<ExpenseController>,
        req: HttpRequest,
        body: Body<UpdateExpense>,
    ) -> Result<HttpResponse, AppError> {
        let user_id = extract_user_id(&req)?;
        let mut request = bind_body(body)?;
        request.user_id = user_id;

        let response = controller.service
            .update_expense(&request)
            .await
            .inspect_err(|e| error!("UpdateExpense API error: {}", e))?;

        Ok(HttpResponse::Ok().json(response))
    }

    /// `DELETE /expense?event_id=`
    pub async fn delete_expense(
        controller: web::Data<ExpenseController>,
        req: HttpRequest,
        query: Query<ExpenseIdQuery>,
    ) -> Result<HttpResponse, AppError> {
        let user_id = extract_user_id(&req)?;
        let request = bind_query(query)?
            .into_delete_request(user_id)
            .inspect_err(|e| warn!("DeleteExpense rejected: {}", e))?;

        controller.service
            .delete_expense(&request)
            .await
            .inspect_err(|e| error!("DeleteExpense API error: {}", e))?;

        Ok(HttpResponse::Ok().json(json!({ "message": "deleted successfully" })))
    }

    /// `GET /expense?event_id=`
    pub async fn get_expense(
        controller: web::Data<ExpenseController>,
        req: HttpRequest,
        query: Query<ExpenseIdQuery>,
    ) -> Result<HttpResponse, AppError> {
        let user_id = extract_user_id(&req)?;
        let request = bind_query(query)?
            .into_get_request(user_id)
            .inspect_err(|e| warn!("GetExpense rejected: {}", e))?;

        let response = controller.service
            .get_expense(&request)
            .await
            .inspect_err(|e| error!("GetExpense API error: {}", e))?;

        Ok(HttpResponse::Ok().json(response))
    }

    /// `GET /expense/list`
    ///
    /// `offset_order_type`, `limit`, `page`는 숫자가 아니면 0으로 전달됩니다.
    pub async fn get_expense_list(
        controller: web::Data<ExpenseController>,
        req: HttpRequest,
        query: Query<ExpenseListQuery>,
    ) -> Result<HttpResponse, AppError> {
        let user_id = extract_user_id(&req)?;
        let request = bind_query(query)?
            .into_request(user_id)
            .inspect_err(|e| warn!("GetExpenseList rejected: {}", e))?;

        let response = controller.service
            .get_expense_list(&request)
            .await
            .inspect_err(|e| error!("GetExpenseList API error: {}", e))?;

        Ok(HttpResponse::Ok().json(response))
    }

    /// `GET /expense/total`
    pub async fn get_expense_total(
        controller: web::Data<ExpenseController>,
        req: HttpRequest,
        query: Query<ExpenseTotalQuery>,
    ) -> Result<HttpResponse, AppError> {
        let user_id = extract_user_id(&req)?;
        let request = bind_query(query)?.into_request(user_id);

        let response = controller.service
            .get_expense_total(&request)
            .await
            .inspect_err(|e| error!("GetExpenseTotal API error: {}", e))?;

        Ok(HttpResponse::Ok().json(response))
    }

    /// `GET /expense/search`
    pub async fn get_expense_search(
        controller: web::Data<ExpenseController>,
        req: HttpRequest,
        query: Query<ExpenseSearchQuery>,
    ) -> Result<HttpResponse, AppError> {
        let user_id = extract_user_id(&req)?;
        let request = bind_query(query)?.into_request(user_id);

        let response = controller.service
            .get_expense_search(&request)
            .await
            .inspect_err(|e| error!("GetExpenseSearch API error: {}", e))?;

        Ok(HttpResponse::Ok().json(response))
    }
}

/// `user_id` 헤더 값을 읽습니다. 없거나 비어 있으면 [`AppError::MissingUserId`].
fn extract_user_id(req: &HttpRequest) -> AppResult<String> {
    let user_id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match user_id {
        Some(user_id) => Ok(user_id.to_string()),
        None => {
            warn!("{} {}: user_id not exist", req.method(), req.path());
            Err(AppError::MissingUserId)
        }
    }
}

fn bind_body<T>(body: Body<T>) -> AppResult<T> {
    match body {
        Ok(Either::Left(json)) => Ok(json.into_inner()),
        Ok(Either::Right(form)) => Ok(form.into_inner()),
        Err(e) => {
            warn!("parameter error: {}", e);
            Err(AppError::BindingError(e.to_string()))
        }
    }
}

fn bind_query<T>(query: Query<T>) -> AppResult<T> {
    query.map(web::Query::into_inner).map_err(|e| {
        warn!("parameter error: {}", e);
        AppError::BindingError(e.to_string())
    })
}
