//! # 지출 서비스
//!
//! 컨트롤러가 의존하는 [`ExpenseService`] trait과 MongoDB 기반 기본 구현
//! [`ExpenseServiceImpl`]을 제공합니다.
//!
//! ```text
//! ExpenseController ──► Arc<dyn ExpenseService>
//!                              │
//!                              ▼
//!                     ExpenseServiceImpl ──► ExpenseRepository ──► MongoDB
//! ```
//!
//! 컨트롤러는 trait에만 의존하므로, 테스트에서는 가짜 구현을 주입합니다.
//!
//! ## 목록 조회 규칙
//!
//! - `offset_order_type`: 0 `created_at`, 1 `event_date`, 2 `amount`, 3 `name` (그 외는 0)
//! - `order`: `asc` / `desc` (기본 `desc`)
//! - `limit`: 0 이하면 20, 최대 100
//! - `offset`이 있으면 정렬 방향 기준으로 커서 다음 항목부터, 없으면 `page`(1부터)로 건너뜁니다.
//! - 이름 검색은 `created_at` 순으로 최대 100건까지 반환합니다.

use std::sync::Arc;
use std::time::Instant;
use async_trait::async_trait;
use log::debug;
use mongodb::bson::DateTime;
use validator::Validate;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::expenses::{
            request::{
                parse_is_invited, CreateExpense, DeleteExpense, GetExpense, GetExpenseList,
                GetExpenseSearch, GetExpenseTotal, OffsetOrderType, SortOrder, UpdateExpense,
            },
            response::{ExpenseListResponse, ExpenseResponse, ExpenseTotalResponse},
        },
        entities::expenses::expense::Expense,
    },
    repositories::expenses::expense_repo::ExpenseRepository,
    utils::string_utils::{clean_optional_string, validate_required_string},
};
use super::query_builder::{
    apply_cursor, cursor_bound, name_search_filter, normalize_limit, normalize_page,
    owner_filter, page_skip, sort_document, update_fields, SEARCH_LIMIT,
};

/// 지출 비즈니스 로직 인터페이스
///
/// 각 메서드는 요청 구조체 하나를 받아 결과 또는 [`AppError`]를 반환합니다.
/// 요청 구조체의 `user_id`는 컨트롤러가 헤더에서 채워 넣은 값입니다.
#[async_trait]
pub trait ExpenseService: Send + Sync {
    async fn create_expense(&self, request: &CreateExpense) -> AppResult<ExpenseResponse>;

    async fn update_expense(&self, request: &UpdateExpense) -> AppResult<ExpenseResponse>;

    async fn delete_expense(&self, request: &DeleteExpense) -> AppResult<()>;

    /// 기록이 없으면 [`AppError::NotFound`]
    async fn get_expense(&self, request: &GetExpense) -> AppResult<ExpenseResponse>;

    async fn get_expense_list(&self, request: &GetExpenseList) -> AppResult<ExpenseListResponse>;

    async fn get_expense_total(&self, request: &GetExpenseTotal) -> AppResult<ExpenseTotalResponse>;

    async fn get_expense_search(&self, request: &GetExpenseSearch) -> AppResult<Vec<ExpenseResponse>>;
}

/// MongoDB 기반 기본 구현
pub struct ExpenseServiceImpl {
    expense_repo: Arc<ExpenseRepository>,
}

impl ExpenseServiceImpl {
    pub fn new(expense_repo: Arc<ExpenseRepository>) -> Self {
        Self { expense_repo }
    }
}

#[async_trait]
impl ExpenseService for ExpenseServiceImpl {
    async fn create_expense(&self, request: &CreateExpense) -> AppResult<ExpenseResponse> {
        let start_time = Instant::now();

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        let name = validate_required_string(&request.name, "name")?;

        let expense = Expense::new(
            request.user_id.clone(),
            name,
            request.is_invited,
            request.amount,
            clean_optional_string(request.relation.clone()),
            request.event_date,
            clean_optional_string(request.memo.clone()),
        );

        let created = self.expense_repo.insert(expense).await?;

        debug!("create_expense took: {:?}", start_time.elapsed());

        Ok(ExpenseResponse::from(created))
    }

    async fn update_expense(&self, request: &UpdateExpense) -> AppResult<ExpenseResponse> {
        let start_time = Instant::now();

        if request.event_id.trim().is_empty() {
            return Err(AppError::MissingParameter("event_id"));
        }

        let updated = if request.has_changes() {
            let fields = update_fields(request, DateTime::now())?;
            self.expense_repo
                .update_fields(&request.user_id, &request.event_id, fields)
                .await?
        } else {
            self.expense_repo
                .find_one(&request.user_id, &request.event_id)
                .await?
        };

        debug!("update_expense took: {:?}", start_time.elapsed());

        updated.map(ExpenseResponse::from).ok_or(AppError::NotFound)
    }

    async fn delete_expense(&self, request: &DeleteExpense) -> AppResult<()> {
        let deleted = self.expense_repo
            .delete(&request.user_id, &request.event_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn get_expense(&self, request: &GetExpense) -> AppResult<ExpenseResponse> {
        let expense = self.expense_repo
            .find_one(&request.user_id, &request.event_id)
            .await?
            .ok_or(AppError::NotFound)?;

        Ok(ExpenseResponse::from(expense))
    }

    async fn get_expense_list(&self, request: &GetExpenseList) -> AppResult<ExpenseListResponse> {
        let start_time = Instant::now();

        let is_invited = parse_is_invited(&request.is_invited)?;
        let order_type = OffsetOrderType::from_code(request.offset_order_type);
        let sort_order = SortOrder::parse(&request.order);
        let limit = normalize_limit(request.limit);
        let page = normalize_page(request.page);

        let filter = owner_filter(&request.user_id, is_invited);
        let total_count = self.expense_repo.count(filter.clone()).await?;

        let mut page_filter = filter;
        let skip = match cursor_bound(order_type, &request.offset)? {
            Some(bound) => {
                apply_cursor(&mut page_filter, order_type, sort_order, bound);
                0
            }
            None => page_skip(page, limit),
        };

        let expenses: Vec<ExpenseResponse> = self.expense_repo
            .find_page(page_filter, sort_document(order_type, sort_order), skip, limit)
            .await?
            .into_iter()
            .map(ExpenseResponse::from)
            .collect();

        let next_offset = if expenses.len() as i64 == limit {
            expenses.last().and_then(|last| last.cursor_value(order_type))
        } else {
            None
        };

        debug!(
            "get_expense_list took: {:?} ({} of {})",
            start_time.elapsed(),
            expenses.len(),
            total_count
        );

        Ok(ExpenseListResponse {
            expenses,
            total_count,
            page,
            limit,
            next_offset,
        })
    }

    async fn get_expense_total(&self, request: &GetExpenseTotal) -> AppResult<ExpenseTotalResponse> {
        let is_invited = parse_is_invited(&request.is_invited)?;
        let order_type = OffsetOrderType::from_code(request.offset_order_type);

        let mut filter = owner_filter(&request.user_id, is_invited);
        if let Some(bound) = cursor_bound(order_type, &request.offset)? {
            apply_cursor(&mut filter, order_type, SortOrder::default(), bound);
        }

        let (total_amount, count) = self.expense_repo.sum_amount(filter).await?;

        Ok(ExpenseTotalResponse {
            is_invited,
            total_amount,
            count,
        })
    }

    async fn get_expense_search(&self, request: &GetExpenseSearch) -> AppResult<Vec<ExpenseResponse>> {
        let is_invited = parse_is_invited(&request.is_invited)?;
        let sort_order = SortOrder::parse(&request.order);

        let filter = name_search_filter(&request.user_id, is_invited, &request.name);
        let expenses = self.expense_repo
            .find_page(filter, sort_document(OffsetOrderType::CreatedAt, sort_order), 0, SEARCH_LIMIT)
            .await?;

        Ok(expenses.into_iter().map(ExpenseResponse::from).collect())
    }
}
