//! 쿼리 문자열 파라미터
//!
//! `web::Query`로 추출되는 원시 파라미터 구조체입니다.
//! 모든 필드를 문자열로 받은 뒤, 헤더의 `user_id`와 합쳐 서비스 요청 DTO로 변환합니다.
//! 빈 값(`?event_id=`)은 누락과 같이 취급합니다.

use serde::Deserialize;
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::{deserialize_optional_string, parse_or_default};
use super::expense_request::{
    DeleteExpense, GetExpense, GetExpenseList, GetExpenseSearch, GetExpenseTotal,
};

/// `event_id` 하나만 받는 쿼리 (삭제, 단건 조회)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseIdQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub event_id: Option<String>,
}

impl ExpenseIdQuery {
    fn require_event_id(self) -> AppResult<String> {
        self.event_id.ok_or(AppError::MissingParameter("event_id"))
    }

    pub fn into_delete_request(self, user_id: String) -> AppResult<DeleteExpense> {
        Ok(DeleteExpense {
            user_id,
            event_id: self.require_event_id()?,
        })
    }

    pub fn into_get_request(self, user_id: String) -> AppResult<GetExpense> {
        Ok(GetExpense {
            user_id,
            event_id: self.require_event_id()?,
        })
    }
}

/// `GET /expense/list` 쿼리
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub is_invited: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub offset: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub offset_order_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub order: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub limit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub page: Option<String>,
}

impl ExpenseListQuery {
    /// `is_invited`는 필수이고, 숫자 파라미터는 파싱 실패 시 0입니다.
    pub fn into_request(self, user_id: String) -> AppResult<GetExpenseList> {
        let is_invited = self
            .is_invited
            .ok_or(AppError::MissingParameter("is_invited"))?;

        Ok(GetExpenseList {
            user_id,
            is_invited,
            offset: self.offset.unwrap_or_default(),
            offset_order_type: parse_or_default(self.offset_order_type.as_deref()),
            order: self.order.unwrap_or_default(),
            limit: parse_or_default(self.limit.as_deref()),
            page: parse_or_default(self.page.as_deref()),
        })
    }
}

/// `GET /expense/total` 쿼리
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseTotalQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub is_invited: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub offset: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub offset_order_type: Option<String>,
}

impl ExpenseTotalQuery {
    pub fn into_request(self, user_id: String) -> GetExpenseTotal {
        GetExpenseTotal {
            user_id,
            is_invited: self.is_invited.unwrap_or_default(),
            offset: self.offset.unwrap_or_default(),
            offset_order_type: parse_or_default(self.offset_order_type.as_deref()),
        }
    }
}

/// `GET /expense/search` 쿼리
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseSearchQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub is_invited: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub order: Option<String>,
}

impl ExpenseSearchQuery {
    pub fn into_request(self, user_id: String) -> GetExpenseSearch {
        GetExpenseSearch {
            user_id,
            is_invited: self.is_invited.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            order: self.order.unwrap_or_default(),
        }
    }
}
