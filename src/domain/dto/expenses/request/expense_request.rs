//! 지출 API 요청 DTO
//!
//! 컨트롤러가 헤더/쿼리/본문에서 조립해 서비스 계층에 넘기는 요청 구조체들입니다.
//! 모든 구조체의 `user_id`는 `user_id` 헤더에서만 채워지며, 본문에 같은 이름의 필드가
//! 있어도 역직렬화 단계에서 무시됩니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::{AppError, AppResult};

/// 지출 생성 요청 (`POST /expense`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateExpense {
    #[serde(skip_deserializing, default)]
    pub user_id: String,

    #[validate(length(min = 1, message = "name은(는) 필수입니다"))]
    pub name: String,

    #[serde(default)]
    pub is_invited: bool,

    #[serde(default)]
    pub amount: i64,

    #[serde(default)]
    pub relation: Option<String>,

    #[serde(default)]
    pub event_date: Option<NaiveDate>,

    #[serde(default)]
    pub memo: Option<String>,
}

/// 지출 수정 요청 (`PUT /expense`)
///
/// `event_id`를 제외한 필드는 값이 있는 것만 갱신됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpense {
    #[serde(skip_deserializing, default)]
    pub user_id: String,

    #[serde(default)]
    pub event_id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub is_invited: Option<bool>,

    #[serde(default)]
    pub amount: Option<i64>,

    #[serde(default)]
    pub relation: Option<String>,

    #[serde(default)]
    pub event_date: Option<NaiveDate>,

    #[serde(default)]
    pub memo: Option<String>,
}

impl UpdateExpense {
    /// 갱신할 필드가 하나라도 있는지 확인합니다.
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.is_invited.is_some()
            || self.amount.is_some()
            || self.relation.is_some()
            || self.event_date.is_some()
            || self.memo.is_some()
    }
}

/// 지출 삭제 요청 (`DELETE /expense?event_id=`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteExpense {
    pub user_id: String,
    pub event_id: String,
}

/// 지출 단건 조회 요청 (`GET /expense?event_id=`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetExpense {
    pub user_id: String,
    pub event_id: String,
}

/// 지출 목록 조회 요청 (`GET /expense/list`)
///
/// 숫자 필드는 쿼리에 없거나 숫자가 아니면 0으로 채워집니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetExpenseList {
    pub user_id: String,
    pub is_invited: String,
    /// 이전 페이지 마지막 항목의 정렬 키 값
    pub offset: String,
    pub offset_order_type: i8,
    pub order: String,
    pub limit: i64,
    pub page: i64,
}

/// 지출 합계 조회 요청 (`GET /expense/total`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetExpenseTotal {
    pub user_id: String,
    pub is_invited: String,
    pub offset: String,
    pub offset_order_type: i8,
}

/// 이름 검색 요청 (`GET /expense/search`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetExpenseSearch {
    pub user_id: String,
    pub is_invited: String,
    pub name: String,
    pub order: String,
}

/// 목록/합계 조회의 정렬 기준 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetOrderType {
    #[default]
    CreatedAt,
    EventDate,
    Amount,
    Name,
}

impl OffsetOrderType {
    /// 쿼리의 `offset_order_type` 값을 해석합니다. 알 수 없는 값은 `CreatedAt`입니다.
    pub fn from_code(code: i8) -> Self {
        match code {
            1 => OffsetOrderType::EventDate,
            2 => OffsetOrderType::Amount,
            3 => OffsetOrderType::Name,
            _ => OffsetOrderType::CreatedAt,
        }
    }

    /// MongoDB 문서의 필드 이름
    pub fn field(&self) -> &'static str {
        match self {
            OffsetOrderType::CreatedAt => "created_at",
            OffsetOrderType::EventDate => "event_date",
            OffsetOrderType::Amount => "amount",
            OffsetOrderType::Name => "name",
        }
    }
}

/// 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// `asc`(대소문자 무시)만 오름차순이고 나머지는 모두 내림차순입니다.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    /// `$sort` 스테이지에 쓰는 방향 값
    pub fn direction(&self) -> i32 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }

    /// 커서 이후 항목을 고르는 비교 연산자
    pub fn cursor_operator(&self) -> &'static str {
        match self {
            SortOrder::Asc => "$gt",
            SortOrder::Desc => "$lt",
        }
    }
}

/// `is_invited` 문자열 파라미터를 해석합니다.
///
/// 빈 문자열은 필터 없음(`None`)이고, `true`/`false` 이외의 값은 검증 에러입니다.
pub fn parse_is_invited(value: &str) -> AppResult<Option<bool>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" => Ok(Some(true)),
        "false" => Ok(Some(false)),
        other => Err(AppError::ValidationError(format!(
            "is_invited 값이 올바르지 않습니다: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_expense_ignores_body_user_id() {
        let json = r#"{"user_id":"attacker","name":"김철수","is_invited":true,"amount":50000}"#;
        let request: CreateExpense = serde_json::from_str(json).unwrap();

        assert_eq!(request.user_id, "");
        assert_eq!(request.name, "김철수");
        assert!(request.is_invited);
        assert_eq!(request.amount, 50000);
    }

    #[test]
    fn test_create_expense_requires_name_field() {
        let result = serde_json::from_str::<CreateExpense>(r#"{"amount":1000}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_create_expense_blank_name_fails_validation() {
        let request: CreateExpense = serde_json::from_str(r#"{"name":""}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_expense_parses_event_date() {
        let json = r#"{"name":"이영희","event_date":"2024-10-05"}"#;
        let request: CreateExpense = serde_json::from_str(json).unwrap();

        assert_eq!(request.event_date, NaiveDate::from_ymd_opt(2024, 10, 5));
    }

    #[test]
    fn test_update_expense_partial_body() {
        let request: UpdateExpense =
            serde_json::from_str(r#"{"event_id":"e1","amount":100}"#).unwrap();

        assert_eq!(request.event_id, "e1");
        assert_eq!(request.amount, Some(100));
        assert!(request.name.is_none());
        assert!(request.has_changes());
    }

    #[test]
    fn test_update_expense_without_changes() {
        let request: UpdateExpense = serde_json::from_str(r#"{"event_id":"e1"}"#).unwrap();

        assert!(!request.has_changes());
    }

    #[test]
    fn test_offset_order_type_from_code() {
        assert_eq!(OffsetOrderType::from_code(0), OffsetOrderType::CreatedAt);
        assert_eq!(OffsetOrderType::from_code(1), OffsetOrderType::EventDate);
        assert_eq!(OffsetOrderType::from_code(2), OffsetOrderType::Amount);
        assert_eq!(OffsetOrderType::from_code(3), OffsetOrderType::Name);
        assert_eq!(OffsetOrderType::from_code(-1), OffsetOrderType::CreatedAt);
        assert_eq!(OffsetOrderType::from_code(42), OffsetOrderType::CreatedAt);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse(" ASC "), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse(""), SortOrder::Desc);
        assert_eq!(SortOrder::Asc.cursor_operator(), "$gt");
        assert_eq!(SortOrder::Desc.direction(), -1);
    }

    #[test]
    fn test_parse_is_invited() {
        assert_eq!(parse_is_invited("true").unwrap(), Some(true));
        assert_eq!(parse_is_invited("FALSE").unwrap(), Some(false));
        assert_eq!(parse_is_invited("").unwrap(), None);
        assert!(matches!(parse_is_invited("yes"), Err(AppError::ValidationError(_))));
    }
}
