use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use crate::domain::dto::expenses::request::OffsetOrderType;
use crate::domain::entities::expenses::expense::Expense;

/// 지출 기록 응답
///
/// 내부 `_id`는 노출하지 않고 `event_id`로 식별합니다. 시각은 RFC 3339 문자열입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub event_id: String,
    pub user_id: String,
    pub name: String,
    pub is_invited: bool,
    pub amount: i64,
    pub relation: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExpenseResponse {
    /// 다음 페이지 요청에 쓸 커서 값을 만듭니다.
    ///
    /// 정렬 키가 비어 있는 항목(`event_date` 없음)은 커서를 만들 수 없습니다.
    pub fn cursor_value(&self, order_type: OffsetOrderType) -> Option<String> {
        match order_type {
            OffsetOrderType::CreatedAt => {
                Some(self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            OffsetOrderType::EventDate => self.event_date.map(|date| date.to_string()),
            OffsetOrderType::Amount => Some(self.amount.to_string()),
            OffsetOrderType::Name => Some(self.name.clone()),
        }
    }
}

fn to_utc(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        let Expense {
            event_id,
            user_id,
            name,
            is_invited,
            amount,
            relation,
            event_date,
            memo,
            created_at,
            updated_at,
            ..
        } = expense;

        Self {
            event_id,
            user_id,
            name,
            is_invited,
            amount,
            relation,
            event_date,
            memo,
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}

/// 지출 목록 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<ExpenseResponse>,
    /// 커서를 제외한 필터 조건에 맞는 전체 건수
    pub total_count: u64,
    pub page: i64,
    pub limit: i64,
    /// 가득 찬 페이지가 반환된 경우 다음 요청의 `offset` 값
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,
}

/// 지출 합계 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTotalResponse {
    pub is_invited: Option<bool>,
    pub total_amount: i64,
    pub count: u64,
}
