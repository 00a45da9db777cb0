//! 지출 엔티티
//!
//! `expenses` 컬렉션에 저장되는 문서 구조입니다.
//! 한 사용자가 어떤 행사(결혼식, 돌잔치, 장례식 등)에서 주고받은 금액 한 건을 나타냅니다.

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 지출 기록
///
/// `is_invited`가 `true`이면 사용자가 초대받아 낸 돈,
/// `false`이면 사용자가 초대해서 받은 돈입니다.
///
/// 외부에 노출되는 식별자는 `event_id`(UUID v4)이며,
/// `(user_id, event_id)` 조합은 유니크 인덱스로 보장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub event_id: String,
    pub user_id: String,
    pub name: String,
    pub is_invited: bool,
    pub amount: i64,

    /// 상대방과의 관계 (친구, 직장 동료 등)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,

    /// 행사 날짜. `YYYY-MM-DD` 문자열로 저장되어 사전순 정렬이 곧 날짜순입니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Expense {
    /// 새 지출 기록을 생성합니다.
    ///
    /// `event_id`를 새로 발급하고 생성/수정 시각을 현재 시각으로 설정합니다.
    pub fn new(
        user_id: String,
        name: String,
        is_invited: bool,
        amount: i64,
        relation: Option<String>,
        event_date: Option<NaiveDate>,
        memo: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            event_id: Uuid::new_v4().to_string(),
            user_id,
            name,
            is_invited,
            amount,
            relation,
            event_date,
            memo,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            "u1".to_string(),
            "김철수".to_string(),
            true,
            50_000,
            Some("친구".to_string()),
            NaiveDate::from_ymd_opt(2024, 5, 18),
            None,
        )
    }

    #[test]
    fn test_new_generates_event_id_and_timestamps() {
        let expense = sample();

        assert!(expense.id.is_none());
        assert!(Uuid::parse_str(&expense.event_id).is_ok());
        assert_eq!(expense.created_at, expense.updated_at);
    }

    #[test]
    fn test_event_ids_are_unique() {
        assert_ne!(sample().event_id, sample().event_id);
    }

    #[test]
    fn test_bson_document_shape() {
        let expense = sample();
        let document = mongodb::bson::to_document(&expense).unwrap();

        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("memo"));
        assert_eq!(document.get_str("event_date").unwrap(), "2024-05-18");
        assert_eq!(document.get_i64("amount").unwrap(), 50_000);
        assert!(document.get_datetime("created_at").is_ok());
    }

    #[test]
    fn test_bson_roundtrip_preserves_optional_fields() {
        let expense = sample();
        let document = mongodb::bson::to_document(&expense).unwrap();
        let decoded: Expense = mongodb::bson::from_document(document).unwrap();

        assert_eq!(decoded, expense);
    }
}
