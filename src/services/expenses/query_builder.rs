//! 지출 조회용 MongoDB 필터/정렬 문서 생성
//!
//! 서비스 계층의 조회 조건을 순수 함수로 분리해 DB 없이 검증할 수 있게 합니다.

use chrono::NaiveDate;
use mongodb::bson::{self, doc, Bson, Document};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::expenses::request::{OffsetOrderType, SortOrder, UpdateExpense};
use crate::utils::string_utils::{clean_optional_string, validate_required_string};

/// `limit`이 0 이하일 때 사용하는 페이지 크기
pub const DEFAULT_LIMIT: i64 = 20;
/// 한 번에 조회할 수 있는 최대 건수
pub const MAX_LIMIT: i64 = 100;
/// 이름 검색 결과 최대 건수
pub const SEARCH_LIMIT: i64 = MAX_LIMIT;

pub fn normalize_limit(limit: i64) -> i64 {
    if limit <= 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}

/// 1부터 시작하는 페이지 번호. 0 이하는 1페이지입니다.
pub fn normalize_page(page: i64) -> i64 {
    page.max(1)
}

pub fn page_skip(page: i64, limit: i64) -> u64 {
    u64::try_from((normalize_page(page) - 1).saturating_mul(limit)).unwrap_or_default()
}

/// 사용자 소유 기록 필터. `is_invited`가 있으면 함께 거릅니다.
pub fn owner_filter(user_id: &str, is_invited: Option<bool>) -> Document {
    let mut filter = doc! { "user_id": user_id };
    if let Some(is_invited) = is_invited {
        filter.insert("is_invited", is_invited);
    }
    filter
}

/// 이름 부분 일치 검색 필터 (대소문자 무시)
pub fn name_search_filter(user_id: &str, is_invited: Option<bool>, name: &str) -> Document {
    let mut filter = owner_filter(user_id, is_invited);
    let name = name.trim();
    if !name.is_empty() {
        filter.insert("name", doc! { "$regex": regex::escape(name), "$options": "i" });
    }
    filter
}

/// 정렬 문서. 같은 값끼리의 순서를 고정하기 위해 `_id`를 보조 키로 둡니다.
pub fn sort_document(order_type: OffsetOrderType, sort_order: SortOrder) -> Document {
    let direction = sort_order.direction();
    doc! { order_type.field(): direction, "_id": direction }
}

/// `offset` 커서 문자열을 정렬 키 타입의 BSON 값으로 변환합니다.
///
/// 빈 문자열은 커서 없음(`None`)입니다.
/// - `CreatedAt`: RFC 3339 시각
/// - `EventDate`: `YYYY-MM-DD`
/// - `Amount`: 정수
/// - `Name`: 문자열 그대로
pub fn cursor_bound(order_type: OffsetOrderType, offset: &str) -> AppResult<Option<Bson>> {
    let offset = offset.trim();
    if offset.is_empty() {
        return Ok(None);
    }

    let invalid = || AppError::ValidationError(format!("offset 값이 올바르지 않습니다: {}", offset));

    let bound = match order_type {
        OffsetOrderType::CreatedAt => {
            let parsed = chrono::DateTime::parse_from_rfc3339(offset).map_err(|_| invalid())?;
            Bson::DateTime(bson::DateTime::from_millis(parsed.timestamp_millis()))
        }
        OffsetOrderType::EventDate => {
            let parsed = NaiveDate::parse_from_str(offset, "%Y-%m-%d").map_err(|_| invalid())?;
            Bson::String(parsed.to_string())
        }
        OffsetOrderType::Amount => Bson::Int64(offset.parse::<i64>().map_err(|_| invalid())?),
        OffsetOrderType::Name => Bson::String(offset.to_string()),
    };

    Ok(Some(bound))
}

/// 커서 조건을 필터에 추가합니다. 정렬 방향 기준으로 커서 "다음" 항목만 남습니다.
pub fn apply_cursor(
    filter: &mut Document,
    order_type: OffsetOrderType,
    sort_order: SortOrder,
    bound: Bson,
) {
    filter.insert(order_type.field(), doc! { sort_order.cursor_operator(): bound });
}

/// 수정 요청에서 `$set`에 들어갈 필드 문서를 만듭니다.
///
/// 값이 있는 필드만 포함하며 `updated_at`은 항상 갱신됩니다.
pub fn update_fields(request: &UpdateExpense, now: bson::DateTime) -> AppResult<Document> {
    let mut fields = Document::new();

    if let Some(name) = &request.name {
        fields.insert("name", validate_required_string(name, "name")?);
    }
    if let Some(is_invited) = request.is_invited {
        fields.insert("is_invited", is_invited);
    }
    if let Some(amount) = request.amount {
        fields.insert("amount", amount);
    }
    if let Some(relation) = clean_optional_string(request.relation.clone()) {
        fields.insert("relation", relation);
    }
    if let Some(event_date) = request.event_date {
        fields.insert("event_date", event_date.to_string());
    }
    if let Some(memo) = clean_optional_string(request.memo.clone()) {
        fields.insert("memo", memo);
    }

    fields.insert("updated_at", now);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_limit() {
        assert_eq!(normalize_limit(0), DEFAULT_LIMIT);
        assert_eq!(normalize_limit(-5), DEFAULT_LIMIT);
        assert_eq!(normalize_limit(10), 10);
        assert_eq!(normalize_limit(1000), MAX_LIMIT);
    }

    #[test]
    fn test_page_skip() {
        assert_eq!(page_skip(0, 20), 0);
        assert_eq!(page_skip(1, 20), 0);
        assert_eq!(page_skip(3, 20), 40);
        assert_eq!(page_skip(i64::MAX, 100), i64::MAX as u64);
    }

    #[test]
    fn test_owner_filter() {
        assert_eq!(owner_filter("u1", None), doc! { "user_id": "u1" });
        assert_eq!(
            owner_filter("u1", Some(false)),
            doc! { "user_id": "u1", "is_invited": false }
        );
    }

    #[test]
    fn test_name_search_filter_escapes_input() {
        let filter = name_search_filter("u1", Some(true), " 김.* ");
        let name = filter.get_document("name").unwrap();

        assert_eq!(name.get_str("$regex").unwrap(), "김\\.\\*");
        assert_eq!(name.get_str("$options").unwrap(), "i");
        assert_eq!(filter.get_bool("is_invited").unwrap(), true);
    }

    #[test]
    fn test_name_search_filter_escapes_grouping_characters() {
        let filter = name_search_filter("u1", None, "(주)한빛+");
        let name = filter.get_document("name").unwrap();

        assert_eq!(name.get_str("$regex").unwrap(), "\\(주\\)한빛\\+");
    }

    #[test]
    fn test_search_limit_matches_list_cap() {
        assert_eq!(SEARCH_LIMIT, MAX_LIMIT);
        assert_eq!(normalize_limit(SEARCH_LIMIT), SEARCH_LIMIT);
    }

    #[test]
    fn test_name_search_filter_without_name() {
        let filter = name_search_filter("u1", None, "");

        assert!(!filter.contains_key("name"));
    }

    #[test]
    fn test_sort_document_has_tie_breaker() {
        let sort = sort_document(OffsetOrderType::Amount, SortOrder::Asc);

        assert_eq!(sort, doc! { "amount": 1, "_id": 1 });
        let keys: Vec<&String> = sort.keys().collect();
        assert_eq!(keys, vec!["amount", "_id"]);
    }

    #[test]
    fn test_cursor_bound_per_order_type() {
        assert_eq!(cursor_bound(OffsetOrderType::CreatedAt, "").unwrap(), None);

        let created = cursor_bound(OffsetOrderType::CreatedAt, "2023-11-14T22:13:20.123Z").unwrap();
        assert_eq!(created, Some(Bson::DateTime(bson::DateTime::from_millis(1_700_000_000_123))));

        let date = cursor_bound(OffsetOrderType::EventDate, "2024-05-18").unwrap();
        assert_eq!(date, Some(Bson::String("2024-05-18".to_string())));

        let amount = cursor_bound(OffsetOrderType::Amount, "50000").unwrap();
        assert_eq!(amount, Some(Bson::Int64(50000)));

        let name = cursor_bound(OffsetOrderType::Name, "김철수").unwrap();
        assert_eq!(name, Some(Bson::String("김철수".to_string())));
    }

    #[test]
    fn test_cursor_bound_rejects_malformed_values() {
        assert!(matches!(
            cursor_bound(OffsetOrderType::CreatedAt, "yesterday"),
            Err(AppError::ValidationError(_))
        ));
        assert!(cursor_bound(OffsetOrderType::EventDate, "2024/05/18").is_err());
        assert!(cursor_bound(OffsetOrderType::Amount, "12.5").is_err());
    }

    #[test]
    fn test_apply_cursor_uses_sort_direction() {
        let mut filter = owner_filter("u1", None);
        apply_cursor(&mut filter, OffsetOrderType::Amount, SortOrder::Desc, Bson::Int64(100));

        assert_eq!(filter, doc! { "user_id": "u1", "amount": { "$lt": 100_i64 } });

        let mut filter = owner_filter("u1", None);
        apply_cursor(&mut filter, OffsetOrderType::Name, SortOrder::Asc, Bson::String("b".to_string()));

        assert_eq!(filter, doc! { "user_id": "u1", "name": { "$gt": "b" } });
    }

    #[test]
    fn test_update_fields_only_provided_values() {
        let request = UpdateExpense {
            user_id: "u1".to_string(),
            event_id: "e1".to_string(),
            amount: Some(100),
            memo: Some("  ".to_string()),
            ..Default::default()
        };
        let now = bson::DateTime::from_millis(0);
        let fields = update_fields(&request, now).unwrap();

        assert_eq!(fields, doc! { "amount": 100_i64, "updated_at": now });
    }

    #[test]
    fn test_update_fields_rejects_blank_name() {
        let request = UpdateExpense {
            name: Some(" ".to_string()),
            ..Default::default()
        };

        assert!(update_fields(&request, bson::DateTime::now()).is_err());
    }
}
