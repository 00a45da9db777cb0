//! # 지출 리포지토리 구현
//!
//! `expenses` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 필터/정렬 문서는 서비스 계층에서 만들어 전달하고, 리포지토리는 드라이버 호출과
//! 에러 변환만 담당합니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|----|------|
//! | `user_event_unique` | `user_id: 1, event_id: 1` | unique |
//! | `user_invited_created_at` | `user_id: 1, is_invited: 1, created_at: -1` | |

use std::sync::Arc;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, Bson, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::config::DatabaseConfig;
use crate::core::errors::{AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::expenses::expense::Expense;

/// 지출 리포지토리
pub struct ExpenseRepository {
    db: Arc<Database>,
    collection_name: String,
}

impl ExpenseRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            collection_name: DatabaseConfig::expense_collection(),
        }
    }

    fn collection(&self) -> Collection<Expense> {
        self.db.get_database().collection::<Expense>(&self.collection_name)
    }

    /// 지출 기록을 저장하고, 발급된 `_id`를 채워 반환합니다.
    pub async fn insert(&self, mut expense: Expense) -> AppResult<Expense> {
        let result = self.collection()
            .insert_one(&expense)
            .await
            .with_context(|| format!("지출 저장 실패 (event_id: {})", expense.event_id))?;

        expense.id = result.inserted_id.as_object_id();

        Ok(expense)
    }

    pub async fn find_one(&self, user_id: &str, event_id: &str) -> AppResult<Option<Expense>> {
        self.collection()
            .find_one(doc! { "user_id": user_id, "event_id": event_id })
            .await
            .with_context(|| format!("지출 조회 실패 (event_id: {})", event_id))
    }

    /// 주어진 필드를 `$set`으로 갱신하고 갱신 후 문서를 반환합니다.
    ///
    /// 대상 문서가 없으면 `None`입니다.
    pub async fn update_fields(
        &self,
        user_id: &str,
        event_id: &str,
        fields: Document,
    ) -> AppResult<Option<Expense>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "user_id": user_id, "event_id": event_id },
                doc! { "$set": fields },
            )
            .with_options(options)
            .await
            .with_context(|| format!("지출 수정 실패 (event_id: {})", event_id))
    }

    /// 삭제된 문서가 있으면 `true`
    pub async fn delete(&self, user_id: &str, event_id: &str) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "user_id": user_id, "event_id": event_id })
            .await
            .with_context(|| format!("지출 삭제 실패 (event_id: {})", event_id))?;

        Ok(result.deleted_count > 0)
    }

    /// 필터/정렬 조건으로 한 페이지를 조회합니다.
    pub async fn find_page(
        &self,
        filter: Document,
        sort: Document,
        skip: u64,
        limit: i64,
    ) -> AppResult<Vec<Expense>> {
        debug!("expenses find: filter={} sort={} skip={} limit={}", filter, sort, skip, limit);

        let cursor = self.collection()
            .find(filter)
            .sort(sort)
            .skip(skip)
            .limit(limit)
            .await
            .context("지출 목록 조회 실패")?;

        cursor
            .try_collect::<Vec<Expense>>()
            .await
            .context("지출 목록 커서 읽기 실패")
    }

    pub async fn count(&self, filter: Document) -> AppResult<u64> {
        self.collection()
            .count_documents(filter)
            .await
            .context("지출 건수 조회 실패")
    }

    /// 필터에 맞는 기록의 금액 합계와 건수를 집계합니다.
    pub async fn sum_amount(&self, filter: Document) -> AppResult<(i64, u64)> {
        let pipeline = vec![
            doc! { "$match": filter },
            doc! { "$group": {
                "_id": Bson::Null,
                "total_amount": { "$sum": "$amount" },
                "count": { "$sum": 1 },
            } },
        ];

        let mut cursor = self.collection()
            .aggregate(pipeline)
            .await
            .context("지출 합계 집계 실패")?;

        let Some(summary) = cursor.try_next().await.context("지출 합계 결과 읽기 실패")? else {
            return Ok((0, 0));
        };

        let total_amount = read_number(&summary, "total_amount");
        let count = u64::try_from(read_number(&summary, "count")).unwrap_or_default();

        Ok((total_amount, count))
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection();

        let user_event_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "event_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_event_unique".to_string())
                .build())
            .build();

        let user_invited_created_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "is_invited": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("user_invited_created_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([user_event_index, user_invited_created_index])
            .await
            .with_context(|| format!("{} 인덱스 생성 실패", self.collection_name))?;

        Ok(())
    }
}

/// `$sum` 결과는 값 크기에 따라 Int32/Int64/Double 중 하나로 돌아옵니다.
fn read_number(document: &Document, key: &str) -> i64 {
    match document.get(key) {
        Some(Bson::Int32(value)) => i64::from(*value),
        Some(Bson::Int64(value)) => *value,
        Some(Bson::Double(value)) => *value as i64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_number_accepts_all_numeric_types() {
        let summary = doc! {
            "a": 7_i32,
            "b": 10_000_000_000_i64,
            "c": 3.0_f64,
            "d": "not a number",
        };

        assert_eq!(read_number(&summary, "a"), 7);
        assert_eq!(read_number(&summary, "b"), 10_000_000_000);
        assert_eq!(read_number(&summary, "c"), 3);
        assert_eq!(read_number(&summary, "d"), 0);
        assert_eq!(read_number(&summary, "missing"), 0);
    }
}
