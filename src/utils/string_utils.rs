//! 문자열 처리 유틸리티
//!
//! 요청 파라미터 정리, 숫자 파라미터 관대한 파싱 등
//! 핸들러와 서비스에서 공통으로 쓰는 함수들입니다.

use std::str::FromStr;
use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증
///
/// 앞뒤 공백을 제거한 값이 비어 있으면 `ValidationError`를 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 정리
///
/// 공백만 있는 문자열은 `None`으로 취급합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde용 선택적 문자열 역직렬화
///
/// 쿼리 문자열의 `?name=` 처럼 값이 비어 있는 파라미터를 누락과 동일하게 처리합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 숫자 파라미터를 관대하게 파싱합니다.
///
/// 값이 없거나 파싱에 실패하면 타입의 기본값(0)을 반환합니다.
pub fn parse_or_default<T>(value: Option<&str>) -> T
where
    T: FromStr + Default,
{
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  e1  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("e1".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": ""}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default::<i64>(Some("20")), 20);
        assert_eq!(parse_or_default::<i64>(Some(" 7 ")), 7);
        assert_eq!(parse_or_default::<i64>(Some("abc")), 0);
        assert_eq!(parse_or_default::<i64>(None), 0);
        assert_eq!(parse_or_default::<i8>(Some("2")), 2);
        assert_eq!(parse_or_default::<i8>(Some("300")), 0);
    }
}
