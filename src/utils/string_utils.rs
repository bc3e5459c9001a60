use serde_json::Value;

/// 요청 값을 검증용 문자열로 변환합니다.
///
/// 문자열은 그대로, 숫자와 불리언은 표기 그대로, `null`은 빈 문자열,
/// 배열과 객체는 JSON 텍스트가 됩니다.
///
/// # 예제
/// ```rust,ignore
/// use serde_json::json;
/// use crate::utils::string_utils::value_to_string;
///
/// assert_eq!(value_to_string(&json!("25")), "25");
/// assert_eq!(value_to_string(&json!(25)), "25");
/// assert_eq!(value_to_string(&json!(null)), "");
/// ```
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// 부호가 있을 수 있는 십진수 표기인지 확인합니다.
///
/// 허용: `"25"`, `"-3"`, `"+1.5"`, `".5"`
/// 거부: `""`, `"1."`, `"1e5"`, `" 25"`, `"abc"`
pub fn is_numeric(value: &str) -> bool {
    let unsigned = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => ("", unsigned),
    };

    !fraction.is_empty()
        && fraction.bytes().all(|b| b.is_ascii_digit())
        && integer.bytes().all(|b| b.is_ascii_digit())
}

/// 정규식 메타 문자를 이스케이프하여 리터럴 부분 문자열 검색에 쓸 수 있게 합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("Ali")), "Ali");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(1.5)), "1.5");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&json!(null)), "");
        assert_eq!(value_to_string(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_is_numeric() {
        for valid in ["25", "-3", "+1.5", ".5", "0", "007"] {
            assert!(is_numeric(valid), "{valid} should be numeric");
        }
        for invalid in ["", "abc", "1.", "1e5", " 25", "25 ", "+", "-.", "1.2.3"] {
            assert!(!is_numeric(invalid), "{invalid} should not be numeric");
        }
    }

    #[test]
    fn test_escape_regex() {
        assert_eq!(escape_regex("ali"), "ali");
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("(x)"), "\\(x\\)");
    }
}
