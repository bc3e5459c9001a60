//! 엔티티 스키마 정의 및 적용
//!
//! 필드별 제약 조건을 데이터(`FieldSchema` 테이블)로 선언하고,
//! [`EntitySchema::apply`] 하나가 모든 필드에 동일한 순서로 적용합니다.
//!
//! # 적용 단계
//!
//! 1. 스키마에 없는 키 제거 (`_id` 제외)
//! 2. 필드 타입으로 캐스팅 (`"25"` → `25` 등). `null`은 값 없음으로 취급
//! 3. 변환 (소문자화, 공백 제거, 반올림)
//! 4. 기본값 채우기
//! 5. 검증 (필수 여부, 길이, 범위, 열거형)
//!
//! 위반 사항은 필드 선언 순서대로 모두 수집되어 [`SchemaValidationError`]로 반환됩니다.
//!
//! ```rust,ignore
//! use mongodb::bson::doc;
//! use crate::domain::entities::users::schema::USER_SCHEMA;
//!
//! let mut draft = doc! { "first_name": "  Ali ", "last_name": "Rezaei", "age": "25" };
//! USER_SCHEMA.apply(&mut draft)?;
//! assert_eq!(draft.get_str("first_name")?, "ali");
//! assert_eq!(draft.get_i32("age")?, 25);
//! ```

use std::fmt;

use mongodb::bson::{Bson, DateTime, Document};

/// 필드 값의 저장 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    /// `i32` 범위의 정수
    Integer,
    Boolean,
    StringArray,
    Timestamp,
}

impl FieldKind {
    fn cast_name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number | FieldKind::Integer => "Number",
            FieldKind::Boolean => "Boolean",
            FieldKind::StringArray => "[string]",
            FieldKind::Timestamp => "date",
        }
    }
}

/// 쓰기 시점에 적용되는 값 변환
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Lowercase,
    Trim,
    /// 가장 가까운 정수로 반올림
    Round,
}

/// 필드 필수 여부
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Optional,
    Always,
    /// 지정한 불리언 필드가 `true`일 때만 필수
    WhenTrue(&'static str),
}

/// 값이 없을 때 채울 기본값
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// 적용 시점의 현재 시각
    Now,
    Bool(bool),
    EmptyArray,
}

impl DefaultValue {
    fn to_bson(self) -> Bson {
        match self {
            DefaultValue::Now => Bson::DateTime(DateTime::now()),
            DefaultValue::Bool(value) => Bson::Boolean(value),
            DefaultValue::EmptyArray => Bson::Array(Vec::new()),
        }
    }
}

/// 필드 하나의 선언적 제약 조건
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub transforms: &'static [Transform],
    pub requirement: Requirement,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub allowed: Option<&'static [&'static str]>,
    pub default: Option<DefaultValue>,
}

impl FieldSchema {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            transforms: &[],
            requirement: Requirement::Optional,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            allowed: None,
            default: None,
        }
    }

    pub const fn transforms(self, transforms: &'static [Transform]) -> Self {
        Self { transforms, ..self }
    }

    pub const fn required(self, requirement: Requirement) -> Self {
        Self { requirement, ..self }
    }

    pub const fn length(self, min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..self
        }
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    pub const fn one_of(self, allowed: &'static [&'static str]) -> Self {
        Self {
            allowed: Some(allowed),
            ..self
        }
    }

    pub const fn default_value(self, default: DefaultValue) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    /// 원시 값을 필드 타입으로 캐스팅합니다.
    ///
    /// `Ok(None)`은 값이 없는 것으로 취급할 입력(빈 숫자 문자열 등)입니다.
    fn cast(&self, raw: Bson) -> Result<Option<Bson>, FieldViolation> {
        let cast = match (self.kind, &raw) {
            (FieldKind::String, _) => cast_string(&raw).map(|s| Some(Bson::String(s))),
            (FieldKind::Number, _) => {
                cast_number(&raw).map(|n| n.map(Bson::Double))
            }
            (FieldKind::Integer, _) => match cast_number(&raw) {
                Some(Some(n)) if is_i32(n) => Some(Some(Bson::Int32(n as i32))),
                Some(None) => Some(None),
                _ => None,
            },
            (FieldKind::Boolean, _) => cast_bool(&raw).map(|b| Some(Bson::Boolean(b))),
            (FieldKind::StringArray, Bson::Array(items)) => items
                .iter()
                .map(|item| cast_string(item).map(Bson::String))
                .collect::<Option<Vec<_>>>()
                .map(|items| Some(Bson::Array(items))),
            (FieldKind::StringArray, _) => {
                cast_string(&raw).map(|s| Some(Bson::Array(vec![Bson::String(s)])))
            }
            (FieldKind::Timestamp, _) => cast_timestamp(&raw).map(|d| Some(Bson::DateTime(d))),
        };

        cast.ok_or_else(|| FieldViolation {
            path: self.name,
            kind: ViolationKind::Cast,
            message: format!(
                "Cast to {} failed for value {} (type {}) at path \"{}\"",
                self.kind.cast_name(),
                quote_value(&raw),
                type_name(&raw),
                self.name
            ),
        })
    }

    fn transform(&self, value: Bson) -> Bson {
        self.transforms.iter().fold(value, |value, transform| match (transform, value) {
            (Transform::Lowercase, Bson::String(s)) => Bson::String(s.to_lowercase()),
            (Transform::Trim, Bson::String(s)) => Bson::String(s.trim().to_string()),
            (Transform::Round, Bson::Double(n)) => Bson::Double(n.round()),
            (_, other) => other,
        })
    }

    fn is_required(&self, doc: &Document) -> bool {
        match self.requirement {
            Requirement::Optional => false,
            Requirement::Always => true,
            Requirement::WhenTrue(other) => matches!(doc.get(other), Some(Bson::Boolean(true))),
        }
    }

    fn validate(&self, doc: &Document) -> Vec<FieldViolation> {
        let value = doc.get(self.name);

        let missing = match value {
            None | Some(Bson::Null) => true,
            Some(Bson::String(s)) => s.is_empty(),
            _ => false,
        };

        if missing {
            if self.is_required(doc) {
                return vec![self.violation(
                    ViolationKind::Required,
                    format!("Path `{}` is required.", self.name),
                )];
            }
            return Vec::new();
        }

        let mut violations = Vec::new();

        if let Some(Bson::String(s)) = value {
            let length = s.chars().count();
            if let Some(min) = self.min_length.filter(|min| length < *min) {
                violations.push(self.violation(
                    ViolationKind::MinLength,
                    format!(
                        "Path `{}` (`{}`) is shorter than the minimum allowed length ({}).",
                        self.name, s, min
                    ),
                ));
            }
            if let Some(max) = self.max_length.filter(|max| length > *max) {
                violations.push(self.violation(
                    ViolationKind::MaxLength,
                    format!(
                        "Path `{}` (`{}`) is longer than the maximum allowed length ({}).",
                        self.name, s, max
                    ),
                ));
            }
        }

        if let Some(n) = value.and_then(numeric_value) {
            if let Some(min) = self.min.filter(|min| n < *min) {
                violations.push(self.violation(
                    ViolationKind::Min,
                    format!(
                        "Path `{}` ({}) is less than minimum allowed value ({}).",
                        self.name,
                        format_number(n),
                        format_number(min)
                    ),
                ));
            }
            if let Some(max) = self.max.filter(|max| n > *max) {
                violations.push(self.violation(
                    ViolationKind::Max,
                    format!(
                        "Path `{}` ({}) is more than maximum allowed value ({}).",
                        self.name,
                        format_number(n),
                        format_number(max)
                    ),
                ));
            }
        }

        if let Some(allowed) = self.allowed {
            let candidates: Vec<&str> = match value {
                Some(Bson::String(s)) => vec![s.as_str()],
                Some(Bson::Array(items)) => items.iter().filter_map(Bson::as_str).collect(),
                _ => Vec::new(),
            };
            for candidate in candidates {
                if !allowed.contains(&candidate) {
                    violations.push(self.violation(
                        ViolationKind::Enum,
                        format!(
                            "`{}` is not a valid enum value for path `{}`.",
                            candidate, self.name
                        ),
                    ));
                }
            }
        }

        violations
    }

    fn violation(&self, kind: ViolationKind, message: String) -> FieldViolation {
        FieldViolation {
            path: self.name,
            kind,
            message,
        }
    }
}

/// 엔티티 하나의 전체 스키마
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// 에러 메시지에 쓰이는 모델 이름
    pub model: &'static str,
    pub fields: &'static [FieldSchema],
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// 문서에 스키마를 적용합니다. 성공하면 `doc`은 저장 가능한 형태가 됩니다.
    ///
    /// 결과 문서의 키는 `_id` 다음에 필드 선언 순서로 놓입니다.
    pub fn apply(&self, doc: &mut Document) -> Result<(), SchemaValidationError> {
        // 선언되지 않은 키는 source에 남아 함께 버려집니다.
        let mut source = std::mem::take(doc);
        if let Some(id) = source.remove("_id") {
            doc.insert("_id", id);
        }

        let mut violations = Vec::new();
        let mut cast_failed = vec![false; self.fields.len()];

        for (index, field) in self.fields.iter().enumerate() {
            let value = match source.remove(field.name) {
                None | Some(Bson::Null) => None,
                Some(raw) => match field.cast(raw) {
                    Ok(value) => value.map(|value| field.transform(value)),
                    Err(violation) => {
                        cast_failed[index] = true;
                        violations.push((index, violation));
                        continue;
                    }
                },
            };

            if let Some(value) = value.or_else(|| field.default.map(|d| d.to_bson())) {
                doc.insert(field.name, value);
            }
        }

        for (index, field) in self.fields.iter().enumerate() {
            if cast_failed[index] {
                continue;
            }
            violations.extend(field.validate(doc).into_iter().map(|v| (index, v)));
        }

        if violations.is_empty() {
            return Ok(());
        }

        violations.sort_by_key(|(index, _)| *index);

        Err(SchemaValidationError {
            model: self.model,
            violations: violations.into_iter().map(|(_, v)| v).collect(),
        })
    }
}

/// 사용자 스키마
///
/// | 필드 | 제약 |
/// |------|------|
/// | `first_name` | 소문자화, 공백 제거 |
/// | `salary` | 반올림 |
/// | `last_name` | `admin`이 true면 필수, 3–20자 |
/// | `favorites` | sport / programming / health |
/// | `age` | 정수, 8–120 |
/// | `date` | 기본값: 생성 시각 |
/// | `admin` | 기본값: false |
pub static USER_SCHEMA: EntitySchema = EntitySchema {
    model: "User",
    fields: &[
        FieldSchema::new("first_name", FieldKind::String)
            .transforms(&[Transform::Lowercase, Transform::Trim]),
        FieldSchema::new("salary", FieldKind::Number).transforms(&[Transform::Round]),
        FieldSchema::new("last_name", FieldKind::String)
            .required(Requirement::WhenTrue("admin"))
            .length(3, 20),
        FieldSchema::new("favorites", FieldKind::StringArray)
            .one_of(&["sport", "programming", "health"])
            .default_value(DefaultValue::EmptyArray),
        FieldSchema::new("age", FieldKind::Integer).range(8.0, 120.0),
        FieldSchema::new("date", FieldKind::Timestamp).default_value(DefaultValue::Now),
        FieldSchema::new("admin", FieldKind::Boolean).default_value(DefaultValue::Bool(false)),
    ],
};

/// 위반된 제약 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Cast,
    Required,
    MinLength,
    MaxLength,
    Min,
    Max,
    Enum,
}

/// 필드 하나의 제약 위반
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub path: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

/// 스키마 적용 실패. 필드 경로별 위반 항목을 담습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaValidationError {
    model: &'static str,
    violations: Vec<FieldViolation>,
}

impl SchemaValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// 특정 필드의 첫 번째 위반 항목
    pub fn get(&self, path: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.path == path)
    }
}

impl fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.model)?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", violation.path, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaValidationError {}

fn cast_string(raw: &Bson) -> Option<String> {
    match raw {
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(n) => Some(format_number(*n)),
        Bson::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `Some(None)`은 빈 문자열처럼 값 없음으로 취급할 입력입니다.
fn cast_number(raw: &Bson) -> Option<Option<f64>> {
    match raw {
        Bson::String(s) if s.trim().is_empty() => Some(None),
        Bson::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()).map(Some),
        Bson::Boolean(b) => Some(Some(if *b { 1.0 } else { 0.0 })),
        other => numeric_value(other).map(Some),
    }
}

fn cast_bool(raw: &Bson) -> Option<bool> {
    match raw {
        Bson::Boolean(b) => Some(*b),
        Bson::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        other => match numeric_value(other) {
            Some(n) if n == 1.0 => Some(true),
            Some(n) if n == 0.0 => Some(false),
            _ => None,
        },
    }
}

fn cast_timestamp(raw: &Bson) -> Option<DateTime> {
    match raw {
        Bson::DateTime(d) => Some(*d),
        Bson::String(s) => DateTime::parse_rfc3339_str(s).ok(),
        Bson::Int64(millis) => Some(DateTime::from_millis(*millis)),
        Bson::Int32(millis) => Some(DateTime::from_millis(i64::from(*millis))),
        _ => None,
    }
}

fn numeric_value(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}

fn is_i32(n: f64) -> bool {
    n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX)
}

/// 정수 값이면 소수점 없이 출력합니다 (`5.0` → `5`).
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn quote_value(raw: &Bson) -> String {
    match raw {
        Bson::String(s) => format!("\"{}\"", s),
        Bson::Double(n) => format_number(*n),
        other => other.to_string(),
    }
}

fn type_name(raw: &Bson) -> &'static str {
    match raw {
        Bson::String(_) => "string",
        Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) => "number",
        Bson::Boolean(_) => "boolean",
        Bson::Array(_) => "Array",
        Bson::Document(_) => "Object",
        _ => "unknown",
    }
}
