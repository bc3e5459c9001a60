//! 사용자 조회 조건
//!
//! 필터, 정렬, 페이지 범위를 저장소 구현과 무관한 값으로 표현합니다.
//! MongoDB 구현은 [`UserQuery::filter_document`]와 [`UserQuery::sort_document`]로
//! 쿼리 문서를 만들고, 메모리 구현은 [`UserFilter::matches`]와
//! [`UserQuery::compare`]를 직접 사용합니다.
//!
//! ```rust,ignore
//! let query = UserQuery::new()
//!     .filter(UserFilter::new().min_age(18).max_age(65))
//!     .sort(SortField::FirstName, SortDirection::Desc)
//!     .page(2, 10);
//! ```

use std::cmp::Ordering;

use mongodb::bson::{Bson, Document, doc};

use crate::domain::entities::users::user::User;
use crate::utils::string_utils::escape_regex;

/// 사용자 문서 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    FirstName,
    LastName,
    Salary,
    Favorites,
    Age,
    Date,
    Admin,
}

impl UserField {
    pub fn as_str(self) -> &'static str {
        match self {
            UserField::Id => "_id",
            UserField::FirstName => "first_name",
            UserField::LastName => "last_name",
            UserField::Salary => "salary",
            UserField::Favorites => "favorites",
            UserField::Age => "age",
            UserField::Date => "date",
            UserField::Admin => "admin",
        }
    }
}

/// 정렬 가능한 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    FirstName,
    LastName,
    Age,
    Date,
}

impl SortField {
    pub fn field(self) -> UserField {
        match self {
            SortField::FirstName => UserField::FirstName,
            SortField::LastName => UserField::LastName,
            SortField::Age => UserField::Age,
            SortField::Date => UserField::Date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn as_i32(self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }
}

/// 필터 조건. 지정된 조건은 모두 만족해야 합니다 (AND).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// `first_name` 부분 문자열 (대소문자 구분)
    pub first_name_contains: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    /// 나이가 목록 중 하나와 같아야 함
    pub ages_in: Option<Vec<i32>>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.first_name_contains = Some(fragment.into());
        self
    }

    pub fn min_age(mut self, age: i32) -> Self {
        self.min_age = Some(age);
        self
    }

    pub fn max_age(mut self, age: i32) -> Self {
        self.max_age = Some(age);
        self
    }

    pub fn ages_in(mut self, ages: Vec<i32>) -> Self {
        self.ages_in = Some(ages);
        self
    }

    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();

        if let Some(fragment) = &self.first_name_contains {
            filter.insert("first_name", doc! { "$regex": escape_regex(fragment) });
        }

        let mut age = Document::new();
        if let Some(min) = self.min_age {
            age.insert("$gte", min);
        }
        if let Some(max) = self.max_age {
            age.insert("$lte", max);
        }
        if let Some(ages) = &self.ages_in {
            age.insert("$in", ages.iter().map(|a| Bson::Int32(*a)).collect::<Vec<_>>());
        }
        if !age.is_empty() {
            filter.insert("age", age);
        }

        filter
    }

    pub fn matches(&self, user: &User) -> bool {
        if let Some(fragment) = &self.first_name_contains {
            match &user.first_name {
                Some(name) if name.contains(fragment.as_str()) => {}
                _ => return false,
            }
        }

        let age_bounded =
            self.min_age.is_some() || self.max_age.is_some() || self.ages_in.is_some();
        if !age_bounded {
            return true;
        }

        let Some(age) = user.age else {
            return false;
        };

        self.min_age.is_none_or(|min| age >= min)
            && self.max_age.is_none_or(|max| age <= max)
            && self.ages_in.as_ref().is_none_or(|ages| ages.contains(&age))
    }
}

/// 필터, 정렬, 범위를 묶은 조회 조건
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserQuery {
    pub filter: UserFilter,
    pub sort: Vec<(SortField, SortDirection)>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl UserQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: UserFilter) -> Self {
        self.filter = filter;
        self
    }

    /// 정렬 키를 추가합니다. 먼저 추가한 키가 우선합니다.
    pub fn sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort.push((field, direction));
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// 1부터 시작하는 페이지 번호로 범위를 지정합니다.
    pub fn page(self, page: u64, size: i64) -> Self {
        let skip = page.saturating_sub(1).saturating_mul(size.max(0) as u64);
        self.skip(skip).limit(size)
    }

    pub fn filter_document(&self) -> Document {
        self.filter.to_document()
    }

    pub fn sort_document(&self) -> Option<Document> {
        if self.sort.is_empty() {
            return None;
        }
        Some(
            self.sort
                .iter()
                .map(|(field, direction)| {
                    (field.field().as_str().to_string(), Bson::Int32(direction.as_i32()))
                })
                .collect(),
        )
    }

    /// 정렬 조건에 따라 두 사용자를 비교합니다. 값이 없는 쪽이 앞에 옵니다.
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        for (field, direction) in &self.sort {
            let ordering = match field {
                SortField::FirstName => a.first_name.cmp(&b.first_name),
                SortField::LastName => a.last_name.cmp(&b.last_name),
                SortField::Age => a.age.cmp(&b.age),
                SortField::Date => a.date.cmp(&b.date),
            };
            let ordering = match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// `limit`이 0 이하이면 제한 없음으로 취급합니다.
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|limit| *limit > 0).map(|limit| limit as usize)
    }
}
