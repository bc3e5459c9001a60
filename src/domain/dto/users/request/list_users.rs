use serde::Deserialize;
use utoipa::IntoParams;

/// `GET /users` 쿼리 파라미터
///
/// 둘 다 생략하면 전체 컬렉션을 반환합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// 건너뛸 문서 수
    pub skip: Option<u64>,
    /// 최대 반환 문서 수
    pub limit: Option<i64>,
}

impl ListUsersQuery {
    pub fn is_paged(&self) -> bool {
        self.skip.is_some() || self.limit.is_some()
    }
}
