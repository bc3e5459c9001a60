//! 사용자 저장소
//!
//! 서비스 계층은 [`UserStore`] trait에만 의존합니다. 운영 환경은
//! [`MongoUserRepository`], 테스트는 [`InMemoryUserRepository`]를 주입합니다.

use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;

pub mod memory_repo;
pub mod query;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use query::{SortDirection, SortField, UserField, UserFilter, UserQuery};
pub use user_repo::MongoUserRepository;

/// 삭제 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// 사용자 문서 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 컬렉션의 모든 사용자를 저장 순서대로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find(&self, query: &UserQuery) -> AppResult<Vec<User>>;

    /// 지정한 필드만 담은 문서를 반환합니다. `_id`는 항상 포함됩니다.
    async fn find_projected(
        &self,
        query: &UserQuery,
        fields: &[UserField],
    ) -> AppResult<Vec<Document>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 엔티티를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// ID가 같은 문서를 통째로 교체합니다. 대상이 없으면 `false`.
    async fn replace(&self, user: User) -> AppResult<bool>;

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<DeleteOutcome>;
}
