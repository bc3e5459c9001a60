use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::user::User,
};

use super::{DeleteOutcome, UserField, UserQuery, UserStore};

/// 메모리 기반 사용자 저장소
///
/// 데이터베이스 없이 서비스와 핸들러를 실행할 때 사용합니다.
/// 복제본은 같은 데이터를 공유하며, 삽입 순서가 곧 기본 조회 순서입니다.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("user store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("user store lock poisoned".to_string()))
    }

    fn select(&self, query: &UserQuery) -> AppResult<Vec<User>> {
        let mut selected: Vec<User> = self
            .read()?
            .iter()
            .filter(|user| query.filter.matches(user))
            .cloned()
            .collect();

        // sort_by는 안정 정렬이므로 동순위는 삽입 순서를 유지합니다.
        selected.sort_by(|a, b| query.compare(a, b));

        let skip = query.skip.unwrap_or(0) as usize;
        let limit = query.effective_limit().unwrap_or(usize::MAX);

        Ok(selected.into_iter().skip(skip).take(limit).collect())
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.clone())
    }

    async fn find(&self, query: &UserQuery) -> AppResult<Vec<User>> {
        self.select(query)
    }

    async fn find_projected(
        &self,
        query: &UserQuery,
        fields: &[UserField],
    ) -> AppResult<Vec<Document>> {
        self.select(query)?
            .iter()
            .map(|user| -> AppResult<Document> {
                let full = user.to_document()?;
                Ok(full
                    .into_iter()
                    .filter(|(key, _)| {
                        key == UserField::Id.as_str()
                            || fields.iter().any(|field| field.as_str() == key)
                    })
                    .collect())
            })
            .collect()
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self
            .read()?
            .iter()
            .find(|user| user.id.as_ref() == Some(id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        self.write()?.push(user.clone());
        Ok(user)
    }

    async fn replace(&self, user: User) -> AppResult<bool> {
        let mut users = self.write()?;
        match users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) if user.id.is_some() => {
                *existing = user;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<DeleteOutcome> {
        let mut users = self.write()?;
        let before = users.len();
        users.retain(|user| user.id.as_ref() != Some(id));

        Ok(DeleteOutcome {
            deleted_count: (before - users.len()) as u64,
        })
    }
}
