use std::sync::Arc;

use mongodb::bson::{Document, oid::ObjectId};

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::{CreateUserRequest, ListUsersQuery},
        entities::users::{USER_SCHEMA, User},
    },
    repositories::users::{DeleteOutcome, UserField, UserQuery, UserStore},
};

/// 사용자 비즈니스 로직
///
/// 저장소는 생성 시점에 주입되며, 핸들러는 `web::Data<UserService>`로 공유합니다.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 사용자 목록을 조회합니다. `skip`/`limit`이 없으면 전체를 반환합니다.
    pub async fn list_users(&self, params: &ListUsersQuery) -> AppResult<Vec<User>> {
        if !params.is_paged() {
            return self.store.find_all().await;
        }

        let mut query = UserQuery::new();
        query.skip = params.skip;
        query.limit = params.limit;
        self.store.find(&query).await
    }

    /// ID로 사용자를 조회합니다. ObjectId 형식이 아니면 `None`입니다.
    pub async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
        match ObjectId::parse_str(id) {
            Ok(object_id) => self.store.find_by_id(&object_id).await,
            Err(_) => {
                log::debug!("잘못된 사용자 ID 형식: {}", id);
                Ok(None)
            }
        }
    }

    /// 검증된 요청으로 새 사용자를 저장합니다.
    ///
    /// 요청의 세 필드만 초안에 담기며, 나머지 필드는 스키마 기본값을 따릅니다.
    /// 스키마 위반은 [`AppError::SchemaError`]로 반환됩니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let mut draft = request.into_document();
        USER_SCHEMA.apply(&mut draft)?;

        let user = User::from_document(draft)?;
        let created = self.store.insert(user).await?;

        log::info!(
            "👤 사용자 생성: id={}",
            created.id_string().unwrap_or_default()
        );

        Ok(created)
    }

    /// ID로 사용자를 삭제합니다.
    ///
    /// 조회와 달리 ObjectId 형식이 아니면 [`AppError::BadRequest`]로 실패합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<DeleteOutcome> {
        let object_id = ObjectId::parse_str(id).map_err(|_| {
            AppError::BadRequest(format!(
                "Cast to ObjectId failed for value \"{}\" at path \"_id\"",
                id
            ))
        })?;

        let outcome = self.store.delete_by_id(&object_id).await?;
        if outcome.deleted_count > 0 {
            log::info!("🗑️ 사용자 삭제: id={}", id);
        }

        Ok(outcome)
    }

    /// 기존 사용자에 변경 사항을 병합하고 스키마를 다시 적용해 저장합니다.
    ///
    /// 대상이 없으면 `None`을 반환합니다. `_id`는 변경할 수 없습니다.
    pub async fn update_user(&self, id: &ObjectId, changes: Document) -> AppResult<Option<User>> {
        let Some(existing) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut merged = existing.to_document()?;
        for (key, value) in changes {
            if key != UserField::Id.as_str() {
                merged.insert(key, value);
            }
        }

        USER_SCHEMA.apply(&mut merged)?;

        let mut updated = User::from_document(merged)?;
        updated.id = Some(*id);

        if !self.store.replace(updated.clone()).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        log::debug!("사용자 수정: id={}", id);
        Ok(Some(updated))
    }

    /// 필터/정렬/범위 조건으로 사용자를 검색합니다.
    pub async fn search_users(&self, query: &UserQuery) -> AppResult<Vec<User>> {
        self.store.find(query).await
    }

    /// 지정한 필드만 담은 문서로 검색 결과를 반환합니다.
    pub async fn search_user_fields(
        &self,
        query: &UserQuery,
        fields: &[UserField],
    ) -> AppResult<Vec<Document>> {
        self.store.find_projected(query, fields).await
    }
}
