use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Bson, Document, doc, oid::ObjectId},
};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::user::User,
};

use super::{DeleteOutcome, UserField, UserQuery, UserStore};

/// MongoDB `users` 컬렉션 저장소
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.get_database().collection::<User>(collection_name),
        }
    }
}

fn db_error(e: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.collection
            .find(doc! {})
            .await
            .map_err(db_error)?
            .try_collect()
            .await
            .map_err(db_error)
    }

    async fn find(&self, query: &UserQuery) -> AppResult<Vec<User>> {
        let mut find = self.collection.find(query.filter_document());

        if let Some(sort) = query.sort_document() {
            find = find.sort(sort);
        }
        if let Some(skip) = query.skip {
            find = find.skip(skip);
        }
        if let Some(limit) = query.effective_limit() {
            find = find.limit(limit as i64);
        }

        find.await
            .map_err(db_error)?
            .try_collect()
            .await
            .map_err(db_error)
    }

    async fn find_projected(
        &self,
        query: &UserQuery,
        fields: &[UserField],
    ) -> AppResult<Vec<Document>> {
        let projection: Document = fields
            .iter()
            .map(|field| (field.as_str().to_string(), Bson::Int32(1)))
            .collect();

        let collection = self.collection.clone_with_type::<Document>();
        let mut find = collection
            .find(query.filter_document())
            .projection(projection);

        if let Some(sort) = query.sort_document() {
            find = find.sort(sort);
        }
        if let Some(skip) = query.skip {
            find = find.skip(skip);
        }
        if let Some(limit) = query.effective_limit() {
            find = find.limit(limit as i64);
        }

        find.await
            .map_err(db_error)?
            .try_collect()
            .await
            .map_err(db_error)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(db_error)
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(db_error)?;

        user.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("inserted _id is not an ObjectId".to_string())
        })?);

        Ok(user)
    }

    async fn replace(&self, user: User) -> AppResult<bool> {
        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("cannot replace a user without _id".to_string()))?;

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &user)
            .await
            .map_err(db_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<DeleteOutcome> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(db_error)?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}
