//! 사용자 엔티티

use mongodb::bson::{self, DateTime, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppResult, ErrorContext};

/// 사용자 엔티티 (MongoDB 문서)
///
/// 저장되는 모든 문서는 [`USER_SCHEMA`](super::schema::USER_SCHEMA)를 통과한 상태입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default)]
    pub favorites: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    /// 생성 시각
    #[serde(default = "DateTime::now")]
    pub date: DateTime,

    #[serde(default)]
    pub admin: bool,
}

impl User {
    /// 스키마가 적용된 문서로부터 엔티티를 만듭니다.
    pub fn from_document(doc: Document) -> AppResult<Self> {
        bson::from_document(doc).context("Failed to decode user document")
    }

    pub fn to_document(&self) -> AppResult<Document> {
        bson::to_document(self).context("Failed to encode user document")
    }

    /// 16진수 문자열 ID
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}
