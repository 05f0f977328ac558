use chrono::{DateTime, Utc};
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::models::{password::HashedPassword, question::UserQuestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(Uuid);
impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Record handed to the user store; the store assigns id and timestamp
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password_hash: HashedPassword,
    pub questions: Vec<UserQuestion>,
}

#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    username: String,
    password_hash: HashedPassword,
    questions: Vec<UserQuestion>,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn reconstruct(id: UserId, new_user: NewUser, created_at: DateTime<Utc>) -> Self {
        let NewUser {
            first_name,
            last_name,
            username,
            password_hash,
            questions,
        } = new_user;
        Self {
            id,
            first_name,
            last_name,
            username,
            password_hash,
            questions,
            created_at,
        }
    }

    // getterのみ提供
    pub fn id(&self) -> &UserId {
        &self.id
    }
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }
    pub fn questions(&self) -> &[UserQuestion] {
        &self.questions
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
