use std::fmt;

use crate::{Coach, DeleteError, ReadError};

#[allow(async_fn_in_trait)]
pub trait SessionService {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ReadError>;
    async fn logout(&self) -> Result<(), DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait SessionRepository {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ReadError>;
    async fn logout(&self) -> Result<(), DeleteError>;
}

/// An authenticated coach and the bearer credential obtained at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Token,
    pub coach: Coach,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    #[must_use]
    pub fn new(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}
