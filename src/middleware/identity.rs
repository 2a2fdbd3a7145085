use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::{Error, Result};
use crate::AppState;

/// Resolves who is making a request.
pub trait IdentityProvider: Send + Sync {
    fn current_user_id(&self, parts: &Parts) -> Result<i32>;
}

/// Reports the same configured user for every request.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderIdentity {
    user_id: i32,
}

impl PlaceholderIdentity {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }
}

impl IdentityProvider for PlaceholderIdentity {
    fn current_user_id(&self, _parts: &Parts) -> Result<i32> {
        Ok(self.user_id)
    }
}

/// Extracts the caller's user id through the injected [`IdentityProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub i32);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        state.identity.current_user_id(parts).map(CurrentUser)
    }
}
