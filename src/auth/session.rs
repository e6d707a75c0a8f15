//! Admin Session Store
//!
//! Opaque bearer tokens held in memory: login creates one, logout revokes
//! it, the middleware resolves it into an [`AdminSession`] on each request.
//! No expiry - the whole trust model is the single shared admin secret.

use dashmap::DashMap;
use uuid::Uuid;

use crate::utils::now_millis;

/// Authenticated admin session, injected into request extensions
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
    pub created_at: i64,
}

/// In-memory session store (token → session)
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, AdminSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Issue a new session token
    pub fn create(&self) -> AdminSession {
        let session = AdminSession {
            token: Uuid::new_v4().simple().to_string(),
            created_at: now_millis(),
        };
        self.sessions.insert(session.token.clone(), session.clone());
        session
    }

    /// Look up a token
    pub fn validate(&self, token: &str) -> Option<AdminSession> {
        self.sessions.get(token).map(|s| s.value().clone())
    }

    /// Revoke a token; returns whether it existed
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Extract the token from an `Authorization: Bearer <token>` header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ").filter(|t| !t.is_empty())
    }
}
