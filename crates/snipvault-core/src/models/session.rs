use serde::{Deserialize, Serialize};

/// An authenticated user, as handed over by the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
}

/// An authenticated session. Its presence or absence is the sole signal
/// that picks the remote or local persistence path — there is no separate
/// online/offline probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

impl Session {
    /// The stable identity that remote records are scoped to.
    pub fn identity(&self) -> &str {
        &self.user.id
    }
}
