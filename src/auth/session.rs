//! Sessão persistida (usuário + token)

use bimtrack_common::{KeyValueStorage, User};
use serde::{Deserialize, Serialize};

pub const USER_KEY: &str = "bimtrack_user";
pub const TOKEN_KEY: &str = "bimtrack_token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Sessão só existe com usuário e token gravados
    pub fn load(&self) -> bimtrack_common::Result<Option<Session>> {
        let user = self.storage.get(USER_KEY)?;
        let token = self.storage.get(TOKEN_KEY)?;
        match (user, token) {
            (Some(user), Some(token)) => Ok(Some(Session {
                user: serde_json::from_str(&user)?,
                token: serde_json::from_str(&token)?,
            })),
            _ => Ok(None),
        }
    }

    pub fn save(&self, session: &Session) -> bimtrack_common::Result<()> {
        self.storage.set(USER_KEY, &serde_json::to_string(&session.user)?)?;
        self.storage.set(TOKEN_KEY, &serde_json::to_string(&session.token)?)?;
        Ok(())
    }

    /// Atualiza só o usuário, mantendo o token
    pub fn save_user(&self, user: &User) -> bimtrack_common::Result<()> {
        self.storage.set(USER_KEY, &serde_json::to_string(user)?)
    }

    pub fn clear(&self) -> bimtrack_common::Result<()> {
        self.storage.remove(USER_KEY)?;
        self.storage.remove(TOKEN_KEY)
    }
}
