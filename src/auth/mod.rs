//! Autenticação e conta do usuário
//!
//! Combina o cliente HTTP com a sessão persistida.

mod client;
mod session;

pub use client::{login_outcome, message_outcome, register_outcome, update_outcome, AuthClient, AuthResponse};
pub use session::{Session, SessionStore, TOKEN_KEY, USER_KEY};

use crate::error::{BimTrackError, Result};
use bimtrack_common::{KeyValueStorage, User, UserRole};

pub const ACCOUNT_UPDATED: &str = "Conta atualizada!";

pub struct Auth<S: KeyValueStorage> {
    client: AuthClient,
    session: SessionStore<S>,
}

impl<S: KeyValueStorage> Auth<S> {
    pub fn new(client: AuthClient, storage: S) -> Self {
        Self {
            client,
            session: SessionStore::new(storage),
        }
    }

    pub fn current(&self) -> Result<Option<Session>> {
        Ok(self.session.load()?)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let response = self.client.login(email, password).await?;
        self.establish(response)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str, role: UserRole) -> Result<User> {
        let response = self.client.register(name, email, password, role).await?;
        self.establish(response)
    }

    pub fn logout(&self) -> Result<()> {
        self.session.clear()?;
        tracing::info!("sessão encerrada");
        Ok(())
    }

    pub async fn change_password(&self, current: &str, new: &str, confirm: &str) -> Result<String> {
        let session = self.require_session()?;
        self.client
            .change_password(&session.token, current, new, confirm)
            .await
    }

    /// Atualiza nome/e-mail; só o usuário é regravado, o token da sessão fica
    pub async fn update_account(&self, name: &str, email: &str) -> Result<String> {
        let session = self.require_session()?;
        let response = self.client.update_account(&session.token, name, email).await?;
        let user = response.user.with_avatar();
        self.session.save_user(&user)?;
        tracing::info!(user = %user.email, "conta atualizada");
        Ok(ACCOUNT_UPDATED.to_string())
    }

    fn require_session(&self) -> Result<Session> {
        self.session.load()?.ok_or(BimTrackError::NotAuthenticated)
    }

    fn establish(&self, response: AuthResponse) -> Result<User> {
        let session = Session {
            user: response.user.with_avatar(),
            token: response.token,
        };
        self.session.save(&session)?;
        tracing::info!(user = %session.user.email, role = %session.user.role, "sessão iniciada");
        Ok(session.user)
    }
}
