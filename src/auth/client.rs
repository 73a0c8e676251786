//! Cliente HTTP da API de autenticação/conta

use crate::error::{BimTrackError, Result};
use bimtrack_common::{User, UserRole};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resposta de login/cadastro/atualização
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: UserRole,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
    confirm_password: &'a str,
}

#[derive(Serialize)]
struct UpdateAccountRequest<'a> {
    name: &'a str,
    email: &'a str,
}

pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BimTrackError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let request = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest { email, password });
        let (status, body) = send(request, "login").await?;
        login_outcome(status, &body)
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<AuthResponse> {
        let request = self
            .client
            .post(format!("{}/auth/register", self.base_url))
            .json(&RegisterRequest {
                name,
                email,
                password,
                role,
            });
        let (status, body) = send(request, "register").await?;
        register_outcome(status, &body)
    }

    pub async fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<String> {
        let request = self
            .client
            .post(format!("{}/user/change-password", self.base_url))
            .bearer_auth(token)
            .json(&ChangePasswordRequest {
                current_password,
                new_password,
                confirm_password,
            });
        let (status, body) = send(request, "change-password").await?;
        message_outcome(status, &body)
    }

    pub async fn update_account(&self, token: &str, name: &str, email: &str) -> Result<AuthResponse> {
        let request = self
            .client
            .put(format!("{}/user/update-account", self.base_url))
            .bearer_auth(token)
            .json(&UpdateAccountRequest { name, email });
        let (status, body) = send(request, "update-account").await?;
        update_outcome(status, &body)
    }
}

async fn send(request: reqwest::RequestBuilder, operation: &str) -> Result<(u16, String)> {
    let response = request.send().await.map_err(|e| {
        tracing::warn!(operation, error = %e, "falha de conexão com o backend");
        BimTrackError::AuthUnreachable
    })?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| {
        tracing::warn!(operation, error = %e, "falha ao ler resposta do backend");
        BimTrackError::AuthUnreachable
    })?;
    tracing::debug!(operation, status, "resposta do backend");
    Ok((status, body))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn parse_auth(body: &str) -> Result<AuthResponse> {
    serde_json::from_str(body).map_err(|e| BimTrackError::ApiParse(e.to_string()))
}

pub fn login_outcome(status: u16, body: &str) -> Result<AuthResponse> {
    if !is_success(status) {
        return Err(BimTrackError::InvalidCredentials);
    }
    parse_auth(body)
}

/// 400 = cadastro recusado; outro erro = falha do servidor
pub fn register_outcome(status: u16, body: &str) -> Result<AuthResponse> {
    if status == 400 {
        let reason = body.trim();
        let reason = if reason.is_empty() { "dados inválidos" } else { reason };
        return Err(BimTrackError::RegistrationRejected(reason.to_string()));
    }
    if !is_success(status) {
        return Err(BimTrackError::Service(format!("Erro no servidor (HTTP {})", status)));
    }
    parse_auth(body)
}

/// Corpo texto é a mensagem, tanto no sucesso quanto no erro
pub fn message_outcome(status: u16, body: &str) -> Result<String> {
    if is_success(status) {
        Ok(body.to_string())
    } else {
        Err(BimTrackError::Service(body.to_string()))
    }
}

pub fn update_outcome(status: u16, body: &str) -> Result<AuthResponse> {
    if !is_success(status) {
        return Err(BimTrackError::Service(body.to_string()));
    }
    parse_auth(body)
}
