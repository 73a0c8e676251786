//! Cliente HTTP do serviço de análise
//!
//! Envia a planilha e as fotos em um POST multipart e recebe a tabela
//! dia x item. Uma requisição por submissão, sem nova tentativa.

use super::types::ErrorBody;
use crate::error::{BimTrackError, Result};
use crate::scanner::{ImageInfo, PlanInfo};
use bimtrack_common::{find_duplicate_day, AnalysisRow};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub struct AnalysisClient {
    client: reqwest::Client,
    url: String,
}

impl AnalysisClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BimTrackError::Request(e.to_string()))?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn submit(&self, plan: &PlanInfo, images: &[ImageInfo]) -> Result<Vec<AnalysisRow>> {
        let mut form = Form::new().part(
            "planejamento",
            file_part(&plan.path, &plan.file_name, XLSX_MIME).await?,
        );
        for image in images {
            form = form.part(
                "imagens",
                file_part(&image.path, &image.file_name, image.mime_type()).await?,
            );
        }

        tracing::info!(url = %self.url, images = images.len(), "enviando para análise");

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "falha de conexão com o serviço de análise");
                BimTrackError::AnalysisUnreachable
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, "falha ao ler a resposta da análise");
            BimTrackError::AnalysisUnreachable
        })?;
        tracing::debug!(status, bytes = body.len(), "resposta da análise");

        interpret_response(status, &body)
    }
}

async fn file_part(path: &Path, file_name: &str, mime: &str) -> Result<Part> {
    let bytes = tokio::fs::read(path).await?;
    Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .map_err(|e| BimTrackError::Request(e.to_string()))
}

/// Interpreta status + corpo da resposta
///
/// - 2xx: lista de linhas; `dia` repetido é rejeitado
/// - erro com `{"erro": ...}`: mensagem do serviço, como veio
/// - outro erro: mensagem genérica com o status
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<AnalysisRow>> {
    if !(200..300).contains(&status) {
        return Err(match serde_json::from_str::<ErrorBody>(body) {
            Ok(err) if !err.erro.trim().is_empty() => BimTrackError::Service(err.erro),
            _ => BimTrackError::AnalysisFailed(status),
        });
    }

    let rows: Vec<AnalysisRow> =
        serde_json::from_str(body).map_err(|e| BimTrackError::ApiParse(e.to_string()))?;

    if let Some(dia) = find_duplicate_day(&rows) {
        return Err(bimtrack_common::Error::DuplicateDay(dia).into());
    }

    Ok(rows)
}
