//! Fluxo de análise
//!
//! validação local -> envio ao serviço -> redução -> gravação no store

mod client;
mod types;

pub use client::{interpret_response, AnalysisClient};
pub use types::{AnalysisOutcome, ErrorBody};

use crate::error::{BimTrackError, Result};
use crate::scanner::{self, ImageInfo, PlanInfo};
use bimtrack_common::{reduce, AnalysisRow, ProjectStore};
use std::path::{Path, PathBuf};

/// Arquivos prontos para envio
#[derive(Debug, Clone)]
pub struct Submission {
    pub plan: PlanInfo,
    pub images: Vec<ImageInfo>,
}

/// Valida os arquivos antes de qualquer chamada de rede
pub fn prepare_submission(plan: Option<&Path>, images: &[PathBuf]) -> Result<Submission> {
    let missing = || {
        BimTrackError::Validation(
            "Por favor, selecione o arquivo de planejamento e pelo menos uma imagem.".to_string(),
        )
    };

    let plan_path = plan.ok_or_else(missing)?;
    if images.is_empty() {
        return Err(missing());
    }

    let plan = scanner::validate_plan(plan_path)?;
    let found = scanner::collect_images(images)?;
    if found.is_empty() {
        let inputs = images
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(BimTrackError::NoImagesFound(inputs));
    }

    Ok(Submission { plan, images: found })
}

/// Reduz o resultado e grava na obra
///
/// Resultado vazio não altera o store.
pub fn apply_result<S>(store: &S, project_id: &str, rows: Vec<AnalysisRow>) -> Result<AnalysisOutcome>
where
    S: ProjectStore + ?Sized,
{
    if rows.is_empty() {
        tracing::warn!(project_id, "análise sem resultados; nada gravado");
        return Ok(AnalysisOutcome::Empty);
    }

    let summary = reduce(&rows);
    let row_count = rows.len();
    store.save_analysis(
        project_id,
        summary.progress_percent,
        summary.divergences as u32,
        rows,
    )?;

    tracing::info!(
        project_id,
        progress = summary.progress_percent,
        divergences = summary.divergences,
        "análise gravada"
    );

    Ok(AnalysisOutcome::Saved {
        summary,
        rows: row_count,
    })
}

/// Envia a submissão e grava o resultado
pub async fn run_analysis<S>(
    client: &AnalysisClient,
    store: &S,
    project_id: &str,
    submission: &Submission,
) -> Result<AnalysisOutcome>
where
    S: ProjectStore + ?Sized,
{
    let rows = client.submit(&submission.plan, &submission.images).await?;
    apply_result(store, project_id, rows)
}
