use bimtrack_common::AnalysisSummary;
use serde::Deserialize;

/// Corpo de erro do serviço de análise: `{"erro": "..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub erro: String,
}

/// Resultado de uma submissão
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Resultado reduzido e gravado na obra
    Saved {
        summary: AnalysisSummary,
        rows: usize,
    },
    /// O serviço terminou mas não devolveu linhas; nada foi gravado
    Empty,
}
