//! Planilha de planejamento (.xlsx)
//!
//! Só confere que o arquivo abre como pasta de trabalho; o conteúdo é
//! interpretado pelo serviço de análise.

use crate::error::{BimTrackError, Result};
use calamine::{open_workbook, Reader, Xlsx};
use std::path::{Path, PathBuf};

pub const PLAN_EXTENSIONS: &[&str] = &["xlsx"];

#[derive(Debug, Clone)]
pub struct PlanInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub sheets: Vec<String>,
    /// Linhas usadas na primeira aba
    pub rows: usize,
}

pub fn validate_plan(path: &Path) -> Result<PlanInfo> {
    if !path.is_file() {
        return Err(BimTrackError::FileNotFound(path.display().to_string()));
    }

    let has_plan_extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| PLAN_EXTENSIONS.contains(&ext.as_str()));
    if !has_plan_extension {
        return Err(BimTrackError::Validation(format!(
            "O arquivo de planejamento deve ser .xlsx: {}",
            path.display()
        )));
    }

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| BimTrackError::PlanRead(e.to_string()))?;

    let sheets = workbook.sheet_names().to_vec();
    let rows = match sheets.first() {
        Some(name) => workbook
            .worksheet_range(name)
            .map_err(|e| BimTrackError::PlanRead(e.to_string()))?
            .height(),
        None => 0,
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    tracing::debug!(file = %file_name, sheets = sheets.len(), rows, "planilha validada");

    Ok(PlanInfo {
        path: path.to_path_buf(),
        file_name,
        sheets,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bimtrack_common::export::excel_core::generate_excel_buffer;
    use bimtrack_common::{AnalysisRow, ItemResult};
    use tempfile::tempdir;

    #[test]
    fn test_plan_not_found() {
        let result = validate_plan(Path::new("/nonexistent/planejamento.xlsx"));
        assert!(matches!(result, Err(BimTrackError::FileNotFound(_))));
    }

    #[test]
    fn test_plan_wrong_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("planejamento.csv");
        std::fs::write(&path, "dia;cadeira\n1;10").unwrap();

        let result = validate_plan(&path);
        assert!(matches!(result, Err(BimTrackError::Validation(_))));
    }

    #[test]
    fn test_plan_not_a_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("planejamento.xlsx");
        std::fs::write(&path, "isto não é um xlsx").unwrap();

        let result = validate_plan(&path);
        assert!(matches!(result, Err(BimTrackError::PlanRead(_))));
    }

    #[test]
    fn test_valid_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Planejamento.XLSX");
        let rows = vec![
            AnalysisRow::new(1, "a.jpg").with_item("cadeira", ItemResult::new(1, 1, "OK")),
            AnalysisRow::new(2, "b.jpg").with_item("cadeira", ItemResult::new(2, 2, "OK")),
        ];
        std::fs::write(&path, generate_excel_buffer("Plano", &rows).unwrap()).unwrap();

        let plan = validate_plan(&path).unwrap();
        assert_eq!(plan.file_name, "Planejamento.XLSX");
        assert_eq!(plan.sheets[0], "Comparação");
        assert_eq!(plan.rows, 3);
    }
}
