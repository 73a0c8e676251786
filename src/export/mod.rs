pub mod csv;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::{BimTrackError, Result};
use bimtrack_common::Project;
use std::path::{Path, PathBuf};

/// Nome base do relatório quando `-o` aponta para uma pasta
pub fn default_title(project: &Project) -> String {
    format!("relatorio-obra-{}", project.id)
}

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        (
            output.join(format!("{}.csv", title)),
            output.join(format!("{}.xlsx", title)),
        )
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        (
            parent.join(format!("{}.csv", stem)),
            parent.join(format!("{}.xlsx", stem)),
        )
    }
}

/// Exporta a tabela de comparação da obra; devolve os arquivos gravados
pub fn export_report(project: &Project, format: &ExportFormat, output: &Path) -> Result<Vec<PathBuf>> {
    let rows = project.rows();
    if rows.is_empty() {
        return Err(BimTrackError::Validation(format!(
            "A obra '{}' ainda não tem análise para exportar.",
            project.name
        )));
    }

    if output.extension().is_none() && !output.exists() {
        std::fs::create_dir_all(output)?;
    }

    let title = default_title(project);
    let mut written = Vec::new();

    match format {
        ExportFormat::Csv => {
            let path = output_path_for_format(output, &title, "csv");
            println!("- Gerando CSV...");
            csv::write_csv_file(rows, &path)?;
            println!("✔ CSV: {}", path.display());
            written.push(path);
        }
        ExportFormat::Excel => {
            let path = output_path_for_format(output, &title, "xlsx");
            println!("- Gerando Excel...");
            excel::generate_excel(&project.name, rows, &path)?;
            println!("✔ Excel: {}", path.display());
            written.push(path);
        }
        ExportFormat::Both => {
            let (csv_path, excel_path) = output_paths_for_both(output, &title);

            println!("- Gerando CSV...");
            csv::write_csv_file(rows, &csv_path)?;
            println!("✔ CSV: {}", csv_path.display());

            println!("- Gerando Excel...");
            excel::generate_excel(&project.name, rows, &excel_path)?;
            println!("✔ Excel: {}", excel_path.display());

            written.push(csv_path);
            written.push(excel_path);
        }
    }

    tracing::info!(project_id = %project.id, files = written.len(), "relatório exportado");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path_for_format(dir.path(), "relatorio-obra-1", "csv");
        assert_eq!(path, dir.path().join("relatorio-obra-1.csv"));
    }

    #[test]
    fn test_output_path_for_file() {
        let path = output_path_for_format(Path::new("saida/obra.csv"), "x", "csv");
        assert_eq!(path, PathBuf::from("saida/obra.csv"));
    }

    #[test]
    fn test_both_uses_file_stem() {
        let (csv_path, xlsx_path) = output_paths_for_both(Path::new("saida/obra.xlsx"), "x");
        assert_eq!(csv_path, PathBuf::from("saida/obra.csv"));
        assert_eq!(xlsx_path, PathBuf::from("saida/obra.xlsx"));
    }

    #[test]
    fn test_project_without_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::new("9", "Creche Vila Nova", "Prefeitura");
        let err = export_report(&project, &ExportFormat::Csv, dir.path()).unwrap_err();
        assert!(matches!(err, BimTrackError::Validation(_)));
    }
}
