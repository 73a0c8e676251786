//! Exportação CSV/Excel em disco

use bimtrack::cli::ExportFormat;
use bimtrack::export;
use bimtrack_common::{AnalysisRow, ItemResult, Project};
use tempfile::tempdir;

fn analysed_project() -> Project {
    let mut project = Project::new("1", "Escola Municipal Jardim das Flores", "Prefeitura");
    project.has_analysis = true;
    project.analysis_data = Some(vec![AnalysisRow::new(1, "dia1.jpg")
        .with_item("cadeira_aluno", ItemResult::new(3, 5, "❌ Faltam 2"))
        .with_item("mesa_professor", ItemResult::new(1, 1, "OK"))]);
    project
}

#[test]
fn test_csv_file_content() {
    let dir = tempdir().expect("Failed to create temp dir");
    let written = export::export_report(&analysed_project(), &ExportFormat::Csv, dir.path()).unwrap();

    assert_eq!(written, vec![dir.path().join("relatorio-obra-1.csv")]);
    let content = std::fs::read_to_string(&written[0]).unwrap();
    assert!(content.starts_with('\u{FEFF}'));

    let lines: Vec<&str> = content.trim_start_matches('\u{FEFF}').lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Dia;cadeira aluno;mesa professor");
    assert_eq!(lines[1], "1;3/5 ❌ ❌ Faltam 2;1/1 ✅ OK");
}

#[test]
fn test_excel_file_written() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("obra.xlsx");
    let written = export::export_report(&analysed_project(), &ExportFormat::Excel, &output).unwrap();

    assert_eq!(written, vec![output.clone()]);
    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_both_formats() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("saida");
    let written = export::export_report(&analysed_project(), &ExportFormat::Both, &output).unwrap();

    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.exists()));
    assert!(written[0].extension().unwrap() == "csv");
    assert!(written[1].extension().unwrap() == "xlsx");
}
