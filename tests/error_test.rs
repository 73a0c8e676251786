//! Casos de erro
//!
//! Validação local antes de qualquer chamada de rede e mensagens exibidas.

use bimtrack::analyzer;
use bimtrack::error::BimTrackError;
use bimtrack::scanner;
use std::path::Path;
use tempfile::tempdir;

/// Pasta inexistente
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(BimTrackError::FolderNotFound(_))));
}

/// Pasta sem imagens devolve lista vazia, não erro
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("notas.txt"), "obra").unwrap();
    std::fs::write(dir.path().join("dados.json"), "{}").unwrap();

    let result = scanner::scan_folder(dir.path()).unwrap();
    assert!(result.is_empty());
}

/// Planilha ausente
#[test]
fn test_submission_missing_plan_file() {
    let dir = tempdir().unwrap();
    let image = dir.path().join("dia1.jpg");
    std::fs::write(&image, b"foto").unwrap();

    let err = analyzer::prepare_submission(Some(&dir.path().join("plano.xlsx")), &[image]).unwrap_err();
    assert!(matches!(err, BimTrackError::FileNotFound(_)));
}

/// Planilha com extensão errada
#[test]
fn test_submission_plan_not_xlsx() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plano.csv");
    let image = dir.path().join("dia1.jpg");
    std::fs::write(&plan, "a;b").unwrap();
    std::fs::write(&image, b"foto").unwrap();

    let err = analyzer::prepare_submission(Some(&plan), &[image]).unwrap_err();
    assert!(matches!(err, BimTrackError::Validation(_)));
}

/// `.xlsx` que não abre como planilha
#[test]
fn test_submission_corrupt_plan() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plano.xlsx");
    let image = dir.path().join("dia1.jpg");
    std::fs::write(&plan, b"nao sou um zip").unwrap();
    std::fs::write(&image, b"foto").unwrap();

    let err = analyzer::prepare_submission(Some(&plan), &[image]).unwrap_err();
    assert!(matches!(err, BimTrackError::PlanRead(_)));
}

/// Foto com formato não suportado, com planilha válida
#[test]
fn test_submission_unsupported_image() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plano.xlsx");
    let buffer = bimtrack_common::export::excel_core::generate_excel_buffer("Obra", &[]).unwrap();
    std::fs::write(&plan, buffer).unwrap();
    let image = dir.path().join("dia1.gif");
    std::fs::write(&image, b"gif").unwrap();

    let err = analyzer::prepare_submission(Some(&plan), &[image]).unwrap_err();
    assert!(matches!(err, BimTrackError::Validation(_)));
}

/// Pasta de fotos vazia
#[test]
fn test_submission_empty_image_folder() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plano.xlsx");
    let buffer = bimtrack_common::export::excel_core::generate_excel_buffer("Obra", &[]).unwrap();
    std::fs::write(&plan, buffer).unwrap();
    let photos = dir.path().join("fotos");
    std::fs::create_dir(&photos).unwrap();

    let err = analyzer::prepare_submission(Some(&plan), &[photos]).unwrap_err();
    assert!(matches!(err, BimTrackError::NoImagesFound(_)));
}

/// Mensagens exibidas ao usuário
#[test]
fn test_error_display() {
    let cases: Vec<(BimTrackError, &str)> = vec![
        (
            BimTrackError::AnalysisUnreachable,
            "Não foi possível conectar ao servidor de análise.",
        ),
        (BimTrackError::AuthUnreachable, "Erro de conexão com o servidor"),
        (BimTrackError::NotAuthenticated, "Usuário não autenticado"),
        (
            BimTrackError::Service("Planilha sem a aba 'Planejamento'".to_string()),
            "Planilha sem a aba 'Planejamento'",
        ),
        (BimTrackError::ProjectNotFound("9".to_string()), "Obra não encontrada: 9"),
    ];

    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn test_connection_classification() {
    assert!(BimTrackError::AnalysisUnreachable.is_connection());
    assert!(BimTrackError::AuthUnreachable.is_connection());
    assert!(!BimTrackError::AnalysisFailed(500).is_connection());
    assert!(!BimTrackError::NotAuthenticated.is_connection());
}
