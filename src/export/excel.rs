//! Excel em disco
//!
//! A planilha é montada em memória pelo crate comum e gravada de uma vez.

use crate::error::Result;
use bimtrack_common::export::excel_core::generate_excel_buffer;
use bimtrack_common::AnalysisRow;
use std::path::Path;

pub fn generate_excel(project_name: &str, rows: &[AnalysisRow], output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(project_name, rows)?;
    std::fs::write(output_path, &buffer)?;
    tracing::debug!(path = %output_path.display(), bytes = buffer.len(), "Excel gravado");
    Ok(())
}
