//! CSV em disco

use crate::error::Result;
use bimtrack_common::export::csv_core;
use bimtrack_common::AnalysisRow;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_csv_file(rows: &[AnalysisRow], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    csv_core::write_csv(BufWriter::new(file), rows)?;
    tracing::debug!(path = %output_path.display(), rows = rows.len(), "CSV gravado");
    Ok(())
}
