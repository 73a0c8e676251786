//! Relatório CSV
//!
//! Formato: BOM UTF-8, separador ";", cabeçalho `Dia;<itens...>`, uma linha
//! por dia com células `<detectado>/<esperado> <ícone> <status>`.

use crate::error::Result;
use crate::reducer::columns;
use crate::table::{column_label, NOT_AVAILABLE};
use crate::types::{AnalysisRow, ItemResult};
use std::io::Write;

/// Marca de ordem de bytes
pub const BOM: &str = "\u{FEFF}";

pub const DELIMITER: u8 = b';';

pub fn status_icon(item: &ItemResult) -> &'static str {
    if item.is_ok() {
        "✅"
    } else {
        "❌"
    }
}

/// `3/5 ❌ ❌ Faltam 2`
pub fn cell_text(item: &ItemResult) -> String {
    format!(
        "{}/{} {} {}",
        item.detectado,
        item.esperado,
        status_icon(item),
        item.status
    )
}

/// Gera o CSV em memória
pub fn generate_csv_buffer(rows: &[AnalysisRow]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, rows)?;
    Ok(buffer)
}

/// Escreve BOM + CSV no destino
pub fn write_csv<W: Write>(mut out: W, rows: &[AnalysisRow]) -> Result<()> {
    out.write_all(BOM.as_bytes())?;

    let columns = columns(rows);
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(out);

    let mut header = vec!["Dia".to_string()];
    header.extend(columns.iter().map(|c| column_label(c)));
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![row.dia.to_string()];
        record.extend(columns.iter().map(|col| match row.get(col) {
            Some(item) => cell_text(item),
            None => NOT_AVAILABLE.to_string(),
        }));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
