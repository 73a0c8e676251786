//! Tabela de comparação (caminho de exibição)
//!
//! Célula ausente na linha vira `N/A`; a classificação falta/sobra é
//! recalculada pelas contagens, independente do status do serviço.

use crate::reducer::{columns, CellComparison};
use crate::types::{AnalysisRow, ItemResult};

/// Texto exibido para célula ausente
pub const NOT_AVAILABLE: &str = "N/A";

/// Rótulo de coluna: `cadeira_aluno` -> `cadeira aluno`
pub fn column_label(key: &str) -> String {
    key.replace('_', " ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub detectado: u32,
    pub esperado: u32,
    pub status: String,
    pub comparison: CellComparison,
    /// Status marcado pelo serviço como divergente (prefixo "❌")
    pub mismatch: bool,
}

impl CellView {
    fn from_item(item: &ItemResult) -> Self {
        Self {
            detectado: item.detectado,
            esperado: item.esperado,
            status: item.status.clone(),
            comparison: item.compare(),
            mismatch: item.status.starts_with('❌'),
        }
    }

    /// `3 / 5 (❌ Faltam 2)`
    pub fn display(&self) -> String {
        format!("{} / {} ({})", self.detectado, self.esperado, self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub dia: u32,
    pub imagem: String,
    pub cells: Vec<Option<CellView>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparisonTable {
    /// Chaves de item, na ordem da primeira linha
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl ComparisonTable {
    pub fn build(rows: &[AnalysisRow]) -> Self {
        let columns = columns(rows);
        let rows = rows
            .iter()
            .map(|row| TableRow {
                dia: row.dia,
                imagem: row.imagem.clone(),
                cells: columns
                    .iter()
                    .map(|col| row.get(col).map(CellView::from_item))
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    /// Cabeçalho exibido: Dia, Imagem, itens
    pub fn header(&self) -> Vec<String> {
        let mut header = vec!["Dia".to_string(), "Imagem".to_string()];
        header.extend(self.columns.iter().map(|c| column_label(c)));
        header
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renderização em texto alinhado (para terminal)
    pub fn render_text(&self) -> String {
        let header = self.header();
        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                let mut line = vec![row.dia.to_string(), row.imagem.clone()];
                line.extend(row.cells.iter().map(|cell| match cell {
                    Some(cell) => cell.display(),
                    None => NOT_AVAILABLE.to_string(),
                }));
                line
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for line in &body {
            for (i, cell) in line.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let format_line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut out = format_line(&header);
        out.push('\n');
        out.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for line in &body {
            out.push('\n');
            out.push_str(&format_line(line));
        }
        out
    }
}
