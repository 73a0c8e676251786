//! Resumo textual das divergências
//!
//! Toda célula presente com status diferente de "OK" entra como divergência,
//! com falta = esperado - detectado (pode ser negativa). Células ausentes não
//! entram na contagem, então os totais podem diferir de `reducer::summarize`.

use crate::reducer::columns;
use crate::table::column_label;
use crate::types::AnalysisRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergenceNote {
    pub dia: u32,
    pub item: String,
    pub detectado: u32,
    pub esperado: u32,
    pub status: String,
    pub missing: i64,
}

impl DivergenceNote {
    pub fn line(&self) -> String {
        format!(
            "Dia {}: {} - faltam {} ({}/{}, {})",
            self.dia,
            column_label(&self.item),
            self.missing,
            self.detectado,
            self.esperado,
            self.status
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextSummary {
    /// Células presentes
    pub counted_cells: usize,
    pub ok_cells: usize,
    pub divergences: Vec<DivergenceNote>,
}

impl TextSummary {
    pub fn build(rows: &[AnalysisRow]) -> Self {
        let columns = columns(rows);
        let mut summary = TextSummary::default();

        for row in rows {
            for col in &columns {
                let Some(item) = row.get(col) else {
                    continue;
                };
                summary.counted_cells += 1;
                if item.is_ok() {
                    summary.ok_cells += 1;
                } else {
                    summary.divergences.push(DivergenceNote {
                        dia: row.dia,
                        item: col.clone(),
                        detectado: item.detectado,
                        esperado: item.esperado,
                        status: item.status.clone(),
                        missing: item.esperado as i64 - item.detectado as i64,
                    });
                }
            }
        }

        summary
    }

    pub fn progress_percent(&self) -> f64 {
        if self.counted_cells == 0 {
            0.0
        } else {
            100.0 * self.ok_cells as f64 / self.counted_cells as f64
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "Progresso: {:.0}% ({} de {} itens OK)\nDivergências: {}",
            self.progress_percent(),
            self.ok_cells,
            self.counted_cells,
            self.divergences.len()
        );
        for note in &self.divergences {
            out.push_str("\n- ");
            out.push_str(&note.line());
        }
        out
    }
}
