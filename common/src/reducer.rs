//! Redução do resultado de análise
//!
//! Transforma a tabela bruta (dia x item) nos valores derivados gravados na
//! obra: percentual de conclusão e quantidade de divergências.

use crate::types::{AnalysisRow, ItemResult};
use std::collections::HashSet;

/// Classificação de uma célula pelas contagens brutas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellComparison {
    Exact,
    /// Faltam `n` itens
    Shortage(u32),
    /// Sobram `n` itens
    Surplus(u32),
}

impl ItemResult {
    pub fn compare(&self) -> CellComparison {
        use std::cmp::Ordering;
        match self.detectado.cmp(&self.esperado) {
            Ordering::Equal => CellComparison::Exact,
            Ordering::Less => CellComparison::Shortage(self.esperado - self.detectado),
            Ordering::Greater => CellComparison::Surplus(self.detectado - self.esperado),
        }
    }
}

/// Valores derivados de um resultado
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSummary {
    pub total_items: usize,
    pub ok_items: usize,
    pub divergences: usize,
    pub progress_percent: f64,
}

/// Colunas de itens, na ordem da primeira linha
pub fn columns(rows: &[AnalysisRow]) -> Vec<String> {
    rows.first()
        .map(|row| row.item_names().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Reduz a tabela bruta
///
/// `total = linhas x colunas`; células ausentes contam como divergência.
pub fn summarize(rows: &[AnalysisRow], columns: &[String]) -> AnalysisSummary {
    let total_items = rows.len() * columns.len();
    let ok_items = rows
        .iter()
        .flat_map(|row| columns.iter().filter_map(move |col| row.get(col)))
        .filter(|item| item.is_ok())
        .count();
    let divergences = total_items - ok_items;
    let progress_percent = if total_items == 0 {
        0.0
    } else {
        100.0 * ok_items as f64 / total_items as f64
    };

    AnalysisSummary {
        total_items,
        ok_items,
        divergences,
        progress_percent,
    }
}

/// Atalho: colunas da primeira linha + redução
pub fn reduce(rows: &[AnalysisRow]) -> AnalysisSummary {
    summarize(rows, &columns(rows))
}

/// Primeiro `dia` repetido, se houver
pub fn find_duplicate_day(rows: &[AnalysisRow]) -> Option<u32> {
    let mut seen = HashSet::new();
    rows.iter().map(|r| r.dia).find(|dia| !seen.insert(*dia))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(dia: u32, items: &[(&str, u32, u32, &str)]) -> AnalysisRow {
        items.iter().fold(AnalysisRow::new(dia, format!("dia{}.jpg", dia)), |row, (n, d, e, s)| {
            row.with_item(*n, ItemResult::new(*d, *e, *s))
        })
    }

    #[test]
    fn test_all_ok_is_complete() {
        let rows = vec![
            row(1, &[("cadeira", 10, 10, "OK"), ("mesa", 5, 5, "OK")]),
            row(2, &[("cadeira", 12, 12, "OK"), ("mesa", 6, 6, "OK")]),
        ];
        let summary = reduce(&rows);
        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.ok_items, 4);
        assert_eq!(summary.divergences, 0);
        assert_eq!(summary.progress_percent, 100.0);
    }

    #[test]
    fn test_single_shortage() {
        let rows = vec![row(1, &[("cadeira", 3, 5, "❌")])];
        let summary = reduce(&rows);
        assert_eq!(summary.progress_percent, 0.0);
        assert_eq!(summary.divergences, 1);
        assert_eq!(rows[0].get("cadeira").unwrap().compare(), CellComparison::Shortage(2));
    }

    #[test]
    fn test_empty_rows() {
        let summary = reduce(&[]);
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.divergences, 0);
        assert_eq!(summary.progress_percent, 0.0);
    }

    #[test]
    fn test_rows_without_items() {
        let rows = vec![AnalysisRow::new(1, "a.jpg")];
        let summary = reduce(&rows);
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.progress_percent, 0.0);
    }

    #[test]
    fn test_partial_progress() {
        let rows = vec![
            row(1, &[("cadeira", 10, 10, "OK"), ("mesa", 4, 5, "❌ Faltam 1"), ("projetor", 1, 1, "OK")]),
        ];
        let summary = reduce(&rows);
        assert_eq!(summary.ok_items, 2);
        assert_eq!(summary.divergences, 1);
        assert!((summary.progress_percent - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_missing_cell_counts_as_divergence() {
        let rows = vec![
            row(1, &[("cadeira", 10, 10, "OK"), ("mesa", 5, 5, "OK")]),
            row(2, &[("cadeira", 10, 10, "OK")]),
        ];
        let summary = reduce(&rows);
        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.ok_items, 3);
        assert_eq!(summary.divergences, 1);
    }

    #[test]
    fn test_columns_from_first_row_only() {
        let rows = vec![
            row(1, &[("cadeira", 1, 1, "OK")]),
            row(2, &[("cadeira", 1, 1, "OK"), ("lousa", 1, 1, "OK")]),
        ];
        assert_eq!(columns(&rows), vec!["cadeira".to_string()]);
        // a coluna extra da segunda linha fica fora da contagem
        assert_eq!(reduce(&rows).total_items, 2);
    }

    #[test]
    fn test_status_is_case_sensitive() {
        let rows = vec![row(1, &[("cadeira", 1, 1, "ok")])];
        assert_eq!(reduce(&rows).ok_items, 0);
    }

    #[test]
    fn test_compare() {
        assert_eq!(ItemResult::new(5, 5, "OK").compare(), CellComparison::Exact);
        assert_eq!(ItemResult::new(7, 5, "❌").compare(), CellComparison::Surplus(2));
        assert_eq!(ItemResult::new(0, 5, "❌").compare(), CellComparison::Shortage(5));
    }

    #[test]
    fn test_find_duplicate_day() {
        let rows = vec![row(1, &[]), row(2, &[]), row(1, &[])];
        assert_eq!(find_duplicate_day(&rows), Some(1));
        assert_eq!(find_duplicate_day(&rows[..2]), None);
    }
}
