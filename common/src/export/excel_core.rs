//! Relatório Excel (biblioteca comum)
//!
//! Aba "Comparação" com a mesma grade do CSV e aba "Resumo" com os
//! indicadores e a lista de divergências.

use crate::error::{Error, Result};
use crate::export::csv_core::cell_text;
use crate::reducer::{columns, summarize};
use crate::summary::TextSummary;
use crate::table::{column_label, NOT_AVAILABLE};
use crate::types::AnalysisRow;
use rust_xlsxwriter::*;

const DAY_COL_WIDTH: f64 = 8.0;
const IMAGE_COL_WIDTH: f64 = 24.0;
const ITEM_COL_WIDTH: f64 = 26.0;

fn xlsx_error(context: &'static str) -> impl Fn(XlsxError) -> Error {
    move |e| Error::Export(format!("{}: {}", context, e))
}

/// Gera o .xlsx em memória
pub fn generate_excel_buffer(project_name: &str, rows: &[AnalysisRow]) -> Result<Vec<u8>> {
    let columns = columns(rows);
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xEEEEEE))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let ok_format = Format::new()
        .set_font_color(Color::RGB(0x16A34A))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let mismatch_format = Format::new()
        .set_font_color(Color::RGB(0xDC2626))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let muted_format = Format::new()
        .set_font_color(Color::RGB(0x888888))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // aba de comparação
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Comparação")
        .map_err(xlsx_error("Erro ao nomear aba"))?;

    sheet
        .set_column_width(0, DAY_COL_WIDTH)
        .map_err(xlsx_error("Erro de largura de coluna"))?;
    sheet
        .set_column_width(1, IMAGE_COL_WIDTH)
        .map_err(xlsx_error("Erro de largura de coluna"))?;

    sheet
        .write_string_with_format(0, 0, "Dia", &header_format)
        .map_err(xlsx_error("Erro no cabeçalho"))?;
    sheet
        .write_string_with_format(0, 1, "Imagem", &header_format)
        .map_err(xlsx_error("Erro no cabeçalho"))?;
    for (i, col) in columns.iter().enumerate() {
        let col_idx = (i + 2) as u16;
        sheet
            .set_column_width(col_idx, ITEM_COL_WIDTH)
            .map_err(xlsx_error("Erro de largura de coluna"))?;
        sheet
            .write_string_with_format(0, col_idx, column_label(col), &header_format)
            .map_err(xlsx_error("Erro no cabeçalho"))?;
    }
    sheet
        .set_freeze_panes(1, 0)
        .map_err(xlsx_error("Erro ao congelar cabeçalho"))?;

    for (r, row) in rows.iter().enumerate() {
        let row_idx = (r + 1) as u32;
        sheet
            .write_number(row_idx, 0, f64::from(row.dia))
            .map_err(xlsx_error("Erro ao escrever dia"))?;
        sheet
            .write_string(row_idx, 1, row.imagem.as_str())
            .map_err(xlsx_error("Erro ao escrever imagem"))?;

        for (i, col) in columns.iter().enumerate() {
            let col_idx = (i + 2) as u16;
            let result = match row.get(col) {
                Some(item) if item.is_ok() => {
                    sheet.write_string_with_format(row_idx, col_idx, cell_text(item), &ok_format)
                }
                Some(item) => {
                    sheet.write_string_with_format(row_idx, col_idx, cell_text(item), &mismatch_format)
                }
                None => sheet.write_string_with_format(row_idx, col_idx, NOT_AVAILABLE, &muted_format),
            };
            result.map_err(xlsx_error("Erro ao escrever célula"))?;
        }
    }

    // aba de resumo
    let reduced = summarize(rows, &columns);
    let text_summary = TextSummary::build(rows);

    let summary_sheet = workbook.add_worksheet();
    summary_sheet
        .set_name("Resumo")
        .map_err(xlsx_error("Erro ao nomear aba"))?;
    summary_sheet
        .set_column_width(0, 28.0)
        .map_err(xlsx_error("Erro de largura de coluna"))?;
    summary_sheet
        .set_column_width(1, 60.0)
        .map_err(xlsx_error("Erro de largura de coluna"))?;

    let indicators: [(&str, String); 5] = [
        ("Obra", project_name.to_string()),
        ("Progresso", format!("{:.0}%", reduced.progress_percent)),
        ("Itens OK", reduced.ok_items.to_string()),
        ("Itens avaliados", reduced.total_items.to_string()),
        ("Divergências", reduced.divergences.to_string()),
    ];
    for (i, (label, value)) in indicators.iter().enumerate() {
        summary_sheet
            .write_string_with_format(i as u32, 0, *label, &header_format)
            .map_err(xlsx_error("Erro no resumo"))?;
        summary_sheet
            .write_string(i as u32, 1, value.as_str())
            .map_err(xlsx_error("Erro no resumo"))?;
    }

    let first_note_row = indicators.len() as u32 + 1;
    for (i, note) in text_summary.divergences.iter().enumerate() {
        summary_sheet
            .write_string_with_format(first_note_row + i as u32, 1, note.line(), &mismatch_format)
            .map_err(xlsx_error("Erro no resumo"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(xlsx_error("Erro ao salvar Excel"))
}
