//! Exportação do relatório de comparação
//!
//! - csv_core: texto separado por ";" com BOM (compatível com Excel antigo)
//! - excel_core: planilha .xlsx com a mesma grade (feature `excel`)

pub mod csv_core;

#[cfg(feature = "excel")]
pub mod excel_core;
