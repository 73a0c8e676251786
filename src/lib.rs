//! BIMTrack CLI
//!
//! Configuração, armazenamento em disco, clientes HTTP (análise e
//! autenticação), validação de envio e exportação de relatórios.

pub mod analyzer;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod scanner;
pub mod storage;

#[cfg(test)]
mod mock_server;
