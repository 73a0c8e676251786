use bimtrack_common::{ProjectStatus, UserRole};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bimtrack")]
#[command(about = "Acompanhamento de obras: análise de fotos x planejamento", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log detalhado
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pasta de dados (obras e sessão)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lista as obras
    Projects {
        /// Busca por nome ou cliente
        #[arg(short, long)]
        search: Option<String>,

        /// Filtra por status (em-andamento/concluida)
        #[arg(long)]
        status: Option<ProjectStatus>,
    },

    /// Detalhes de uma obra com a tabela de comparação
    Show {
        #[arg(required = true)]
        id: String,
    },

    /// Indicadores gerais
    Dashboard,

    /// Envia planejamento + fotos para análise e grava o resultado
    Analyze {
        /// Id da obra
        #[arg(required = true)]
        id: String,

        /// Planilha de planejamento (.xlsx)
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// Fotos ou pasta de fotos
        #[arg(short, long, num_args = 1..)]
        images: Vec<PathBuf>,
    },

    /// Grava um resultado de análise salvo em JSON
    Import {
        #[arg(required = true)]
        id: String,

        /// Arquivo JSON (lista de linhas dia x item)
        #[arg(required = true)]
        input: PathBuf,
    },

    /// Exporta o relatório de comparação
    Report {
        #[arg(required = true)]
        id: String,

        /// Formato (csv/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// Arquivo ou pasta de saída
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apaga todas as obras salvas e volta aos dados iniciais
    Reset {
        /// Não pede confirmação
        #[arg(short, long)]
        yes: bool,
    },

    /// Login e conta
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// Mostra/edita a configuração
    Config {
        /// URL do serviço de análise
        #[arg(long)]
        set_analysis_url: Option<String>,

        /// URL base da API de autenticação
        #[arg(long)]
        set_api_url: Option<String>,

        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum AuthCommands {
    Login {
        #[arg(short, long)]
        email: String,

        /// Senha (pedida no terminal se omitida)
        #[arg(short, long)]
        password: Option<String>,
    },

    Register {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        /// Perfil (gestor/engenheiro/cliente)
        #[arg(short, long, default_value = "engenheiro")]
        role: UserRole,

        #[arg(short, long)]
        password: Option<String>,
    },

    Logout,

    /// Usuário da sessão atual
    Whoami,

    ChangePassword,

    UpdateAccount {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExportFormat {
    Csv,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Formato desconhecido: {}. Use csv, excel ou both", s)),
        }
    }
}
