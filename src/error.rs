use thiserror::Error;

#[derive(Error, Debug)]
pub enum BimTrackError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    /// Falha de validação, detectada antes de qualquer chamada de rede
    #[error("{0}")]
    Validation(String),

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Pasta não encontrada: {0}")]
    FolderNotFound(String),

    #[error("Planilha de planejamento inválida: {0}")]
    PlanRead(String),

    #[error("Nenhuma imagem encontrada em: {0}")]
    NoImagesFound(String),

    #[error("Obra não encontrada: {0}")]
    ProjectNotFound(String),

    #[error("Não foi possível conectar ao servidor de análise.")]
    AnalysisUnreachable,

    #[error("Erro de conexão com o servidor")]
    AuthUnreachable,

    /// Mensagem de erro devolvida pelo serviço, exibida como veio
    #[error("{0}")]
    Service(String),

    #[error("Erro do servidor de análise (HTTP {0})")]
    AnalysisFailed(u16),

    #[error("Resposta inválida do servidor: {0}")]
    ApiParse(String),

    #[error("E-mail ou senha inválidos")]
    InvalidCredentials,

    #[error("Cadastro recusado: {0}")]
    RegistrationRejected(String),

    #[error("Usuário não autenticado")]
    NotAuthenticated,

    #[error("Erro ao preparar requisição: {0}")]
    Request(String),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] bimtrack_common::Error),
}

impl BimTrackError {
    /// Erros de conectividade (mensagem genérica ao usuário)
    pub fn is_connection(&self) -> bool {
        matches!(self, BimTrackError::AnalysisUnreachable | BimTrackError::AuthUnreachable)
    }
}

pub type Result<T> = std::result::Result<T, BimTrackError>;
