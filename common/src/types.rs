//! Tipos compartilhados
//!
//! - Project: obra acompanhada localmente (persistida)
//! - AnalysisRow: uma linha do resultado do serviço de análise (um dia)
//! - ItemResult: contagem detectada x esperada de um item em um dia
//! - User / UserRole: perfil devolvido pelo serviço de autenticação

use chrono::{DateTime, Utc};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status canônico de igualdade exata devolvido pelo serviço de análise
pub const STATUS_OK: &str = "OK";

/// Situação da obra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "em-andamento")]
    InProgress,
    #[serde(rename = "concluida")]
    Completed,
}

impl ProjectStatus {
    /// `concluida` somente com progresso total
    pub fn from_progress(progress: u8) -> Self {
        if progress >= 100 {
            ProjectStatus::Completed
        } else {
            ProjectStatus::InProgress
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "em-andamento",
            ProjectStatus::Completed => "concluida",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "Em andamento",
            ProjectStatus::Completed => "Concluída",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "em-andamento" | "andamento" | "in-progress" => Ok(ProjectStatus::InProgress),
            "concluida" | "concluída" | "completed" => Ok(ProjectStatus::Completed),
            _ => Err(format!("Status desconhecido: {}. Use em-andamento ou concluida", s)),
        }
    }
}

/// Obra acompanhada
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,

    /// Percentual inteiro 0..=100, derivado da última análise
    pub progress: u8,

    pub status: ProjectStatus,

    /// Quantidade de divergências da última análise
    pub alerts_count: u32,

    #[serde(default)]
    pub has_analysis: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_analysis_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_data: Option<Vec<AnalysisRow>>,
}

impl Project {
    /// Obra recém-criada, ainda sem análise
    pub fn new(id: impl Into<String>, name: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            client: client.into(),
            progress: 0,
            status: ProjectStatus::InProgress,
            alerts_count: 0,
            has_analysis: false,
            last_analysis_date: None,
            analysis_data: None,
        }
    }

    pub fn rows(&self) -> &[AnalysisRow] {
        self.analysis_data.as_deref().unwrap_or(&[])
    }
}

/// Resultado de um item em um dia
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemResult {
    pub detectado: u32,
    pub esperado: u32,
    #[serde(default)]
    pub status: String,
}

impl ItemResult {
    pub fn new(detectado: u32, esperado: u32, status: impl Into<String>) -> Self {
        Self {
            detectado,
            esperado,
            status: status.into(),
        }
    }

    /// Comparação exata de string, sensível a maiúsculas
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Linha do resultado: um dia, uma imagem, N itens
///
/// No JSON os itens são chaves irmãs de `dia` e `imagem`; a ordem das chaves
/// é preservada na leitura e na escrita.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisRow {
    pub dia: u32,
    pub imagem: String,
    pub items: Vec<(String, ItemResult)>,
}

impl AnalysisRow {
    pub fn new(dia: u32, imagem: impl Into<String>) -> Self {
        Self {
            dia,
            imagem: imagem.into(),
            items: Vec::new(),
        }
    }

    /// Adiciona (ou substitui) um item mantendo a posição original
    pub fn with_item(mut self, name: impl Into<String>, result: ItemResult) -> Self {
        self.insert(name.into(), result);
        self
    }

    pub fn insert(&mut self, name: String, result: ItemResult) {
        match self.items.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = result,
            None => self.items.push((name, result)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ItemResult> {
        self.items.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for AnalysisRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len() + 2))?;
        map.serialize_entry("dia", &self.dia)?;
        map.serialize_entry("imagem", &self.imagem)?;
        for (name, result) in &self.items {
            map.serialize_entry(name, result)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AnalysisRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AnalysisRowVisitor)
    }
}

struct AnalysisRowVisitor;

impl<'de> Visitor<'de> for AnalysisRowVisitor {
    type Value = AnalysisRow;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("um objeto com `dia`, `imagem` e itens")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<AnalysisRow, A::Error> {
        let mut dia: Option<u32> = None;
        let mut imagem: Option<String> = None;
        let mut row = AnalysisRow::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "dia" => {
                    if dia.is_some() {
                        return Err(de::Error::duplicate_field("dia"));
                    }
                    dia = Some(map.next_value()?);
                }
                "imagem" => {
                    imagem = Some(map.next_value()?);
                }
                _ => {
                    // valores que não são objeto de item ficam como célula ausente (N/A)
                    let value: serde_json::Value = map.next_value()?;
                    if let Ok(result) = serde_json::from_value::<ItemResult>(value) {
                        row.insert(key, result);
                    }
                }
            }
        }

        row.dia = dia.ok_or_else(|| de::Error::missing_field("dia"))?;
        row.imagem = imagem.unwrap_or_default();
        Ok(row)
    }
}

/// Perfil de acesso (enumeração fixa do serviço de autenticação)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Gestor,
    Engenheiro,
    Cliente,
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gestor" => Ok(UserRole::Gestor),
            "engenheiro" => Ok(UserRole::Engenheiro),
            "cliente" => Ok(UserRole::Cliente),
            _ => Err(format!("Perfil desconhecido: {}. Use gestor, engenheiro ou cliente", s)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Gestor => "gestor",
            UserRole::Engenheiro => "engenheiro",
            UserRole::Cliente => "cliente",
        };
        f.write_str(s)
    }
}

/// Usuário autenticado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub avatar_url: String,
}

impl User {
    /// Avatar gerado a partir do nome
    pub fn with_avatar(mut self) -> Self {
        self.avatar_url = format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", self.name);
        self
    }
}
