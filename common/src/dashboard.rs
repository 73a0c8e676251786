//! Indicadores do painel e filtro da lista de obras

use crate::types::{Project, ProjectStatus};

/// KPIs do painel
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub total_alerts: u64,
    pub analysed_projects: usize,
    /// Média de progresso entre as obras já analisadas
    pub average_progress: Option<f64>,
}

impl DashboardStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let active_projects = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::InProgress)
            .count();
        let completed_projects = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count();
        let total_alerts = projects.iter().map(|p| p.alerts_count as u64).sum();

        let analysed: Vec<&Project> = projects.iter().filter(|p| p.has_analysis).collect();
        let average_progress = if analysed.is_empty() {
            None
        } else {
            let sum: u32 = analysed.iter().map(|p| p.progress as u32).sum();
            Some(sum as f64 / analysed.len() as f64)
        };

        Self {
            total_projects: projects.len(),
            active_projects,
            completed_projects,
            total_alerts,
            analysed_projects: analysed.len(),
            average_progress,
        }
    }
}

/// Filtro da lista de obras (busca + status)
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub query: String,
    /// `None` = todos
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    pub fn new(query: impl Into<String>, status: Option<ProjectStatus>) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || project.name.to_lowercase().contains(&query)
            || project.client.to_lowercase().contains(&query)
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}
