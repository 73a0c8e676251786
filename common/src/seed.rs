//! Conjunto inicial de obras

use crate::types::Project;

const SEED: &[(&str, &str, &str)] = &[
    ("1", "Escola Municipal Jardim das Flores", "Prefeitura Municipal"),
    ("2", "Centro de Treinamento Metrô Norte", "Metrô Pública S.A."),
    ("3", "Biblioteca Pública Central", "Secretaria de Cultura"),
    ("4", "Auditório Campus Leste", "Universidade Federal"),
];

/// Obras iniciais, todas sem análise e com progresso zerado
pub fn seed_projects() -> Vec<Project> {
    SEED.iter()
        .map(|(id, name, client)| Project::new(*id, *name, *client))
        .collect()
}
