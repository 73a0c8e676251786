//! Store de obras
//!
//! Coleção durável de obras com a última análise de cada uma. Toda escrita
//! passa por `save_analysis` ou `reset`; após gravar, os ouvintes inscritos
//! são avisados em ordem de inscrição e podem reler o store.

use crate::error::Result;
use crate::seed::seed_projects;
use crate::storage::KeyValueStorage;
use crate::types::{AnalysisRow, Project, ProjectStatus};
use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Chave fixa da coleção persistida
pub const STORAGE_KEY: &str = "metro_publica_projects_v2";

/// Aviso de alteração do store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    AnalysisSaved { project_id: String },
    Reset,
}

/// Identificador de inscrição, usado para cancelar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&StoreEvent)>;

/// Capacidade do store de obras
pub trait ProjectStore {
    /// Todas as obras na ordem persistida; semeia na primeira chamada
    fn list(&self) -> Result<Vec<Project>>;

    fn get_by_id(&self, id: &str) -> Result<Option<Project>> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    /// Grava o resultado de uma análise. Id desconhecido: nada acontece.
    fn save_analysis(
        &self,
        id: &str,
        progress: f64,
        alerts_count: u32,
        rows: Vec<AnalysisRow>,
    ) -> Result<()>;

    /// Apaga todo o estado; a próxima listagem volta ao conjunto inicial
    fn reset(&self) -> Result<()>;

    fn subscribe(&self, listener: Box<dyn Fn(&StoreEvent)>) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// Store sobre um armazenamento chave-valor injetado
pub struct LocalProjectStore<S: KeyValueStorage> {
    storage: S,
    seed: Vec<Project>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
}

impl<S: KeyValueStorage> LocalProjectStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_seed(storage, seed_projects())
    }

    pub fn with_seed(storage: S, seed: Vec<Project>) -> Self {
        Self {
            storage,
            seed,
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self, projects: &[Project]) -> Result<()> {
        let json = serde_json::to_string(projects)?;
        self.storage.set(STORAGE_KEY, &json)
    }

    fn notify(&self, event: StoreEvent) {
        // cópia: o ouvinte pode se inscrever/cancelar durante o aviso
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(&event);
        }
    }
}

impl<S: KeyValueStorage> ProjectStore for LocalProjectStore<S> {
    fn list(&self) -> Result<Vec<Project>> {
        if let Some(stored) = self.storage.get(STORAGE_KEY)? {
            return Ok(serde_json::from_str(&stored)?);
        }

        let projects = self.seed.clone();
        self.persist(&projects)?;
        Ok(projects)
    }

    fn save_analysis(
        &self,
        id: &str,
        progress: f64,
        alerts_count: u32,
        rows: Vec<AnalysisRow>,
    ) -> Result<()> {
        let mut projects = self.list()?;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(());
        };

        let progress = progress.round().clamp(0.0, 100.0) as u8;
        project.progress = progress;
        project.alerts_count = alerts_count;
        project.has_analysis = true;
        project.last_analysis_date = Some(Utc::now());
        project.analysis_data = Some(rows);
        project.status = ProjectStatus::from_progress(progress);

        self.persist(&projects)?;
        self.notify(StoreEvent::AnalysisSaved {
            project_id: id.to_string(),
        });
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        self.storage.remove(STORAGE_KEY)?;
        self.notify(StoreEvent::Reset);
        Ok(())
    }

    fn subscribe(&self, listener: Box<dyn Fn(&StoreEvent)>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() != before
    }
}
