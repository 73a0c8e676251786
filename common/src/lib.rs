//! BIMTrack Common Library
//!
//! Tipos, redução do resultado de análise e store de obras, compartilhados
//! pela CLI e por qualquer frontend.

pub mod types;
pub mod error;
pub mod reducer;
pub mod storage;
pub mod seed;
pub mod store;
pub mod dashboard;
pub mod table;
pub mod summary;
pub mod export;

pub use types::{AnalysisRow, ItemResult, Project, ProjectStatus, User, UserRole, STATUS_OK};
pub use error::{Error, Result};
pub use reducer::{columns, find_duplicate_day, reduce, summarize, AnalysisSummary, CellComparison};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{LocalProjectStore, ProjectStore, StoreEvent, SubscriptionId, STORAGE_KEY};
pub use dashboard::{DashboardStats, ProjectFilter};
pub use table::ComparisonTable;
pub use summary::TextSummary;
