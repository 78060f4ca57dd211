//! Ephemeral storage backend.
//!
//! Each entity lives in its own `Mutex`-guarded table held for the process
//! lifetime and lost on restart. Every operation takes the lock for exactly
//! one read or write, so concurrent writers are serialized rather than
//! merged. Tables keep insertion order, which is also the listing order.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    CarbonEmissionRepository, FinancingSchemeRepository, ProjectRepository,
    RegionalCapacityRepository, StorageError, StoragePorts,
};
use crate::domain::{
    CarbonEmission, FinancingScheme, NewCarbonEmission, NewFinancingScheme, NewProject,
    NewRegionalCapacity, Project, RecordId, RegionalCapacity,
};

#[derive(Default)]
struct Tables {
    projects: Mutex<Vec<Project>>,
    carbon_emissions: Mutex<Vec<CarbonEmission>>,
    financing_schemes: Mutex<Vec<FinancingScheme>>,
    regional_capacity: Mutex<Vec<RegionalCapacity>>,
}

/// In-memory implementation of every storage port.
///
/// Clones share the same tables. Unlike the durable backend, regional
/// capacity states are not required to be unique; [`find_by_state`]
/// returns the earliest inserted match.
///
/// [`find_by_state`]: RegionalCapacityRepository::find_by_state
///
/// # Examples
/// ```
/// use backend::domain::ports::ProjectRepository;
/// use backend::outbound::memory::MemoryStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = MemoryStore::new();
/// assert!(ProjectRepository::list(&store).await.unwrap().is_empty());
/// # });
/// ```
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Tables>,
}

fn lock<'a, T>(
    table: &'a Mutex<Vec<T>>,
    name: &str,
) -> Result<MutexGuard<'a, Vec<T>>, StorageError> {
    table
        .lock()
        .map_err(|_| StorageError::query(format!("{name} table lock poisoned")))
}

fn snapshot<T: Clone>(table: &Mutex<Vec<T>>, name: &str) -> Result<Vec<T>, StorageError> {
    Ok(lock(table, name)?.clone())
}

fn find<T: Clone>(
    table: &Mutex<Vec<T>>,
    name: &str,
    pred: impl Fn(&T) -> bool,
) -> Result<Option<T>, StorageError> {
    Ok(lock(table, name)?.iter().find(|row| pred(row)).cloned())
}

fn insert<T: Clone>(table: &Mutex<Vec<T>>, name: &str, row: T) -> Result<T, StorageError> {
    lock(table, name)?.push(row.clone());
    Ok(row)
}

fn remove<T>(
    table: &Mutex<Vec<T>>,
    name: &str,
    pred: impl Fn(&T) -> bool,
) -> Result<bool, StorageError> {
    let mut rows = lock(table, name)?;
    let before = rows.len();
    rows.retain(|row| !pred(row));
    Ok(rows.len() != before)
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out this store as every storage port.
    pub fn into_ports(self) -> StoragePorts {
        let shared = Arc::new(self);
        StoragePorts {
            projects: shared.clone(),
            carbon_emissions: shared.clone(),
            financing_schemes: shared.clone(),
            regional_capacity: shared,
        }
    }
}

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Project>, StorageError> {
        snapshot(&self.tables.projects, "projects")
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Project>, StorageError> {
        find(&self.tables.projects, "projects", |p| p.id == *id)
    }

    async fn create(&self, payload: NewProject) -> Result<Project, StorageError> {
        let row = payload.into_record(RecordId::random(), Utc::now());
        insert(&self.tables.projects, "projects", row)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError> {
        remove(&self.tables.projects, "projects", |p| p.id == *id)
    }
}

#[async_trait]
impl CarbonEmissionRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<CarbonEmission>, StorageError> {
        snapshot(&self.tables.carbon_emissions, "carbon_emissions")
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<CarbonEmission>, StorageError> {
        find(&self.tables.carbon_emissions, "carbon_emissions", |e| {
            e.id == *id
        })
    }

    async fn create(&self, payload: NewCarbonEmission) -> Result<CarbonEmission, StorageError> {
        let row = payload.into_record(RecordId::random(), Utc::now());
        insert(&self.tables.carbon_emissions, "carbon_emissions", row)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError> {
        remove(&self.tables.carbon_emissions, "carbon_emissions", |e| {
            e.id == *id
        })
    }
}

#[async_trait]
impl FinancingSchemeRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<FinancingScheme>, StorageError> {
        snapshot(&self.tables.financing_schemes, "financing_schemes")
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<FinancingScheme>, StorageError> {
        find(&self.tables.financing_schemes, "financing_schemes", |s| {
            s.id == *id
        })
    }

    async fn create(&self, payload: NewFinancingScheme) -> Result<FinancingScheme, StorageError> {
        let row = payload.into_record(RecordId::random());
        insert(&self.tables.financing_schemes, "financing_schemes", row)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError> {
        remove(&self.tables.financing_schemes, "financing_schemes", |s| {
            s.id == *id
        })
    }
}

#[async_trait]
impl RegionalCapacityRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<RegionalCapacity>, StorageError> {
        snapshot(&self.tables.regional_capacity, "regional_capacity")
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<RegionalCapacity>, StorageError> {
        find(&self.tables.regional_capacity, "regional_capacity", |r| {
            r.id == *id
        })
    }

    async fn find_by_state(&self, state: &str) -> Result<Option<RegionalCapacity>, StorageError> {
        find(&self.tables.regional_capacity, "regional_capacity", |r| {
            r.state == state
        })
    }

    async fn create(
        &self,
        payload: NewRegionalCapacity,
    ) -> Result<RegionalCapacity, StorageError> {
        let row = payload.into_record(RecordId::random());
        insert(&self.tables.regional_capacity, "regional_capacity", row)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError> {
        remove(&self.tables.regional_capacity, "regional_capacity", |r| {
            r.id == *id
        })
    }
}
