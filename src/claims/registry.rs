use std::sync::RwLock;

use uuid::Uuid;

use crate::core::{DocumentError, DocumentResult};
use crate::models::{ClientAddition, ClientFilter, FileRecord};

/// Almacén de registros de archivos y altas de clientes
pub trait FileRegistry: Send + Sync {
    fn record_file(&self, record: FileRecord) -> DocumentResult<()>;
    fn record_addition(&self, addition: ClientAddition) -> DocumentResult<()>;

    /// Deshace un registro que no llegó a publicarse
    fn remove_file(&self, id: Uuid) -> DocumentResult<()>;
    fn remove_addition(&self, id: Uuid) -> DocumentResult<()>;

    /// Registros que cumplen el filtro, más recientes primero
    fn files(&self, filter: &ClientFilter) -> DocumentResult<Vec<FileRecord>>;
    fn additions(&self, filter: &ClientFilter) -> DocumentResult<Vec<ClientAddition>>;
}

#[derive(Default)]
pub struct MemoryRegistry {
    files: RwLock<Vec<FileRecord>>,
    additions: RwLock<Vec<ClientAddition>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> DocumentError {
    DocumentError::Registry("lock envenenado".to_string())
}

impl FileRegistry for MemoryRegistry {
    fn record_file(&self, record: FileRecord) -> DocumentResult<()> {
        self.files.write().map_err(poisoned)?.push(record);
        Ok(())
    }

    fn record_addition(&self, addition: ClientAddition) -> DocumentResult<()> {
        self.additions.write().map_err(poisoned)?.push(addition);
        Ok(())
    }

    fn remove_file(&self, id: Uuid) -> DocumentResult<()> {
        self.files.write().map_err(poisoned)?.retain(|record| record.id != id);
        Ok(())
    }

    fn remove_addition(&self, id: Uuid) -> DocumentResult<()> {
        self.additions.write().map_err(poisoned)?.retain(|event| event.id != id);
        Ok(())
    }

    fn files(&self, filter: &ClientFilter) -> DocumentResult<Vec<FileRecord>> {
        let files = self.files.read().map_err(poisoned)?;
        let mut matching: Vec<_> = files
            .iter()
            .filter(|record| filter.matches_file(record))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    fn additions(&self, filter: &ClientFilter) -> DocumentResult<Vec<ClientAddition>> {
        let additions = self.additions.read().map_err(poisoned)?;
        let mut matching: Vec<_> = additions
            .iter()
            .filter(|event| filter.matches_addition(event))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(matching)
    }
}
