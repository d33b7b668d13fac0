use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Stored pair of generated files for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: Uuid,
    pub client_name: String,
    pub pdf_path: Option<PathBuf>,
    pub excel_path: Option<PathBuf>,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}

impl FileRecord {
    pub fn new(client_name: impl Into<String>, uploaded_by: impl Into<String>) -> Self {
        FileRecord {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            pdf_path: None,
            excel_path: None,
            uploaded_by: uploaded_by.into(),
            created_at: Utc::now(),
        }
    }

    pub fn with_artifacts(mut self, pdf_path: PathBuf, excel_path: PathBuf) -> Self {
        self.pdf_path = Some(pdf_path);
        self.excel_path = Some(excel_path);
        self
    }
}

/// Audit event: which admin added which client, and when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientAddition {
    pub id: Uuid,
    pub admin_id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl ClientAddition {
    pub fn new(admin_id: impl Into<String>, client_name: impl Into<String>) -> Self {
        ClientAddition {
            id: Uuid::new_v4(),
            admin_id: admin_id.into(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientFilter {
    pub uploader: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl ClientFilter {
    pub fn matches_file(&self, record: &FileRecord) -> bool {
        self.uploader
            .as_deref()
            .map_or(true, |uploader| record.uploaded_by == uploader)
    }

    pub fn matches_addition(&self, event: &ClientAddition) -> bool {
        let uploader_ok = self
            .uploader
            .as_deref()
            .map_or(true, |uploader| event.admin_id == uploader);
        let month_ok = self.month.map_or(true, |m| event.timestamp.month() == m);
        let year_ok = self.year.map_or(true, |y| event.timestamp.year() == y);

        uploader_ok && month_ok && year_ok
    }
}
