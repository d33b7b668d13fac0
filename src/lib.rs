pub mod api;
pub mod claims;
pub mod core;
pub mod excel;
pub mod generators;
pub mod metrics;
pub mod models;
pub mod pdf;

// Re-export commonly used types
pub use crate::core::{AppConfig, DocumentError, DocumentResult, RenderStyle};
pub use models::{ClaimPackage, ClaimSubmission, EstimateRecord, LineItem};

pub use claims::{ClaimService, FileRegistry, MemoryRegistry};
pub use generators::{
    compose_claim, compose_document, compose_workbook, ComposerSettings, DocumentComposer,
    GeneratedArtifacts, Renderer, WorkbookComposer,
};
