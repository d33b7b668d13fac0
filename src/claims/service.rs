use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::core::{load_logo_or_skip, DocumentError, DocumentResult};
use crate::generators::{stage_pair, ComposerSettings, GeneratedArtifacts, Renderer, WorkbookComposer};
use crate::metrics::ClaimMetrics;
use crate::models::{ClaimSubmission, ClientAddition, ClientFilter, FileRecord};

use super::FileRegistry;

/// Resultado de finalizar un reclamo
#[derive(Debug, Clone)]
pub struct FinalizedClaim {
    pub record: FileRecord,
    pub addition: ClientAddition,
    pub artifacts: GeneratedArtifacts,
}

/// Orquesta la generación del par PDF + XLSX y su registro
pub struct ClaimService {
    document: Arc<dyn Renderer>,
    workbook: Arc<dyn Renderer>,
    logo_path: PathBuf,
    registry: Arc<dyn FileRegistry>,
    metrics: Option<ClaimMetrics>,
}

impl ClaimService {
    pub fn new(settings: &ComposerSettings, logo_path: impl Into<PathBuf>, registry: Arc<dyn FileRegistry>) -> Self {
        Self::with_renderers(
            Arc::new(settings.document_composer()),
            Arc::new(WorkbookComposer::new(settings.style.clone(), &settings.output_dir)),
            logo_path,
            registry,
        )
    }

    pub fn with_renderers(
        document: Arc<dyn Renderer>,
        workbook: Arc<dyn Renderer>,
        logo_path: impl Into<PathBuf>,
        registry: Arc<dyn FileRegistry>,
    ) -> Self {
        ClaimService {
            document,
            workbook,
            logo_path: logo_path.into(),
            registry,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: ClaimMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Genera y registra los archivos del reclamo.
    ///
    /// Los destinos solo se reemplazan después de registrar; ante cualquier
    /// fallo quedan en disco los archivos de la finalización anterior.
    pub fn finalize(&self, submission: ClaimSubmission, uploader: &str) -> DocumentResult<FinalizedClaim> {
        let started = Instant::now();
        let result = self.finalize_inner(submission, uploader);

        if let Some(metrics) = &self.metrics {
            metrics.generation_duration.observe(started.elapsed().as_secs_f64());
            match &result {
                Ok(_) => {
                    metrics.documents_generated.with_label_values(&["pdf"]).inc();
                    metrics.documents_generated.with_label_values(&["xlsx"]).inc();
                }
                Err(_) => metrics.generation_failures.inc(),
            }
        }
        result
    }

    fn finalize_inner(&self, submission: ClaimSubmission, uploader: &str) -> DocumentResult<FinalizedClaim> {
        let package = submission.into_package()?;
        let logo = load_logo_or_skip(&self.logo_path);
        let staged = stage_pair(self.document.as_ref(), self.workbook.as_ref(), &package, logo.as_ref())?;
        let destinations = staged.destinations();

        let record = FileRecord::new(&package.client_name, uploader)
            .with_artifacts(destinations.document.clone(), destinations.workbook.clone());
        let addition = ClientAddition::new(uploader, &package.client_name);
        self.record(&record, &addition)?;

        let artifacts = match staged.commit() {
            Ok(artifacts) => artifacts,
            Err(e) => {
                tracing::error!(client = %package.client_name, error = %e, "no se pudieron publicar los archivos, se deshace el registro");
                let _ = self.registry.remove_file(record.id);
                let _ = self.registry.remove_addition(addition.id);
                return Err(e);
            }
        };

        tracing::info!(
            client = %package.client_name,
            uploader,
            total = %package.total_display(),
            "reclamo finalizado"
        );
        Ok(FinalizedClaim {
            record,
            addition,
            artifacts,
        })
    }

    /// Registra archivo y alta juntos; si el alta falla se retira el archivo
    fn record(&self, record: &FileRecord, addition: &ClientAddition) -> DocumentResult<()> {
        self.registry.record_file(record.clone())?;
        if let Err(e) = self.registry.record_addition(addition.clone()) {
            tracing::error!(client = %record.client_name, error = %e, "no se pudo registrar el alta");
            let _ = self.registry.remove_file(record.id);
            return Err(e);
        }
        Ok(())
    }

    /// Da de alta un cliente sin archivos y deja constancia del admin
    pub fn add_client(&self, client_name: &str, admin_id: &str) -> DocumentResult<ClientAddition> {
        let client_name = client_name.trim();
        if client_name.is_empty() {
            return Err(DocumentError::Validation("client_name is required".to_string()));
        }

        let addition = ClientAddition::new(admin_id, client_name);
        self.record(&FileRecord::new(client_name, admin_id), &addition)?;

        tracing::info!(client = %client_name, admin = %admin_id, "cliente agregado");
        Ok(addition)
    }

    pub fn list_files(&self, filter: &ClientFilter) -> DocumentResult<Vec<FileRecord>> {
        self.registry.files(filter)
    }

    pub fn list_additions(&self, filter: &ClientFilter) -> DocumentResult<Vec<ClientAddition>> {
        self.registry.additions(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::MemoryRegistry;
    use crate::core::{Logo, RenderStyle};
    use crate::models::{document_file_name, ClaimPackage};
    use std::fs;
    use std::path::Path;
    use uuid::Uuid;

    /// Escribe un PDF ficticio con la narrativa, sin depender de typst
    struct StubDocument(PathBuf);

    impl Renderer for StubDocument {
        fn destination(&self, package: &ClaimPackage) -> PathBuf {
            self.0.join(document_file_name(&package.client_name))
        }

        fn write_to(&self, package: &ClaimPackage, _logo: Option<&Logo>, path: &Path) -> DocumentResult<()> {
            fs::write(path, format!("%PDF {}", package.narrative))?;
            Ok(())
        }
    }

    struct FailingWorkbook(PathBuf);

    impl Renderer for FailingWorkbook {
        fn destination(&self, _package: &ClaimPackage) -> PathBuf {
            self.0.join("Jane_Doe_Claim.xlsx")
        }

        fn write_to(&self, _package: &ClaimPackage, _logo: Option<&Logo>, _path: &Path) -> DocumentResult<()> {
            Err(DocumentError::Validation("disk full".into()))
        }
    }

    /// Registro que acepta archivos pero rechaza altas (o todo)
    #[derive(Default)]
    struct BrokenRegistry {
        inner: MemoryRegistry,
        accept_files: bool,
    }

    impl FileRegistry for BrokenRegistry {
        fn record_file(&self, record: FileRecord) -> DocumentResult<()> {
            if self.accept_files {
                return self.inner.record_file(record);
            }
            Err(DocumentError::Registry("offline".into()))
        }
        fn record_addition(&self, _: ClientAddition) -> DocumentResult<()> {
            Err(DocumentError::Registry("offline".into()))
        }
        fn remove_file(&self, id: Uuid) -> DocumentResult<()> {
            self.inner.remove_file(id)
        }
        fn remove_addition(&self, id: Uuid) -> DocumentResult<()> {
            self.inner.remove_addition(id)
        }
        fn files(&self, filter: &ClientFilter) -> DocumentResult<Vec<FileRecord>> {
            self.inner.files(filter)
        }
        fn additions(&self, filter: &ClientFilter) -> DocumentResult<Vec<ClientAddition>> {
            self.inner.additions(filter)
        }
    }

    fn submission(claim_text: &str) -> ClaimSubmission {
        ClaimSubmission {
            client_name: "Jane Doe".into(),
            claim_text: claim_text.into(),
            category: vec!["Sofa".into(), "".into()],
            justification: vec!["Smoke".into(), "".into()],
            total: vec!["1200".into(), "".into()],
            ..Default::default()
        }
    }

    fn style() -> RenderStyle {
        RenderStyle::builder().sheet_paint_area(30, 6).build()
    }

    fn service(dir: &Path, registry: Arc<dyn FileRegistry>) -> ClaimService {
        ClaimService::with_renderers(
            Arc::new(StubDocument(dir.to_path_buf())),
            Arc::new(WorkbookComposer::new(style(), dir)),
            dir.join("missing-logo.png"),
            registry,
        )
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn finalize_writes_and_records_the_pair() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Arc::new(MemoryRegistry::new());
        let claims = service(dir.path(), registry.clone()).with_metrics(ClaimMetrics::new().unwrap());

        let done = claims.finalize(submission("Kitchen fire"), "admin-1").unwrap();
        assert!(done.artifacts.document.exists());
        assert_eq!(done.artifacts.workbook, dir.path().join("Jane_Doe_Claim.xlsx"));
        assert!(done.artifacts.workbook.exists());
        assert_eq!(file_names(dir.path()), vec!["Jane_Doe_Claim.pdf", "Jane_Doe_Claim.xlsx"]);

        let files = registry.files(&ClientFilter::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].uploaded_by, "admin-1");
    }

    #[test]
    fn finalize_is_tracked_as_a_client_addition() {
        let dir = tempfile::tempdir().unwrap();
        let claims = service(dir.path(), Arc::new(MemoryRegistry::new()));

        let done = claims.finalize(submission("Kitchen fire"), "admin-3").unwrap();
        let filter = ClientFilter {
            uploader: Some("admin-3".into()),
            ..Default::default()
        };
        let additions = claims.list_additions(&filter).unwrap();
        assert_eq!(additions, vec![done.addition]);
        assert_eq!(additions[0].client_name, "Jane Doe");
    }

    #[test]
    fn workbook_failure_keeps_the_previous_files() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Arc::new(MemoryRegistry::new());
        service(dir.path(), registry.clone())
            .finalize(submission("first"), "admin-1")
            .unwrap();

        let broken = ClaimService::with_renderers(
            Arc::new(StubDocument(dir.path().to_path_buf())),
            Arc::new(FailingWorkbook(dir.path().to_path_buf())),
            dir.path().join("missing-logo.png"),
            registry.clone(),
        );
        assert!(broken.finalize(submission("second"), "admin-1").is_err());

        assert_eq!(fs::read(dir.path().join("Jane_Doe_Claim.pdf")).unwrap(), b"%PDF first");
        assert_eq!(file_names(dir.path()), vec!["Jane_Doe_Claim.pdf", "Jane_Doe_Claim.xlsx"]);
        assert_eq!(registry.files(&ClientFilter::default()).unwrap().len(), 1);
    }

    #[test]
    fn registry_failure_keeps_previously_committed_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = service(dir.path(), Arc::new(MemoryRegistry::new()))
            .finalize(submission("first"), "admin-1")
            .unwrap();

        let offline = service(dir.path(), Arc::new(BrokenRegistry::default()));
        let err = offline.finalize(submission("second"), "admin-1").unwrap_err();
        assert!(matches!(err, DocumentError::Registry(_)));

        assert_eq!(fs::read(&first.artifacts.document).unwrap(), b"%PDF first");
        assert!(first.artifacts.workbook.exists());
        assert_eq!(file_names(dir.path()), vec!["Jane_Doe_Claim.pdf", "Jane_Doe_Claim.xlsx"]);
    }

    #[test]
    fn registry_failure_on_a_new_client_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let offline = service(dir.path(), Arc::new(BrokenRegistry::default()));

        assert!(offline.finalize(submission("fire"), "admin-1").is_err());
        assert!(file_names(dir.path()).is_empty());
    }

    #[test]
    fn failed_addition_withdraws_the_file_record() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Arc::new(BrokenRegistry {
            accept_files: true,
            ..Default::default()
        });
        let claims = service(dir.path(), registry.clone());

        assert!(claims.finalize(submission("fire"), "admin-1").is_err());
        assert!(registry.files(&ClientFilter::default()).unwrap().is_empty());
        assert!(file_names(dir.path()).is_empty());
    }

    #[test]
    fn blank_client_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let claims = service(dir.path(), Arc::new(MemoryRegistry::new()));

        let mut blank = submission("fire");
        blank.client_name = "  ".into();
        assert!(matches!(claims.finalize(blank, "a"), Err(DocumentError::Validation(_))));
        assert!(matches!(claims.add_client("", "a"), Err(DocumentError::Validation(_))));
        assert!(file_names(dir.path()).is_empty());
    }

    #[test]
    fn add_client_is_listed_with_its_admin() {
        let dir = tempfile::tempdir().unwrap();
        let claims = service(dir.path(), Arc::new(MemoryRegistry::new()));

        claims.add_client(" John Roe ", "admin-7").unwrap();
        let filter = ClientFilter {
            uploader: Some("admin-7".into()),
            ..Default::default()
        };
        let files = claims.list_files(&filter).unwrap();
        assert_eq!(files[0].client_name, "John Roe");
        assert!(files[0].pdf_path.is_none());
        assert_eq!(claims.list_additions(&filter).unwrap()[0].admin_id, "admin-7");
    }
}
