pub mod excel;
pub mod pdf;

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::core::{load_logo_or_skip, AppConfig, DocumentResult, Logo, RenderStyle};
use crate::models::{ClaimPackage, EstimateRecord};
use crate::pdf::generator::staging_path;

pub use excel::WorkbookComposer;
pub use pdf::DocumentComposer;

/// Un renderer convierte el paquete canónico en un archivo
pub trait Renderer: Send + Sync {
    /// Ruta final del archivo para este paquete
    fn destination(&self, package: &ClaimPackage) -> PathBuf;

    /// Escribe el archivo completo en `path`
    fn write_to(&self, package: &ClaimPackage, logo: Option<&Logo>, path: &Path) -> DocumentResult<()>;

    /// Escribe a un archivo hermano temporal, sin tocar el destino
    fn stage(&self, package: &ClaimPackage, logo: Option<&Logo>) -> DocumentResult<StagedFile> {
        let destination = self.destination(package);
        if let Some(dir) = destination.parent() {
            fs::create_dir_all(dir)?;
        }
        let staged = StagedFile::new(destination);
        self.write_to(package, logo, staged.staging())?;
        Ok(staged)
    }

    fn render(&self, package: &ClaimPackage, logo: Option<&Logo>) -> DocumentResult<PathBuf> {
        self.stage(package, logo)?.commit()
    }
}

/// Archivo escrito junto a su destino y aún no publicado.
///
/// Si no se llama a `commit`, el archivo temporal se borra al soltarlo.
#[derive(Debug)]
pub struct StagedFile {
    staging: PathBuf,
    destination: PathBuf,
    committed: bool,
}

impl StagedFile {
    pub fn new(destination: PathBuf) -> Self {
        StagedFile {
            staging: staging_path(&destination, &Uuid::new_v4()),
            destination,
            committed: false,
        }
    }

    pub fn staging(&self) -> &Path {
        &self.staging
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Reemplaza el destino con el archivo temporal
    pub fn commit(mut self) -> DocumentResult<PathBuf> {
        fs::rename(&self.staging, &self.destination)?;
        self.committed = true;
        Ok(self.destination.clone())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.staging);
        }
    }
}

/// Par PDF + XLSX escrito pero no publicado
#[derive(Debug)]
pub struct StagedPair {
    pub document: StagedFile,
    pub workbook: StagedFile,
}

impl StagedPair {
    /// Rutas que tendrán los archivos una vez publicados
    pub fn destinations(&self) -> GeneratedArtifacts {
        GeneratedArtifacts {
            document: self.document.destination().to_path_buf(),
            workbook: self.workbook.destination().to_path_buf(),
        }
    }

    pub fn commit(self) -> DocumentResult<GeneratedArtifacts> {
        let StagedPair { document, workbook } = self;
        let workbook = workbook.commit()?;
        let document = document.commit()?;
        Ok(GeneratedArtifacts { document, workbook })
    }
}

/// Rutas del par generado para un cliente
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub document: PathBuf,
    pub workbook: PathBuf,
}

/// Cualquier valor del que se pueda extraer la ruta del PDF: una ruta suelta
/// o un par cuyo primer elemento es la ruta.
pub trait DocumentLocation {
    fn document_path(&self) -> &Path;

    /// Directorio compartido de salida; `.` si la ruta no tiene padre
    fn output_dir(&self) -> PathBuf {
        match self.document_path().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl DocumentLocation for Path {
    fn document_path(&self) -> &Path {
        self
    }
}

impl DocumentLocation for PathBuf {
    fn document_path(&self) -> &Path {
        self.as_path()
    }
}

impl<P: AsRef<Path>, T> DocumentLocation for (P, T) {
    fn document_path(&self) -> &Path {
        self.0.as_ref()
    }
}

impl DocumentLocation for GeneratedArtifacts {
    fn document_path(&self) -> &Path {
        &self.document
    }
}

/// Todo lo que necesitan los compositores además de los datos
#[derive(Debug, Clone)]
pub struct ComposerSettings {
    pub style: RenderStyle,
    pub output_dir: PathBuf,
    pub typst_bin: String,
    pub temp_dir: PathBuf,
}

impl ComposerSettings {
    pub fn from_config(config: &AppConfig, style: RenderStyle) -> Self {
        ComposerSettings {
            style,
            output_dir: config.output_dir.clone(),
            typst_bin: config.typst_bin.clone(),
            temp_dir: config.temp_dir.clone(),
        }
    }

    pub fn document_composer(&self) -> DocumentComposer {
        DocumentComposer::new(
            self.style.clone(),
            &self.output_dir,
            crate::pdf::TypstCompiler::new(self.typst_bin.clone(), self.temp_dir.clone()),
        )
    }
}

/// Genera el PDF del reclamo. Un logo ilegible no aborta la generación.
pub fn compose_document(
    settings: &ComposerSettings,
    logo: &Path,
    client_name: &str,
    narrative: &str,
    estimate: &EstimateRecord,
) -> DocumentResult<PathBuf> {
    let package = ClaimPackage::new(client_name, narrative, estimate.clone());
    let logo = load_logo_or_skip(logo);
    settings.document_composer().render(&package, logo.as_ref())
}

/// Genera el XLSX junto al PDF indicado por `document`.
pub fn compose_workbook<D: DocumentLocation + ?Sized>(
    settings: &ComposerSettings,
    document: &D,
    logo: &Path,
    narrative: &str,
    estimate: &EstimateRecord,
    client_name: &str,
) -> DocumentResult<PathBuf> {
    let package = ClaimPackage::new(client_name, narrative, estimate.clone());
    let logo = load_logo_or_skip(logo);
    WorkbookComposer::beside(document, settings.style.clone()).render(&package, logo.as_ref())
}

/// Escribe ambos archivos a rutas temporales.
///
/// Los destinos no se tocan hasta `StagedPair::commit`; un fallo en cualquiera
/// de los dos pasos deja en disco solo lo que ya estaba.
pub fn stage_pair(
    document: &dyn Renderer,
    workbook: &dyn Renderer,
    package: &ClaimPackage,
    logo: Option<&Logo>,
) -> DocumentResult<StagedPair> {
    let document = document.stage(package, logo)?;
    let workbook = workbook.stage(package, logo).map_err(|e| {
        tracing::error!(path = %document.destination().display(), error = %e, "libro fallido, se descarta el par");
        e
    })?;
    Ok(StagedPair { document, workbook })
}

/// Genera ambos archivos como una unidad, en el directorio de salida.
pub fn compose_claim(
    settings: &ComposerSettings,
    logo: &Path,
    package: &ClaimPackage,
) -> DocumentResult<GeneratedArtifacts> {
    let logo = load_logo_or_skip(logo);
    let document = settings.document_composer();
    let workbook = WorkbookComposer::beside(&document.destination(package), settings.style.clone());
    stage_pair(&document, &workbook, package, logo.as_ref())?.commit()
}
