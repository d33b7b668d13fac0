use std::path::{Path, PathBuf};

use crate::core::{DocumentResult, Logo, RenderStyle};
use crate::excel::ClaimWorkbookBuilder;
use crate::models::{workbook_file_name, ClaimPackage};

use super::{DocumentLocation, Renderer};

/// Generador del libro XLSX, escrito en el mismo directorio que el PDF
pub struct WorkbookComposer {
    style: RenderStyle,
    output_dir: PathBuf,
}

impl WorkbookComposer {
    pub fn new(style: RenderStyle, output_dir: impl AsRef<Path>) -> Self {
        WorkbookComposer {
            style,
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Compositor que escribe junto al documento indicado
    pub fn beside<D: DocumentLocation + ?Sized>(document: &D, style: RenderStyle) -> Self {
        WorkbookComposer::new(style, document.output_dir())
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Renderer for WorkbookComposer {
    fn destination(&self, package: &ClaimPackage) -> PathBuf {
        self.output_dir.join(workbook_file_name(&package.client_name))
    }

    fn write_to(&self, package: &ClaimPackage, logo: Option<&Logo>, path: &Path) -> DocumentResult<()> {
        let mut builder = ClaimWorkbookBuilder::new(&self.style, logo);
        builder.narrative_sheet(package)?.contents_sheet(package)?;
        builder.save(path)?;

        tracing::info!(path = %path.display(), rows = package.rows().len(), "Excel generado");
        Ok(())
    }
}
