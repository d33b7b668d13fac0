use std::path::{Path, PathBuf};

use crate::core::{DocumentResult, Logo, RenderStyle};
use crate::models::{document_file_name, ClaimPackage};
use crate::pdf::{layout_document, render_layout, TypstCompiler};

use super::Renderer;

/// Generador del PDF del reclamo usando Typst
pub struct DocumentComposer {
    style: RenderStyle,
    output_dir: PathBuf,
    compiler: TypstCompiler,
}

impl DocumentComposer {
    pub fn new(style: RenderStyle, output_dir: impl AsRef<Path>, compiler: TypstCompiler) -> Self {
        DocumentComposer {
            style,
            output_dir: output_dir.as_ref().to_path_buf(),
            compiler,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Código Typst del documento, sin compilar
    pub fn source(&self, package: &ClaimPackage, logo: Option<&Logo>) -> String {
        let layout = layout_document(package, &self.style);
        let title = format!("{} Claim", package.client_name);
        render_layout(&layout, &self.style, &title, logo)
    }
}

impl Renderer for DocumentComposer {
    fn destination(&self, package: &ClaimPackage) -> PathBuf {
        self.output_dir.join(document_file_name(&package.client_name))
    }

    fn write_to(&self, package: &ClaimPackage, logo: Option<&Logo>, path: &Path) -> DocumentResult<()> {
        let layout = layout_document(package, &self.style);
        let title = format!("{} Claim", package.client_name);
        let source = render_layout(&layout, &self.style, &title, logo);
        self.compiler.compile_to_pdf(&source, path)?;

        tracing::info!(
            path = %path.display(),
            pages = layout.pages.len(),
            rows = package.rows().len(),
            "PDF generado"
        );
        Ok(())
    }
}
