use crate::core::{DocumentError, DocumentResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

/// Compila código Typst a PDF usando el CLI de `typst`
#[derive(Debug, Clone)]
pub struct TypstCompiler {
    typst_bin: String,
    temp_dir: PathBuf,
}

impl Default for TypstCompiler {
    fn default() -> Self {
        TypstCompiler::new("typst", std::env::temp_dir())
    }
}

impl TypstCompiler {
    pub fn new(typst_bin: impl Into<String>, temp_dir: impl Into<PathBuf>) -> Self {
        TypstCompiler {
            typst_bin: typst_bin.into(),
            temp_dir: temp_dir.into(),
        }
    }

    /// `true` si el binario responde a `--version`
    pub fn is_available(&self) -> bool {
        Command::new(&self.typst_bin)
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    /// Compila `source` y deja el PDF en `output_path`.
    ///
    /// Se escribe primero a un archivo hermano temporal y se renombra al
    /// final: el destino nunca queda a medio escribir.
    pub fn compile_to_pdf(&self, source: &str, output_path: &Path) -> DocumentResult<()> {
        fs::create_dir_all(&self.temp_dir)?;

        let temp_id = Uuid::new_v4();
        let typ_path = self.temp_dir.join(format!("claim_{}.typ", temp_id));
        let staging = staging_path(output_path, &temp_id);

        fs::write(&typ_path, source)?;

        let output = Command::new(&self.typst_bin)
            .arg("compile")
            .arg("--root")
            .arg("/")
            .arg(&typ_path)
            .arg(&staging)
            .output();

        let _ = fs::remove_file(&typ_path);

        let output = output.map_err(|e| {
            DocumentError::Typst(format!("Error ejecutando {}: {}", self.typst_bin, e))
        })?;

        if !output.status.success() {
            let _ = fs::remove_file(&staging);
            return Err(DocumentError::Typst(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        if let Err(e) = fs::rename(&staging, output_path) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        Ok(())
    }
}

/// Ruta temporal junto al destino, misma extensión para que typst infiera el formato
pub(crate) fn staging_path(output_path: &Path, id: &Uuid) -> PathBuf {
    let file_name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = output_path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();

    output_path.with_file_name(format!(".{}.{}.{}", file_name, id.simple(), extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_keeps_directory_and_extension() {
        let id = Uuid::nil();
        let staged = staging_path(Path::new("/out/Jane_Doe_Claim.pdf"), &id);
        assert_eq!(staged.parent(), Some(Path::new("/out")));
        assert_eq!(staged.extension().unwrap(), "pdf");
        assert!(staged.file_name().unwrap().to_string_lossy().starts_with(".Jane_Doe_Claim.pdf."));
    }

    #[test]
    fn missing_binary_is_a_typst_error() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = TypstCompiler::new("definitely-not-typst-xyz", dir.path());
        assert!(!compiler.is_available());

        let target = dir.path().join("out.pdf");
        let err = compiler.compile_to_pdf("hello", &target).unwrap_err();
        assert!(matches!(err, DocumentError::Typst(_)));
        assert!(!target.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
