use image::io::Reader as ImageReader;
use image::{GenericImageView, ImageFormat};
use std::path::{Path, PathBuf};

use super::error::AssetError;

/// Logo ya validado: el archivo existe y se puede decodificar
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub path: PathBuf,
    pub width_px: u32,
    pub height_px: u32,
}

impl Logo {
    pub fn aspect_ratio(&self) -> f32 {
        if self.height_px == 0 {
            return 1.0;
        }
        self.width_px as f32 / self.height_px as f32
    }
}

/// Formatos que tanto Typst como xlsx saben incrustar
const EMBEDDABLE: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif];

/// Decodifica el logo completo para garantizar que ambos formatos puedan usarlo.
///
/// El formato se detecta por contenido, no por extensión.
pub fn load_logo(path: &Path) -> Result<Logo, AssetError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| AssetError::new(path, e))?;

    match reader.format() {
        Some(format) if EMBEDDABLE.contains(&format) => {}
        Some(format) => return Err(AssetError::new(path, format!("formato no incrustable: {:?}", format))),
        None => return Err(AssetError::new(path, "formato de imagen desconocido")),
    }

    let decoded = reader.decode().map_err(|e| AssetError::new(path, e))?;
    let (width_px, height_px) = decoded.dimensions();

    // Typst resuelve rutas absolutas contra --root
    let path = path.canonicalize().map_err(|e| AssetError::new(path, e))?;

    Ok(Logo {
        path,
        width_px,
        height_px,
    })
}

/// Variante tolerante: registra el fallo y continúa sin imagen.
pub fn load_logo_or_skip(path: &Path) -> Option<Logo> {
    match load_logo(path) {
        Ok(logo) => Some(logo),
        Err(e) => {
            tracing::warn!(error = %e, "logo no disponible, se genera sin imagen");
            None
        }
    }
}
