use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use super::error::DocumentResult;

pub const POINTS_PER_INCH: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSize {
    Letter,
    Legal,
    A4,
    Custom(f32, f32), // ancho, alto en puntos
}

impl PageSize {
    /// Dimensiones (ancho, alto) en puntos tipográficos
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::A4 => (595.28, 841.89),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }

    pub fn to_typst(&self) -> String {
        let (w, h) = self.dimensions();
        format!("width: {}pt, height: {}pt", w, h)
    }
}

/// Color RGB de 24 bits, `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:06X}", self.0 & 0xFF_FFFF)
    }

    pub fn to_typst(&self) -> String {
        format!("rgb(\"{}\")", self.hex())
    }
}

impl From<Rgb> for rust_xlsxwriter::Color {
    fn from(color: Rgb) -> Self {
        rust_xlsxwriter::Color::RGB(color.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// Estilo visual compartido por los dos compositores.
///
/// Se pasa explícitamente a cada renderer; no hay estado global de estilos.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub page_size: PageSize,
    pub page_background: Rgb,
    pub text_color: Rgb,
    pub font_family: Vec<String>,
    pub title_size: f32,
    pub body_size: f32,
    pub body_leading: f32,
    pub row_size: f32,
    pub row_leading: f32,
    pub total_size: f32,
    pub sheet_background: Rgb,
    pub sheet_band: Rgb,
    pub sheet_highlight: Rgb,
    pub sheet_total: Rgb,
    pub sheet_paint_rows: u32,
    pub sheet_paint_cols: u16,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            page_size: PageSize::Letter,
            page_background: Rgb(0xFEFDF9),
            text_color: Rgb(0x3D4335),
            font_family: vec![
                "Liberation Sans".to_string(),
                "Arial".to_string(),
                "Helvetica".to_string(),
            ],
            title_size: 20.0,
            body_size: 12.0,
            body_leading: 16.0,
            row_size: 10.0,
            row_leading: 14.0,
            total_size: 16.0,
            sheet_background: Rgb(0xFFFDFA),
            sheet_band: Rgb(0x3B4232),
            sheet_highlight: Rgb(0xF6E60B),
            sheet_total: Rgb(0xD4D4C9),
            sheet_paint_rows: 100,
            sheet_paint_cols: 100,
        }
    }
}

impl RenderStyle {
    pub fn builder() -> RenderStyleBuilder {
        RenderStyleBuilder::default()
    }

    pub fn typst_font_list(&self) -> String {
        let fonts: Vec<String> = self
            .font_family
            .iter()
            .map(|f| format!("\"{}\"", f.replace('\\', "\\\\").replace('"', "\\\"")))
            .collect();
        format!("({},)", fonts.join(", "))
    }
}

#[derive(Default)]
pub struct RenderStyleBuilder {
    page_size: Option<PageSize>,
    page_background: Option<Rgb>,
    text_color: Option<Rgb>,
    font_family: Option<Vec<String>>,
    sheet_paint_rows: Option<u32>,
    sheet_paint_cols: Option<u16>,
}

impl RenderStyleBuilder {
    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn page_background(mut self, color: Rgb) -> Self {
        self.page_background = Some(color);
        self
    }

    pub fn text_color(mut self, color: Rgb) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn font_family(mut self, fonts: Vec<String>) -> Self {
        self.font_family = Some(fonts);
        self
    }

    pub fn sheet_paint_area(mut self, rows: u32, cols: u16) -> Self {
        self.sheet_paint_rows = Some(rows);
        self.sheet_paint_cols = Some(cols);
        self
    }

    pub fn build(self) -> RenderStyle {
        let default = RenderStyle::default();
        RenderStyle {
            page_size: self.page_size.unwrap_or(default.page_size),
            page_background: self.page_background.unwrap_or(default.page_background),
            text_color: self.text_color.unwrap_or(default.text_color),
            font_family: self.font_family.unwrap_or(default.font_family),
            sheet_paint_rows: self.sheet_paint_rows.unwrap_or(default.sheet_paint_rows),
            sheet_paint_cols: self.sheet_paint_cols.unwrap_or(default.sheet_paint_cols),
            ..default
        }
    }
}

/// Configuración del proceso, cargada de variables `CLAIMS_*`
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub output_dir: PathBuf,
    pub logo_path: PathBuf,
    pub typst_bin: String,
    pub temp_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            output_dir: PathBuf::from("finalized_pdfs"),
            logo_path: PathBuf::from("static/logo.jpg"),
            typst_bin: "typst".to_string(),
            temp_dir: std::env::temp_dir(),
        }
    }
}

impl AppConfig {
    pub fn load() -> DocumentResult<Self> {
        let default = AppConfig::default();

        let settings = config::Config::builder()
            .set_default("host", default.host)?
            .set_default("port", default.port as i64)?
            .set_default("output_dir", default.output_dir.to_string_lossy().to_string())?
            .set_default("logo_path", default.logo_path.to_string_lossy().to_string())?
            .set_default("typst_bin", default.typst_bin)?
            .set_default("temp_dir", default.temp_dir.to_string_lossy().to_string())?
            .add_source(config::Environment::with_prefix("CLAIMS").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
