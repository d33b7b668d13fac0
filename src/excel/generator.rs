use crate::core::{DocumentError, DocumentResult, Logo, Rgb};
use rust_xlsxwriter::{Format, Image, Workbook, Worksheet};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::pdf::generator::staging_path;

/// Límite de caracteres por celda de Excel
pub const MAX_CELL_CHARS: usize = 32_767;

/// Recorta el texto al límite de celda, avisando en el log
pub fn fit_cell_text(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            tracing::warn!(
                chars = text.chars().count(),
                limit = MAX_CELL_CHARS,
                "texto truncado al límite de celda de Excel"
            );
            Cow::Owned(text[..cut].to_string())
        }
        None => Cow::Borrowed(text),
    }
}

pub struct ExcelGenerator {
    workbook: Workbook,
    sheets: Vec<Worksheet>,
}

impl Default for ExcelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExcelGenerator {
    pub fn new() -> Self {
        ExcelGenerator {
            workbook: Workbook::new(),
            sheets: Vec::new(),
        }
    }

    pub fn add_worksheet(&mut self, name: &str) -> DocumentResult<()> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(name)?;
        self.sheets.push(worksheet);
        Ok(())
    }

    pub fn get_current_sheet_mut(&mut self) -> DocumentResult<&mut Worksheet> {
        self.sheets.last_mut().ok_or_else(|| {
            DocumentError::Validation("No hay hoja de trabajo activa".to_string())
        })
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Pinta un bloque de celdas vacías con el formato de fondo
    pub fn paint_background(&mut self, rows: u32, cols: u16, format: &Format) -> DocumentResult<()> {
        let sheet = self.get_current_sheet_mut()?;
        for row in 0..rows {
            for col in 0..cols {
                sheet.write_blank(row, col, format)?;
            }
        }
        Ok(())
    }

    pub fn hide_gridlines(&mut self, tab_color: Rgb) -> DocumentResult<()> {
        let sheet = self.get_current_sheet_mut()?;
        sheet.set_screen_gridlines(false);
        sheet.set_tab_color(tab_color);
        Ok(())
    }

    pub fn write_with_format(&mut self, row: u32, col: u16, text: &str, format: &Format) -> DocumentResult<()> {
        let text = fit_cell_text(text);
        let sheet = self.get_current_sheet_mut()?;
        sheet.write_string_with_format(row, col, text.as_ref(), format)?;
        Ok(())
    }

    pub fn write_number_with_format(&mut self, row: u32, col: u16, number: f64, format: &Format) -> DocumentResult<()> {
        let sheet = self.get_current_sheet_mut()?;
        sheet.write_number_with_format(row, col, number, format)?;
        Ok(())
    }

    pub fn write_blank(&mut self, row: u32, col: u16, format: &Format) -> DocumentResult<()> {
        let sheet = self.get_current_sheet_mut()?;
        sheet.write_blank(row, col, format)?;
        Ok(())
    }

    pub fn merge_range(
        &mut self,
        (first_row, first_col): (u32, u16),
        (last_row, last_col): (u32, u16),
        text: &str,
        format: &Format,
    ) -> DocumentResult<()> {
        let text = fit_cell_text(text);
        let sheet = self.get_current_sheet_mut()?;
        sheet.merge_range(first_row, first_col, last_row, last_col, text.as_ref(), format)?;
        Ok(())
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) -> DocumentResult<()> {
        let sheet = self.get_current_sheet_mut()?;
        sheet.set_column_width(col, width)?;
        Ok(())
    }

    pub fn set_column_format(&mut self, col: u16, format: &Format) -> DocumentResult<()> {
        let sheet = self.get_current_sheet_mut()?;
        sheet.set_column_format(col, format)?;
        Ok(())
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) -> DocumentResult<()> {
        let sheet = self.get_current_sheet_mut()?;
        sheet.set_row_height(row, height)?;
        Ok(())
    }

    pub fn set_row_format(&mut self, row: u32, format: &Format) -> DocumentResult<()> {
        let sheet = self.get_current_sheet_mut()?;
        sheet.set_row_format(row, format)?;
        Ok(())
    }

    /// Inserta el logo escalado. Un formato que xlsx no soporta no es fatal.
    pub fn insert_logo(&mut self, row: u32, col: u16, logo: &Logo, scale: (f64, f64)) -> DocumentResult<bool> {
        let image = match Image::new(&logo.path) {
            Ok(image) => image.set_scale_width(scale.0).set_scale_height(scale.1),
            Err(e) => {
                tracing::warn!(path = %logo.path.display(), error = %e, "logo no soportado por xlsx, se omite");
                return Ok(false);
            }
        };

        let sheet = self.get_current_sheet_mut()?;
        sheet.insert_image(row, col, &image)?;
        Ok(true)
    }

    /// Guarda el libro; el destino se reemplaza de forma atómica.
    pub fn save<P: AsRef<Path>>(mut self, path: P) -> DocumentResult<()> {
        let path = path.as_ref();
        for sheet in self.sheets.drain(..) {
            self.workbook.push_worksheet(sheet);
        }

        let staging = staging_path(path, &Uuid::new_v4());
        if let Err(e) = self.workbook.save(&staging) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }
        Ok(())
    }
}
