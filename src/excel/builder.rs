use crate::core::{DocumentResult, Logo, RenderStyle};
use crate::excel::ExcelGenerator;
use crate::models::{ClaimPackage, MetadataField};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};
use std::path::Path;

pub const NARRATIVE_SHEET: &str = "Claim Package";
pub const CONTENTS_SHEET: &str = "Contents Estimate";
pub const ITEM_HEADERS: [&str; 3] = ["Category", "Justification", "Total"];

const LOGO_SCALE: (f64, f64) = (0.39, 0.36);
const NARRATIVE_COLUMN_WIDTH: f64 = 15.0;
const CONTENTS_COLUMN_WIDTH: f64 = 31.0;
const DEFAULT_ROW_HEIGHT: f64 = 15.0;
const TOTAL_ROW_HEIGHT: f64 = 49.0;

// Coordenadas (base 0) de las hojas
const LOGO_LAST_ROW: u32 = 14;
pub const NARRATIVE_ROW: u32 = 15;
const NARRATIVE_LAST_ROW: u32 = 39;
const BAND_ROWS: [u32; 3] = [15, 22, 24];
pub const METADATA_FIRST_ROW: u32 = 16;
pub const TOTAL_ROW: u32 = 23;
pub const HEADER_ROW: u32 = 25;
pub const FIRST_ITEM_ROW: u32 = 26;

/// Formato con nombre de una celda; la paleta lo resuelve a `Format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Background,
    Bordered,
    Currency,
    Band,
    Highlight,
    Total,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Blank,
}

/// Una escritura de celda; `last` indica el final de un rango combinado
#[derive(Debug, Clone, PartialEq)]
pub struct CellWrite {
    pub row: u32,
    pub col: u16,
    pub last: Option<(u32, u16)>,
    pub value: CellValue,
    pub style: CellStyle,
}

/// Contenido de una hoja, independiente de `rust_xlsxwriter`.
///
/// Las alturas y formatos se aplican en orden; una entrada posterior para la
/// misma fila reemplaza a la anterior.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub name: &'static str,
    pub column_widths: Vec<(u16, f64)>,
    pub column_styles: Vec<(u16, CellStyle)>,
    pub row_heights: Vec<(u32, f64)>,
    pub row_styles: Vec<(u32, CellStyle)>,
    pub cells: Vec<CellWrite>,
    /// Última columna del bloque del logo
    pub logo_last_col: u16,
}

impl SheetPlan {
    fn new(name: &'static str, logo_last_col: u16) -> Self {
        SheetPlan {
            name,
            column_widths: Vec::new(),
            column_styles: Vec::new(),
            row_heights: Vec::new(),
            row_styles: Vec::new(),
            cells: Vec::new(),
            logo_last_col,
        }
    }

    fn write(&mut self, row: u32, col: u16, value: CellValue, style: CellStyle) {
        self.cells.push(CellWrite {
            row,
            col,
            last: None,
            value,
            style,
        });
    }

    fn merge(&mut self, first: (u32, u16), last: (u32, u16), text: &str, style: CellStyle) {
        self.cells.push(CellWrite {
            row: first.0,
            col: first.1,
            last: Some(last),
            value: CellValue::Text(text.to_string()),
            style,
        });
    }

    /// Última escritura cuya esquina superior izquierda es `(row, col)`
    pub fn cell(&self, row: u32, col: u16) -> Option<&CellWrite> {
        self.cells.iter().rev().find(|c| c.row == row && c.col == col)
    }

    pub fn text_at(&self, row: u32, col: u16) -> Option<&str> {
        match &self.cell(row, col)?.value {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn number_at(&self, row: u32, col: u16) -> Option<f64> {
        match self.cell(row, col)?.value {
            CellValue::Number(n) => Some(n),
            _ => None,
        }
    }

    fn logo_block(&mut self) {
        self.merge((0, 0), (LOGO_LAST_ROW, self.logo_last_col), "", CellStyle::Bordered);
    }
}

/// Hoja A: logo y narrativa completa
pub fn narrative_plan(package: &ClaimPackage) -> SheetPlan {
    let mut plan = SheetPlan::new(NARRATIVE_SHEET, 7);

    plan.column_widths = (0..8).map(|col| (col, NARRATIVE_COLUMN_WIDTH)).collect();
    for row in 9..=LOGO_LAST_ROW {
        plan.row_heights.push((row, 20.0));
        plan.row_styles.push((row, CellStyle::Background));
    }

    plan.logo_block();
    plan.merge(
        (NARRATIVE_ROW, 0),
        (NARRATIVE_LAST_ROW, 7),
        &package.narrative,
        CellStyle::Bordered,
    );
    plan
}

/// Hoja B: cabecera, total y filas del estimado
pub fn contents_plan(package: &ClaimPackage, style: &RenderStyle) -> SheetPlan {
    let mut plan = SheetPlan::new(CONTENTS_SHEET, 3);

    for col in 0..4 {
        plan.column_widths.push((col, CONTENTS_COLUMN_WIDTH));
        plan.column_styles.push((col, CellStyle::Background));
    }
    plan.row_heights = (0..style.sheet_paint_rows).map(|row| (row, DEFAULT_ROW_HEIGHT)).collect();
    for row in BAND_ROWS {
        for col in 0..4 {
            plan.write(row, col, CellValue::Blank, CellStyle::Band);
        }
    }

    plan.logo_block();

    for (offset, field) in MetadataField::ALL.iter().enumerate() {
        let row = METADATA_FIRST_ROW + offset as u32;
        plan.merge((row, 0), (row, 1), field.label(), CellStyle::Highlight);
        plan.merge((row, 2), (row, 3), package.estimate.field(*field), CellStyle::Highlight);
    }

    plan.row_heights.push((TOTAL_ROW, TOTAL_ROW_HEIGHT));
    plan.merge((TOTAL_ROW, 0), (TOTAL_ROW, 3), &package.total_banner(), CellStyle::Total);

    let [category, justification, total] = ITEM_HEADERS;
    plan.write(HEADER_ROW, 0, CellValue::Text(category.to_string()), CellStyle::Highlight);
    plan.merge((HEADER_ROW, 1), (HEADER_ROW, 2), justification, CellStyle::Highlight);
    plan.write(HEADER_ROW, 3, CellValue::Text(total.to_string()), CellStyle::Highlight);

    let width_chars = (2.0 * CONTENTS_COLUMN_WIDTH) as usize;
    for (i, item) in package.rows().iter().enumerate() {
        let row = FIRST_ITEM_ROW + i as u32;
        let height = wrapped_row_height(&item.justification, width_chars)
            .max(wrapped_row_height(&item.category, CONTENTS_COLUMN_WIDTH as usize));

        plan.row_heights.push((row, height));
        plan.write(row, 0, CellValue::Text(item.category.clone()), CellStyle::Bordered);
        plan.merge((row, 1), (row, 2), &item.justification, CellStyle::Bordered);
        plan.write(row, 3, CellValue::Number(item.amount), CellStyle::Currency);
    }
    plan
}

/// Formatos con nombre, construidos a partir del estilo
pub struct Palette {
    pub background: Format,
    pub bordered: Format,
    pub currency: Format,
    pub band: Format,
    pub highlight: Format,
    pub total: Format,
}

impl Palette {
    pub fn from_style(style: &RenderStyle) -> Self {
        let centered = Format::new()
            .set_background_color(style.sheet_background)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        Palette {
            background: centered.clone().set_text_wrap(),
            bordered: centered.clone().set_text_wrap().set_border(FormatBorder::Thin),
            currency: centered
                .set_num_format("$#,##0.00")
                .set_border(FormatBorder::Thin),
            band: Format::new().set_background_color(style.sheet_band),
            highlight: Format::new()
                .set_background_color(style.sheet_highlight)
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap()
                .set_border(FormatBorder::Thin),
            total: Format::new()
                .set_background_color(style.sheet_total)
                .set_bold()
                .set_font_size(14)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap()
                .set_border(FormatBorder::Thin),
        }
    }

    pub fn format(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Background => &self.background,
            CellStyle::Bordered => &self.bordered,
            CellStyle::Currency => &self.currency,
            CellStyle::Band => &self.band,
            CellStyle::Highlight => &self.highlight,
            CellStyle::Total => &self.total,
        }
    }
}

/// Alto aproximado de una fila con texto ajustado en `width_chars` caracteres
pub fn wrapped_row_height(text: &str, width_chars: usize) -> f64 {
    let width_chars = width_chars.max(1);
    let lines: usize = text
        .split('\n')
        .map(|line| line.chars().count().div_ceil(width_chars).max(1))
        .sum();
    DEFAULT_ROW_HEIGHT * lines.max(1) as f64
}

pub struct ClaimWorkbookBuilder<'a> {
    generator: ExcelGenerator,
    palette: Palette,
    style: &'a RenderStyle,
    logo: Option<&'a Logo>,
}

impl<'a> ClaimWorkbookBuilder<'a> {
    pub fn new(style: &'a RenderStyle, logo: Option<&'a Logo>) -> Self {
        ClaimWorkbookBuilder {
            generator: ExcelGenerator::new(),
            palette: Palette::from_style(style),
            style,
            logo,
        }
    }

    /// Escribe una hoja nueva a partir de su plan
    pub fn apply(&mut self, plan: &SheetPlan) -> DocumentResult<&mut Self> {
        self.generator.add_worksheet(plan.name)?;
        self.generator.paint_background(
            self.style.sheet_paint_rows,
            self.style.sheet_paint_cols,
            &self.palette.background,
        )?;
        self.generator.hide_gridlines(self.style.sheet_background)?;

        for &(col, width) in &plan.column_widths {
            self.generator.set_column_width(col, width)?;
        }
        for &(col, style) in &plan.column_styles {
            self.generator.set_column_format(col, self.palette.format(style))?;
        }
        for &(row, height) in &plan.row_heights {
            self.generator.set_row_height(row, height)?;
        }
        for &(row, style) in &plan.row_styles {
            self.generator.set_row_format(row, self.palette.format(style))?;
        }

        for cell in &plan.cells {
            let format = self.palette.format(cell.style);
            match (&cell.value, cell.last) {
                (CellValue::Text(text), Some(last)) => {
                    self.generator.merge_range((cell.row, cell.col), last, text, format)?
                }
                (CellValue::Text(text), None) => self.generator.write_with_format(cell.row, cell.col, text, format)?,
                (CellValue::Number(n), last) => {
                    if let Some(last) = last {
                        self.generator.merge_range((cell.row, cell.col), last, "", format)?;
                    }
                    self.generator.write_number_with_format(cell.row, cell.col, *n, format)?
                }
                (CellValue::Blank, Some(last)) => self.generator.merge_range((cell.row, cell.col), last, "", format)?,
                (CellValue::Blank, None) => self.generator.write_blank(cell.row, cell.col, format)?,
            }
        }

        if let Some(logo) = self.logo {
            self.generator.insert_logo(0, 0, logo, LOGO_SCALE)?;
        }
        Ok(self)
    }

    pub fn narrative_sheet(&mut self, package: &ClaimPackage) -> DocumentResult<&mut Self> {
        self.apply(&narrative_plan(package))
    }

    pub fn contents_sheet(&mut self, package: &ClaimPackage) -> DocumentResult<&mut Self> {
        let plan = contents_plan(package, self.style);
        self.apply(&plan)
    }

    pub fn save(self, path: &Path) -> DocumentResult<()> {
        self.generator.save(path)
    }
}
