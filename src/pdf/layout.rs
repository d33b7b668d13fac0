//! Maquetación del reporte: medición de texto y decisiones de salto de página.
//!
//! Todas las coordenadas están en puntos, con origen en la esquina superior
//! izquierda. La `y` de un bloque de texto es el borde superior de su primera
//! línea; cada línea ocupa `size` y avanza `leading`.

use crate::core::{format_currency, RenderStyle, POINTS_PER_INCH};
use crate::models::{ClaimPackage, MetadataField};

use super::metrics::text_width;

const INCH: f32 = POINTS_PER_INCH;
const NBSP: char = '\u{a0}';
const TAB_WIDTH: usize = 4;
/// Fracción del cuerpo por encima de la línea base
const ASCENT: f32 = 0.8;
const ROW_GAP: f32 = 6.0;

pub const NARRATIVE_TITLE: &str = "Claim Package";
pub const CONTENTS_TITLE: &str = "Contents Estimate";
pub const TABLE_HEADERS: [&str; 3] = ["Category", "Justification", "Total"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub leading: f32,
    pub bold: bool,
}

impl TextStyle {
    pub fn regular(size: f32, leading: f32) -> Self {
        TextStyle { size, leading, bold: false }
    }

    pub fn bold(size: f32, leading: f32) -> Self {
        TextStyle { size, leading, bold: true }
    }

    pub fn block_height(&self, lines: usize) -> f32 {
        lines as f32 * self.leading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `x` es el borde izquierdo
    Left,
    /// Centrado horizontal en la página, `x` se ignora
    Center,
    /// `x` es el borde derecho
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub x: f32,
    pub y: f32,
    pub anchor: Anchor,
    pub width: Option<f32>,
    pub style: TextStyle,
    /// Líneas ya partidas, texto sin escapar
    pub lines: Vec<String>,
}

impl TextBox {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Logo(Rect),
    Text(TextBox),
    Rule { x: f32, y: f32, length: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Narrative,
    NarrativeContinued,
    Contents,
    ContentsContinued,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub kind: PageKind,
    pub elements: Vec<Element>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &TextBox> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn has_table_header(&self) -> bool {
        self.texts().any(|t| t.lines.len() == 1 && t.lines[0] == TABLE_HEADERS[0] && t.style.bold)
    }
}

/// Dónde terminó cada fila del estimado
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlacement {
    pub index: usize,
    pub page: usize,
    pub top: f32,
    pub height: f32,
    pub oversized: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
    pub rows: Vec<RowPlacement>,
}

impl DocumentLayout {
    pub fn content_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages
            .iter()
            .filter(|p| matches!(p.kind, PageKind::Contents | PageKind::ContentsContinued))
    }
}

/// Geometría fija del reporte derivada del tamaño de página
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    pub margin_x: f32,
    pub bottom: f32,
    pub logo: Rect,
    pub narrative_title_baseline: f32,
    pub narrative_top: f32,
    pub continued_top: f32,
    pub contents_title_baseline: f32,
    pub metadata_baseline: f32,
    pub metadata_step: f32,
    pub category_x: f32,
    pub category_width: f32,
    pub justification_x: f32,
    pub justification_width: f32,
    pub amount_right: f32,
    pub total_header_x: f32,
}

impl Geometry {
    pub fn for_page(width: f32, height: f32) -> Self {
        let margin_x = INCH;
        let category_x = margin_x;
        let category_width = 2.0 * INCH;
        let justification_x = category_x + category_width + 0.2 * INCH;
        let amount_right = width - 1.1 * INCH;

        Geometry {
            width,
            height,
            margin_x,
            bottom: height - INCH,
            logo: Rect {
                x: 0.5 * INCH,
                y: 0.2 * INCH,
                width: 3.2 * INCH,
                height: 1.2 * INCH,
            },
            narrative_title_baseline: 2.5 * INCH,
            narrative_top: 3.0 * INCH,
            continued_top: 1.9 * INCH,
            contents_title_baseline: 1.9 * INCH,
            metadata_baseline: 3.2 * INCH,
            metadata_step: 0.3 * INCH,
            category_x,
            category_width,
            justification_x,
            justification_width: (amount_right - INCH) - justification_x,
            amount_right,
            total_header_x: width - 1.4 * INCH,
        }
    }

    fn text_width(&self) -> f32 {
        self.width - 2.0 * self.margin_x
    }
}

/// Normaliza saltos de línea y tabulaciones; devuelve las líneas duras.
pub fn hard_lines(raw: &str) -> Vec<String> {
    let tab: String = std::iter::repeat(NBSP).take(TAB_WIDTH).collect();
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &tab)
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Ajuste voraz por palabras al ancho disponible.
///
/// Las palabras más largas que el ancho se cortan por carácter. Un texto vacío
/// no produce líneas; una línea dura vacía produce una línea vacía.
pub fn wrap_text(raw: &str, max_width: f32, size: f32, bold: bool) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for hard in hard_lines(raw) {
        let mut current = String::new();
        let mut pushed_any = false;

        for word in hard.split(' ').filter(|w| !w.is_empty()) {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if text_width(&candidate, size, bold) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                pushed_any = true;
            }

            if text_width(word, size, bold) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = split_long_word(word, max_width, size, bold);
                current = pieces.pop().unwrap_or_default();
                pushed_any |= !pieces.is_empty();
                lines.extend(pieces);
            }
        }

        if !current.is_empty() || !pushed_any {
            lines.push(current);
        }
    }
    lines
}

fn split_long_word(word: &str, max_width: f32, size: f32, bold: bool) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if text_width(&piece, size, bold) > max_width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Medición de una fila de la tabla, antes de asignarle posición
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredRow {
    pub category: Vec<String>,
    pub justification: Vec<String>,
    pub amount: String,
    pub height: f32,
}

pub struct LayoutEngine<'a> {
    style: &'a RenderStyle,
    geo: Geometry,
    pages: Vec<Page>,
    rows: Vec<RowPlacement>,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(style: &'a RenderStyle) -> Self {
        let (width, height) = style.page_size.dimensions();
        LayoutEngine {
            style,
            geo: Geometry::for_page(width, height),
            pages: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn layout(mut self, package: &ClaimPackage) -> DocumentLayout {
        self.narrative_pages(&package.narrative);
        self.contents_pages(package);

        DocumentLayout {
            page_width: self.geo.width,
            page_height: self.geo.height,
            pages: self.pages,
            rows: self.rows,
        }
    }

    fn body(&self) -> TextStyle {
        TextStyle::regular(self.style.body_size, self.style.body_leading)
    }

    fn row_text(&self) -> TextStyle {
        TextStyle::regular(self.style.row_size, self.style.row_leading)
    }

    fn label(&self) -> TextStyle {
        TextStyle::bold(self.style.body_size, self.style.body_leading)
    }

    fn title(&self) -> TextStyle {
        TextStyle::bold(self.style.title_size, self.style.title_size)
    }

    fn start_page(&mut self, kind: PageKind) -> &mut Page {
        self.pages.push(Page {
            kind,
            elements: vec![Element::Logo(self.geo.logo)],
        });
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn current_page(&mut self) -> &mut Page {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn push_text(&mut self, x: f32, y: f32, anchor: Anchor, width: Option<f32>, style: TextStyle, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        self.current_page().elements.push(Element::Text(TextBox {
            x,
            y,
            anchor,
            width,
            style,
            lines,
        }));
    }

    fn push_line_at_baseline(&mut self, x: f32, baseline: f32, anchor: Anchor, style: TextStyle, text: &str) {
        let top = baseline - ASCENT * style.size;
        self.push_text(x, top, anchor, None, style, vec![text.to_string()]);
    }

    /// Página 1 y, si el texto no cabe, páginas de continuación
    fn narrative_pages(&mut self, narrative: &str) {
        let body = self.body();
        let width = self.geo.text_width();
        let mut lines = wrap_text(narrative, width, body.size, body.bold).into_iter();

        self.start_page(PageKind::Narrative);
        let title = self.title();
        self.push_line_at_baseline(0.0, self.geo.narrative_title_baseline, Anchor::Center, title, NARRATIVE_TITLE);

        let mut top = self.geo.narrative_top;
        loop {
            let capacity = (((self.geo.bottom - top) / body.leading).floor() as usize).max(1);
            let chunk: Vec<String> = lines.by_ref().take(capacity).collect();
            if chunk.is_empty() {
                break;
            }
            let full = chunk.len() == capacity;
            self.push_text(self.geo.margin_x, top, Anchor::Left, Some(width), body, chunk);

            if !full || lines.len() == 0 {
                break;
            }
            self.start_page(PageKind::NarrativeContinued);
            top = self.geo.continued_top;
        }
    }

    pub fn measure_row(&self, category: &str, justification: &str, amount: &str) -> MeasuredRow {
        let style = self.row_text();
        let category = wrap_text(category, self.geo.category_width, style.size, style.bold);
        let justification = wrap_text(justification, self.geo.justification_width, style.size, style.bold);

        let height = style
            .block_height(category.len())
            .max(style.block_height(justification.len()))
            .max(style.leading);

        MeasuredRow {
            category,
            justification,
            amount: amount.to_string(),
            height,
        }
    }

    /// Encabezado de tabla en `baseline`; devuelve la `y` de la primera fila
    fn table_header(&mut self, baseline: f32) -> f32 {
        let label = self.label();
        let [category, justification, total] = TABLE_HEADERS;
        let (cx, jx, tx) = (
            self.geo.margin_x,
            self.geo.margin_x + 2.3 * INCH,
            self.geo.total_header_x,
        );
        self.push_line_at_baseline(cx, baseline, Anchor::Left, label, category);
        self.push_line_at_baseline(jx, baseline, Anchor::Left, label, justification);
        self.push_line_at_baseline(tx, baseline, Anchor::Left, label, total);

        let rule_y = baseline + 0.3 * INCH;
        let length = self.geo.width - 2.0 * self.geo.margin_x;
        let x = self.geo.margin_x;
        self.current_page().elements.push(Element::Rule {
            x,
            y: rule_y,
            length,
        });
        rule_y + 0.2 * INCH
    }

    fn contents_pages(&mut self, package: &ClaimPackage) {
        self.start_page(PageKind::Contents);
        let title = self.title();
        self.push_line_at_baseline(0.0, self.geo.contents_title_baseline, Anchor::Center, title, CONTENTS_TITLE);

        let label = self.label();
        let value = self.body();
        let mut baseline = self.geo.metadata_baseline;
        for field in MetadataField::ALL {
            let label_text = format!("{}: ", field.label());
            let label_width = text_width(&label_text, label.size, label.bold);
            self.push_line_at_baseline(self.geo.margin_x, baseline, Anchor::Left, label, label_text.trim_end());
            let field_value = package.estimate.field(field);
            if !field_value.is_empty() {
                self.push_line_at_baseline(self.geo.margin_x + label_width, baseline, Anchor::Left, value, field_value);
            }
            baseline += self.geo.metadata_step;
        }

        baseline += self.geo.metadata_step;
        let total = TextStyle::bold(self.style.total_size, self.style.total_size);
        self.push_line_at_baseline(0.0, baseline, Anchor::Center, total, &package.total_banner());
        baseline += 2.0 * self.geo.metadata_step;

        let mut y = self.table_header(baseline);
        let continued_rows_top = self.geo.continued_top + 0.5 * INCH;
        let continuation_capacity = self.geo.bottom - continued_rows_top;
        let mut rows_on_page = 0usize;
        let mut on_continuation = false;

        for (index, row) in package.rows().iter().enumerate() {
            let measured = self.measure_row(&row.category, &row.justification, &format_currency(row.amount));
            let fits = y + measured.height <= self.geo.bottom;

            // Una página de continuación vacía no se vuelve a saltar
            if !fits && (rows_on_page > 0 || !on_continuation) {
                self.start_page(PageKind::ContentsContinued);
                y = self.table_header(self.geo.continued_top);
                rows_on_page = 0;
                on_continuation = true;
            }

            let oversized = y + measured.height > self.geo.bottom;
            if oversized {
                tracing::warn!(
                    row = index,
                    height = measured.height,
                    available = continuation_capacity,
                    "fila más alta que la página; se dibuja sola y se recorta"
                );
            }

            self.place_row(y, &measured);
            self.rows.push(RowPlacement {
                index,
                page: self.pages.len() - 1,
                top: y,
                height: measured.height,
                oversized,
            });
            rows_on_page += 1;
            y += measured.height + ROW_GAP;
        }
    }

    fn place_row(&mut self, y: f32, row: &MeasuredRow) {
        let style = self.row_text();
        self.push_text(
            self.geo.category_x,
            y,
            Anchor::Left,
            Some(self.geo.category_width),
            style,
            row.category.clone(),
        );
        self.push_text(
            self.geo.justification_x,
            y,
            Anchor::Left,
            Some(self.geo.justification_width),
            style,
            row.justification.clone(),
        );
        let amount_top = y + (row.height - style.size) / 2.0;
        self.push_text(
            self.geo.amount_right,
            amount_top,
            Anchor::Right,
            None,
            style,
            vec![row.amount.clone()],
        );
    }
}

pub fn layout_document(package: &ClaimPackage, style: &RenderStyle) -> DocumentLayout {
    LayoutEngine::new(style).layout(package)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EstimateRecord, LineItem};

    fn package(narrative: &str, rows: Vec<LineItem>) -> ClaimPackage {
        ClaimPackage::new(
            "Jane Doe",
            narrative,
            EstimateRecord {
                claimant: "Jane Doe".into(),
                property: "12 Elm St".into(),
                estimator: "R. Diaz".into(),
                estimate_type: "Contents".into(),
                date_entered: "03/01/2024".into(),
                date_completed: "03/09/2024".into(),
                rows,
            },
        )
    }

    fn all_text(page: &Page) -> Vec<String> {
        page.texts().map(|t| t.text()).collect()
    }

    #[test]
    fn wrap_respects_width() {
        let text = "The basement flooded after the sump pump failed overnight and soaked every box";
        let lines = wrap_text(text, 100.0, 10.0, false);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 10.0, false) <= 100.0, "{line:?} too wide");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_keeps_hard_breaks_and_blank_lines() {
        let lines = wrap_text("first\r\n\nthird", 500.0, 12.0, false);
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn wrap_expands_tabs_to_nbsp() {
        let lines = wrap_text("a\tb", 500.0, 12.0, false);
        assert_eq!(lines, vec!["a\u{a0}\u{a0}\u{a0}\u{a0}b"]);
    }

    #[test]
    fn wrap_splits_words_longer_than_the_column() {
        let word = "W".repeat(40);
        let lines = wrap_text(&word, 50.0, 10.0, false);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        assert!(lines.iter().all(|l| text_width(l, 10.0, false) <= 50.0));
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text("", 100.0, 10.0, false).is_empty());
    }

    #[test]
    fn row_height_is_max_of_columns_with_floor() {
        let style = RenderStyle::default();
        let engine = LayoutEngine::new(&style);

        let short = engine.measure_row("TV", "", "$1.00");
        assert_eq!(short.height, style.row_leading);

        let long = engine.measure_row("Sofa", &"water damage ".repeat(30), "$1.00");
        assert_eq!(long.height, long.justification.len() as f32 * style.row_leading);
        assert!(long.justification.len() > long.category.len());
    }

    #[test]
    fn scenario_two_rows_single_contents_page() {
        let style = RenderStyle::default();
        let layout = layout_document(
            &package(
                "Pipe burst",
                vec![
                    LineItem::new("Sofa", "Water damage", 450.00),
                    LineItem::new("TV", "Cracked screen", 899.99),
                ],
            ),
            &style,
        );

        assert_eq!(layout.pages.len(), 2);
        assert_eq!(layout.pages[0].kind, PageKind::Narrative);
        assert_eq!(layout.pages[1].kind, PageKind::Contents);

        let texts = all_text(&layout.pages[1]);
        assert!(texts.contains(&"Total Replacement Cost Value: $1,349.99".to_string()));
        assert!(texts.contains(&CONTENTS_TITLE.to_string()));
        let sofa = texts.iter().position(|t| t == "Sofa").unwrap();
        let tv = texts.iter().position(|t| t == "TV").unwrap();
        assert!(sofa < tv);
        assert!(texts.contains(&"$899.99".to_string()));

        assert_eq!(layout.rows.len(), 2);
        assert!(layout.rows[0].top < layout.rows[1].top);
    }

    #[test]
    fn metadata_labels_and_values_are_stacked() {
        let layout = layout_document(&package("", vec![]), &RenderStyle::default());
        let page = &layout.pages[1];
        let labels: Vec<&TextBox> = page
            .texts()
            .filter(|t| t.style.bold && t.lines[0].ends_with(':'))
            .collect();
        assert_eq!(labels.len(), 6);
        assert!(labels.windows(2).all(|w| w[0].y < w[1].y));
        assert_eq!(labels[3].lines[0], "Estimate Type:");

        let value = page.texts().find(|t| t.lines[0] == "12 Elm St").unwrap();
        assert!(!value.style.bold);
        assert!(value.x > labels[1].x);
    }

    #[test]
    fn zero_rows_still_render_header_and_total() {
        let layout = layout_document(&package("", vec![]), &RenderStyle::default());
        assert_eq!(layout.pages.len(), 2);
        assert!(layout.pages[1].has_table_header());
        assert!(all_text(&layout.pages[1]).contains(&"Total Replacement Cost Value: $0.00".to_string()));
        assert!(layout.rows.is_empty());
    }

    #[test]
    fn many_rows_paginate_with_headers_and_no_split_rows() {
        let style = RenderStyle::default();
        let rows: Vec<LineItem> = (0..60)
            .map(|i| LineItem::new(format!("Item {i}"), "Smoke damage throughout the unit, replaced at like kind and quality", 10.0))
            .collect();
        let layout = layout_document(&package("", rows), &style);

        let contents: Vec<&Page> = layout.content_pages().collect();
        assert!(contents.len() > 1);
        assert!(contents.iter().all(|p| p.has_table_header()));
        assert!(contents[1..].iter().all(|p| p.kind == PageKind::ContentsContinued));
        assert!(!all_text(contents[1]).contains(&CONTENTS_TITLE.to_string()));

        let geo = Geometry::for_page(612.0, 792.0);
        for placement in &layout.rows {
            assert!(!placement.oversized);
            assert!(placement.top + placement.height <= geo.bottom);
        }
        let indexes: Vec<usize> = layout.rows.iter().map(|r| r.index).collect();
        assert_eq!(indexes, (0..60).collect::<Vec<_>>());
        assert!(layout.rows.windows(2).all(|w| w[0].page <= w[1].page));
    }

    #[test]
    fn oversized_row_gets_its_own_page() {
        let style = RenderStyle::default();
        let huge = "Mold remediation line ".repeat(400);
        let layout = layout_document(
            &package(
                "",
                vec![
                    LineItem::new("Chair", "Broken", 20.0),
                    LineItem::new("Walls", huge, 5000.0),
                    LineItem::new("Desk", "Warped", 80.0),
                ],
            ),
            &style,
        );

        let big = layout.rows[1];
        assert!(big.oversized);
        assert_ne!(big.page, layout.rows[0].page);
        assert_ne!(big.page, layout.rows[2].page);
        assert!(!layout.rows[2].oversized);
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn oversized_row_is_logged_and_clipped_at_the_page_edge() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let style = RenderStyle::default();
        let huge = "Mold remediation line ".repeat(400);
        let layout = tracing::subscriber::with_default(subscriber, || {
            layout_document(
                &package(
                    "",
                    vec![
                        LineItem::new("Chair", "Broken", 20.0),
                        LineItem::new("Walls", huge, 5000.0),
                    ],
                ),
                &style,
            )
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("row=1"), "{logs}");
        assert!(!logs.contains("row=0"), "{logs}");

        let big = layout.rows[1];
        let bottom = layout.page_height - INCH;
        assert!(big.top + big.height > bottom);
        assert!(big.top < bottom);
    }

    #[test]
    fn long_narrative_flows_onto_continuation_pages() {
        let narrative = (0..120).map(|i| format!("Line {i}")).collect::<Vec<_>>().join("\n");
        let layout = layout_document(&package(&narrative, vec![]), &RenderStyle::default());

        let narrative_pages: Vec<&Page> = layout
            .pages
            .iter()
            .filter(|p| matches!(p.kind, PageKind::Narrative | PageKind::NarrativeContinued))
            .collect();
        assert!(narrative_pages.len() >= 3);

        let flowed: Vec<String> = narrative_pages
            .iter()
            .flat_map(|p| p.texts().filter(|t| t.width.is_some()).flat_map(|t| t.lines.clone()))
            .collect();
        assert_eq!(flowed.len(), 120);
        assert_eq!(flowed[119], "Line 119");
        assert_eq!(layout.pages.last().unwrap().kind, PageKind::Contents);
    }

    #[test]
    fn every_page_carries_the_logo_slot() {
        let layout = layout_document(&package("x", vec![]), &RenderStyle::default());
        for page in &layout.pages {
            assert!(matches!(page.elements[0], Element::Logo(_)));
        }
    }
}
