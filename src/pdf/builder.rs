use crate::core::{Logo, RenderStyle};

use super::layout::{Anchor, DocumentLayout, Element, Rect, TextBox};

/// Caracteres con significado en el marcado de Typst
const MARKUP_SPECIAL: &[char] = &[
    '\\', '#', '$', '*', '_', '@', '<', '>', '[', ']', '`', '~', '=', '-', '+', '/', '\'', '"',
];

/// Escapa una línea para que Typst la trate como texto plano
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    // "1." al inicio de línea abriría una lista numerada
    let enum_dot = text
        .find(|c: char| !c.is_ascii_digit())
        .filter(|&i| i > 0 && text[i..].starts_with('.'));

    for (i, c) in text.char_indices() {
        // "..." es el atajo de Typst para la elipsis
        let ellipsis = c == '.' && text[i..].starts_with("...");
        if MARKUP_SPECIAL.contains(&c) || Some(i) == enum_dot || ellipsis {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapa un literal de cadena de Typst (`"..."`)
pub fn escape_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Une líneas ya partidas con saltos de línea forzados (`\` + salto)
pub fn markup_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| escape_markup(line))
        .collect::<Vec<_>>()
        .join("\\\n")
}

fn pt(value: f32) -> String {
    format!("{:.2}pt", value)
}

pub struct TypstBuilder {
    sections: Vec<String>,
    page_width: f32,
}

impl TypstBuilder {
    pub fn new(title: &str, style: &RenderStyle) -> Self {
        let (width, height) = style.page_size.dimensions();
        let header = format!(
            r#"#set document(title: "{}")
#set page(width: {}, height: {}, margin: 0pt, fill: {})
#set text(font: {}, fill: {}, size: {}, top-edge: 0.8em, bottom-edge: -0.2em)"#,
            escape_string(title),
            pt(width),
            pt(height),
            style.page_background.to_typst(),
            style.typst_font_list(),
            style.text_color.to_typst(),
            pt(style.body_size),
        );

        TypstBuilder {
            sections: vec![header],
            page_width: width,
        }
    }

    pub fn add_image(&mut self, area: &Rect, logo: &Logo) -> &mut Self {
        self.sections.push(format!(
            "#place(top + left, dx: {}, dy: {}, box(width: {}, height: {}, image(\"{}\", width: 100%, height: 100%, fit: \"contain\")))",
            pt(area.x),
            pt(area.y),
            pt(area.width),
            pt(area.height),
            escape_string(&logo.path.to_string_lossy()),
        ));
        self
    }

    pub fn add_text(&mut self, text: &TextBox) -> &mut Self {
        let weight = if text.style.bold { "bold" } else { "regular" };
        let leading = (text.style.leading - text.style.size).max(0.0);
        let mut body = format!(
            "text(size: {}, weight: \"{}\")[{}]",
            pt(text.style.size),
            weight,
            markup_lines(&text.lines)
        );

        if let Some(width) = text.width {
            body = format!("block(width: {})[#set par(leading: {})\n#{}]", pt(width), pt(leading), body);
        } else if text.lines.len() > 1 {
            body = format!("block[#set par(leading: {})\n#{}]", pt(leading), body);
        }

        let placement = match text.anchor {
            Anchor::Left => format!("top + left, dx: {}, dy: {}", pt(text.x), pt(text.y)),
            Anchor::Center => format!("top + center, dy: {}", pt(text.y)),
            Anchor::Right => format!(
                "top + right, dx: {}, dy: {}",
                pt(text.x - self.page_width),
                pt(text.y)
            ),
        };

        self.sections.push(format!("#place({}, {})", placement, body));
        self
    }

    pub fn add_horizontal_line(&mut self, x: f32, y: f32, length: f32, style: &RenderStyle) -> &mut Self {
        self.sections.push(format!(
            "#place(top + left, dx: {}, dy: {}, line(length: {}, stroke: 0.75pt + {}))",
            pt(x),
            pt(y),
            pt(length),
            style.text_color.to_typst()
        ));
        self
    }

    pub fn add_page_break(&mut self) -> &mut Self {
        self.sections.push("#pagebreak()".to_string());
        self
    }

    pub fn build(&self) -> String {
        self.sections.join("\n\n")
    }
}

/// Convierte una maquetación en código fuente Typst.
///
/// Sin logo, las zonas reservadas para la imagen quedan vacías.
pub fn render_layout(layout: &DocumentLayout, style: &RenderStyle, title: &str, logo: Option<&Logo>) -> String {
    let mut builder = TypstBuilder::new(title, style);

    for (index, page) in layout.pages.iter().enumerate() {
        if index > 0 {
            builder.add_page_break();
        }
        for element in &page.elements {
            match element {
                Element::Logo(area) => {
                    if let Some(logo) = logo {
                        builder.add_image(area, logo);
                    }
                }
                Element::Text(text) => {
                    builder.add_text(text);
                }
                Element::Rule { x, y, length } => {
                    builder.add_horizontal_line(*x, *y, *length, style);
                }
            }
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClaimPackage, EstimateRecord, LineItem};
    use crate::pdf::layout::layout_document;
    use std::path::PathBuf;

    fn package(narrative: &str, rows: Vec<LineItem>) -> ClaimPackage {
        ClaimPackage::new(
            "Jane Doe",
            narrative,
            EstimateRecord {
                claimant: "Jane Doe".into(),
                rows,
                ..Default::default()
            },
        )
    }

    #[test]
    fn escapes_every_markup_character() {
        assert_eq!(escape_markup("a < b & c"), "a \\< b & c");
        assert_eq!(escape_markup("#let x = $5"), "\\#let x \\= \\$5");
        assert_eq!(escape_markup("// not a comment"), "\\/\\/ not a comment");
        assert_eq!(escape_markup("C:\\temp"), "C:\\\\temp");
        assert_eq!(escape_markup("plain words"), "plain words");
        assert_eq!(escape_markup("12. Sofa"), "12\\. Sofa");
        assert_eq!(escape_markup("Sofa 2. and 3"), "Sofa 2. and 3");
        assert_eq!(escape_markup("wait... what"), "wait\\... what");
        assert_eq!(escape_markup("1..."), "1\\...");
    }

    #[test]
    fn lines_are_joined_with_forced_breaks() {
        let lines = vec!["one".to_string(), String::new(), "<three>".to_string()];
        assert_eq!(markup_lines(&lines), "one\\\n\\\n\\<three\\>");
    }

    #[test]
    fn narrative_with_markup_renders_as_literal_text() {
        let style = RenderStyle::default();
        let layout = layout_document(&package("Tom & Jerry <CEO>\nsecond line", vec![]), &style);
        let source = render_layout(&layout, &style, "Jane Doe Claim", None);

        assert!(source.contains("Tom & Jerry \\<CEO\\>\\\nsecond line"));
        assert!(!source.contains("<CEO>"));
    }

    #[test]
    fn pages_are_separated_by_explicit_breaks() {
        let style = RenderStyle::default();
        let rows = (0..40)
            .map(|i| LineItem::new(format!("Item {i}"), "Ceiling collapse, full replacement of contents", 1.0))
            .collect();
        let layout = layout_document(&package("", rows), &style);
        let source = render_layout(&layout, &style, "t", None);

        assert_eq!(source.matches("#pagebreak()").count(), layout.pages.len() - 1);
        assert_eq!(source.matches("[Category]").count(), layout.content_pages().count());
    }

    #[test]
    fn logo_is_drawn_only_when_available() {
        let style = RenderStyle::default();
        let layout = layout_document(&package("", vec![]), &style);

        let without = render_layout(&layout, &style, "t", None);
        assert!(!without.contains("image("));

        let logo = Logo {
            path: PathBuf::from("/srv/static/logo.jpg"),
            width_px: 300,
            height_px: 100,
        };
        let with = render_layout(&layout, &style, "t", Some(&logo));
        assert_eq!(with.matches("image(\"/srv/static/logo.jpg\"").count(), layout.pages.len());
    }

    #[test]
    fn header_sets_page_and_colors() {
        let style = RenderStyle::default();
        let source = TypstBuilder::new("Jane \"JD\" Doe", &style).build();
        assert!(source.contains("#set page(width: 612.00pt, height: 792.00pt, margin: 0pt, fill: rgb(\"#FEFDF9\"))"));
        assert!(source.contains("fill: rgb(\"#3D4335\")"));
        assert!(source.contains("title: \"Jane \\\"JD\\\" Doe\""));
    }

    #[test]
    fn amounts_are_right_anchored() {
        let style = RenderStyle::default();
        let layout = layout_document(&package("", vec![LineItem::new("TV", "Cracked", 899.99)]), &style);
        let source = render_layout(&layout, &style, "t", None);
        assert!(source
            .lines()
            .any(|l| l.starts_with("#place(top + right, dx: -79.20pt") && l.contains("[\\$899.99]")));
    }
}
