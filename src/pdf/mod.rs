pub mod builder;
pub mod generator;
pub mod layout;
pub mod metrics;

pub use builder::{escape_markup, render_layout, TypstBuilder};
pub use generator::TypstCompiler;
pub use layout::{layout_document, DocumentLayout, LayoutEngine, Page, PageKind, RowPlacement};
