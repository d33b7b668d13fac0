pub mod builder;
pub mod generator;

pub use builder::{contents_plan, narrative_plan, CellStyle, CellValue, ClaimWorkbookBuilder, Palette, SheetPlan};
pub use generator::ExcelGenerator;
