pub mod estimate;
pub mod form;
pub mod records;

pub use estimate::*;
pub use form::*;
pub use records::*;
