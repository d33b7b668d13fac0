pub mod registry;
pub mod service;

pub use registry::{FileRegistry, MemoryRegistry};
pub use service::{ClaimService, FinalizedClaim};
