pub mod error;
pub mod handlers;
pub mod identity;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use identity::AdminId;
pub use routes::configure_routes;
pub use state::ApiState;
