//! REST API for the try-on configurator
//!
//! Booking intake, catalog, brand settings and mannequin endpoints, plus
//! static asset serving.

pub mod routes;
pub mod server;
pub mod shared;
pub mod types;

pub use routes::create_router;
pub use server::run_server;
pub use shared::{AppState, AppStateHandle};
pub use types::*;
