pub mod body;
pub mod handlers;
pub mod params;
pub mod routes;
pub mod state;

pub use routes::{router, router_with_assets};
pub use state::AppState;
