// Request handling: routing onto the rasterizers and the HTTP listener.

pub mod routes;
pub mod server;

pub use routes::{ApiResponse, Router};
pub use server::PlannerServer;
