pub mod catalog;
pub mod games;
pub mod handlers;
pub mod import;
pub mod middleware;
pub mod routes;
pub mod walkthroughs;

pub use routes::create_router;
