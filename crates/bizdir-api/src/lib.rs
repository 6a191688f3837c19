//! # Bizdir API
//! 
//! HTTP handlers, middleware, error envelope, and router.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;

#[cfg(test)]
mod test;
