//! Application initialization.
//!
//! Logger setup lives here. DNS resolvers are not initialized up front: one is built
//! per query, routed to that query's nameserver (see `dns::create_resolver`).

mod logger;

// Re-export public API
pub use logger::init_logger_with;
