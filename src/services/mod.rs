pub mod server;
pub mod summary;
