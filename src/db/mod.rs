pub mod initialize;
pub mod locations;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod store;
pub mod users;
