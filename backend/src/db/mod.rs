pub mod connection;
pub mod session;

pub use connection::create_pool;
pub use session::{Database, DbSession, IsolationLevel};
