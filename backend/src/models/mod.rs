//! Data models shared across database access and API handlers.

pub mod contact_info;
pub mod feedback;
pub mod game;
pub mod player;
pub mod season;
