//! LaxDB backend: multi-tenant lacrosse organization management.
//!
//! Players, rosters, seasons, games, and feedback are owned by this service;
//! organizations, teams, and identity live in an external auth/organization
//! engine consumed over HTTP. Database access flows through the transactional
//! unit of work in [`db::session`].

pub mod auth;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod types;
pub mod utils;
pub mod validation;
