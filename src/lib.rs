//! Session and API client layer for the fitness-coaching service.
//!
//! All business data lives behind the remote REST API. This crate stores the
//! session token, decodes its (unverified) claims, gates pages by role and
//! expiry, and wraps the remote CRUD endpoints.

pub mod model;
pub mod pages;
pub mod remote;
pub mod routes;
pub mod session;
pub mod store;
pub mod token;
