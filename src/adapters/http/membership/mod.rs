//! HTTP adapter for membership pricing endpoints.
//!
//! - `GET /api/membership/packages` - Price list
//! - `POST /api/membership/quote` - End date, fee, status and age for a prospective member

pub mod dto;
mod handlers;
mod routes;

pub use routes::membership_routes;
