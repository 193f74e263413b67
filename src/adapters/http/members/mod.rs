//! HTTP adapter for member endpoints.
//!
//! - `POST /api/members` - Register a member
//! - `GET /api/members` - Search members
//! - `GET|PUT|DELETE /api/members/:id` - Read, edit, delete
//! - `POST /api/members/:id/renew` - Renew a membership
//! - `GET /api/members/:id/history` - Change and renewal logs

pub mod dto;
mod handlers;
mod routes;

pub use routes::member_routes;
