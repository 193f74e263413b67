//! Member domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - Member aggregate, change and renewal log entries
//! - `profile` - Validated front-desk input
//! - `errors` - MemberError

mod aggregate;
mod errors;
mod profile;

pub use aggregate::{FieldChange, Member, MemberChange, NewMember, RenewalRecord};
pub use errors::MemberError;
pub use profile::{capitalize_name, MemberInput, MemberProfile};
