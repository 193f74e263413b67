//! Member handlers.
//!
//! ## Commands
//! - Registering, editing and deleting members
//! - Renewing a membership
//!
//! ## Queries
//! - Get a member
//! - Search members
//! - Change and renewal history

mod delete_member;
mod get_member;
mod get_member_history;
mod register_member;
mod renew_membership;
mod search_members;
mod update_member;

// Commands
pub use delete_member::{DeleteMemberCommand, DeleteMemberHandler};
pub use register_member::{RegisterMemberCommand, RegisterMemberHandler, RegisterMemberResult};
pub use renew_membership::{RenewMembershipCommand, RenewMembershipHandler, RenewMembershipResult};
pub use update_member::{UpdateMemberCommand, UpdateMemberHandler, UpdateMemberResult};

// Queries
pub use get_member::{GetMemberHandler, GetMemberQuery, GetMemberResult};
pub use get_member_history::{
    GetMemberHistoryHandler, GetMemberHistoryQuery, GetMemberHistoryResult, MemberHistory,
};
pub use search_members::{SearchMembersHandler, SearchMembersQuery, SearchMembersResult};
