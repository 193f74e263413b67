//! Shared state for all HTTP handlers.

use std::sync::Arc;

use crate::application::handlers::attendance::{
    CheckInHandler, ClearAttendanceHandler, ListAttendanceHandler,
};
use crate::application::handlers::member::{
    DeleteMemberHandler, GetMemberHandler, GetMemberHistoryHandler, RegisterMemberHandler,
    RenewMembershipHandler, SearchMembersHandler, UpdateMemberHandler,
};
use crate::application::handlers::membership::QuoteMembershipHandler;
use crate::ports::{AttendanceRepository, Clock, MemberRepository};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; the dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct GymAppState {
    pub members: Arc<dyn MemberRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub clock: Arc<dyn Clock>,
}

impl GymAppState {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        attendance: Arc<dyn AttendanceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            members,
            attendance,
            clock,
        }
    }

    pub fn register_member_handler(&self) -> RegisterMemberHandler {
        RegisterMemberHandler::new(self.members.clone(), self.clock.clone())
    }

    pub fn get_member_handler(&self) -> GetMemberHandler {
        GetMemberHandler::new(self.members.clone(), self.clock.clone())
    }

    pub fn search_members_handler(&self) -> SearchMembersHandler {
        SearchMembersHandler::new(self.members.clone(), self.clock.clone())
    }

    pub fn update_member_handler(&self) -> UpdateMemberHandler {
        UpdateMemberHandler::new(self.members.clone(), self.clock.clone())
    }

    pub fn renew_membership_handler(&self) -> RenewMembershipHandler {
        RenewMembershipHandler::new(self.members.clone(), self.clock.clone())
    }

    pub fn delete_member_handler(&self) -> DeleteMemberHandler {
        DeleteMemberHandler::new(self.members.clone())
    }

    pub fn member_history_handler(&self) -> GetMemberHistoryHandler {
        GetMemberHistoryHandler::new(self.members.clone())
    }

    pub fn check_in_handler(&self) -> CheckInHandler {
        CheckInHandler::new(self.members.clone(), self.attendance.clone(), self.clock.clone())
    }

    pub fn list_attendance_handler(&self) -> ListAttendanceHandler {
        ListAttendanceHandler::new(self.attendance.clone(), self.clock.clone())
    }

    pub fn clear_attendance_handler(&self) -> ClearAttendanceHandler {
        ClearAttendanceHandler::new(self.attendance.clone())
    }

    pub fn quote_membership_handler(&self) -> QuoteMembershipHandler {
        QuoteMembershipHandler::new(self.clock.clone())
    }
}
