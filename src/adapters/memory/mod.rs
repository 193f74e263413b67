//! In-memory adapters.
//!
//! `InMemoryGymStore` implements both repository ports over one shared
//! state, so deleting a member also removes their board row and logs the
//! way the database's cascading foreign keys do. Used by tests and for
//! running the API without a database.

mod attendance_repository;
mod member_repository;

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::attendance::{AttendanceEntry, AttendanceRecord};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::member::{Member, MemberChange, RenewalRecord};

/// Thread-safe in-memory store of members and attendance.
#[derive(Debug, Default)]
pub struct InMemoryGymStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    last_member_id: i32,
    members: BTreeMap<i32, Member>,
    changes: Vec<MemberChange>,
    renewals: Vec<RenewalRecord>,
    last_num: i32,
    board: Vec<AttendanceEntry>,
    backup: Vec<AttendanceRecord>,
}

impl InMemoryGymStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every check-in ever recorded, oldest first.
    pub fn backup(&self) -> Result<Vec<AttendanceRecord>, DomainError> {
        Ok(self.read()?.backup.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, DomainError> {
        self.state.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, DomainError> {
        self.state.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "In-memory store lock poisoned")
}
