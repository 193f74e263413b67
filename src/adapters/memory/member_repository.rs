use async_trait::async_trait;

use super::InMemoryGymStore;
use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::domain::member::{Member, MemberChange, NewMember, RenewalRecord};
use crate::ports::{MemberFilter, MemberRepository};

fn not_found(id: MemberId) -> DomainError {
    DomainError::new(ErrorCode::MemberNotFound, "Member not found")
        .with_detail("member_id", id.to_string())
}

fn duplicate(email: &str) -> DomainError {
    DomainError::new(ErrorCode::DuplicateMember, "Email already registered")
        .with_detail("email", email)
}

fn email_taken<'a>(
    mut members: impl Iterator<Item = &'a Member>,
    email: Option<&str>,
    except: Option<MemberId>,
) -> bool {
    match email {
        None => false,
        Some(email) => members.any(|m| {
            Some(m.id) != except && m.profile.email.as_deref() == Some(email)
        }),
    }
}

#[async_trait]
impl MemberRepository for InMemoryGymStore {
    async fn save(&self, member: &NewMember) -> Result<Member, DomainError> {
        let mut state = self.write()?;
        let email = member.profile.email.as_deref();
        if email_taken(state.members.values(), email, None) {
            return Err(duplicate(email.unwrap_or_default()));
        }

        state.last_member_id += 1;
        let stored = Member::from_new(MemberId::from_db(state.last_member_id), member.clone());
        state.members.insert(stored.id.as_i32(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, member: &Member, changes: &[MemberChange]) -> Result<(), DomainError> {
        let mut state = self.write()?;
        if !state.members.contains_key(&member.id.as_i32()) {
            return Err(not_found(member.id));
        }
        let email = member.profile.email.as_deref();
        if email_taken(state.members.values(), email, Some(member.id)) {
            return Err(duplicate(email.unwrap_or_default()));
        }

        state.members.insert(member.id.as_i32(), member.clone());
        state.changes.extend_from_slice(changes);
        Ok(())
    }

    async fn renew(&self, member: &Member, renewal: &RenewalRecord) -> Result<(), DomainError> {
        let mut state = self.write()?;
        match state.members.get_mut(&member.id.as_i32()) {
            Some(stored) => *stored = member.clone(),
            None => return Err(not_found(member.id)),
        }
        state.renewals.push(renewal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, DomainError> {
        Ok(self.read()?.members.get(&id.as_i32()).cloned())
    }

    async fn search(&self, filter: &MemberFilter) -> Result<Vec<Member>, DomainError> {
        Ok(self
            .read()?
            .members
            .values()
            .rev()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: MemberId) -> Result<(), DomainError> {
        let mut state = self.write()?;
        if state.members.remove(&id.as_i32()).is_none() {
            return Err(not_found(id));
        }
        state.changes.retain(|c| c.member_id != id);
        state.renewals.retain(|r| r.member_id != id);
        state.board.retain(|e| e.record.member_id != id);
        Ok(())
    }

    async fn changes_for(&self, id: MemberId) -> Result<Vec<MemberChange>, DomainError> {
        Ok(self
            .read()?
            .changes
            .iter()
            .filter(|c| c.member_id == id)
            .cloned()
            .collect())
    }

    async fn renewals_for(&self, id: MemberId) -> Result<Vec<RenewalRecord>, DomainError> {
        Ok(self
            .read()?
            .renewals
            .iter()
            .filter(|r| r.member_id == id)
            .cloned()
            .collect())
    }
}
