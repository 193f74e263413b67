//! Member aggregate.
//!
//! A member owns a profile (entered at the desk) and the membership terms
//! computed from it. Terms are never edited directly; they are recomputed
//! whenever the starting date or package changes.
//!
//! # Design Decisions
//!
//! - **Serial ids**: the database assigns ids, so unsaved members are `NewMember`
//! - **Derived status**: `refresh_status` recomputes it against today
//! - **Audited edits**: `edit` reports every changed field for the change log

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::{MemberError, MemberProfile};
use crate::domain::foundation::{MemberId, Money};
use crate::domain::membership::{compute_age, compute_status, MembershipPackage, MembershipTerms};

/// A member that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub profile: MemberProfile,
    pub age: Option<u32>,
    pub terms: MembershipTerms,
}

impl NewMember {
    /// Computes age and membership terms for a validated profile.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` when the birth date is after `today`.
    pub fn create(profile: MemberProfile, today: NaiveDate) -> Result<Self, MemberError> {
        let age = age_on(&profile, today)?;
        let terms = MembershipTerms::compute(profile.starting_date, &profile.package_label, today);
        Ok(Self {
            profile,
            age,
            terms,
        })
    }
}

/// Member aggregate.
///
/// # Invariants
///
/// - `terms` always match `profile.starting_date` and `profile.package_label`
/// - `age` matches `profile.birthdate` as of the last edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub profile: MemberProfile,
    pub age: Option<u32>,
    pub terms: MembershipTerms,
    /// Guest invitations used. Legacy column, carried through unchanged.
    pub invitations: i32,
    /// Whether the one allowed freeze was used. Legacy column, carried
    /// through unchanged.
    pub freeze_used: bool,
}

impl Member {
    /// Gives a stored `NewMember` its id.
    pub fn from_new(id: MemberId, new: NewMember) -> Self {
        Self {
            id,
            profile: new.profile,
            age: new.age,
            terms: new.terms,
            invitations: 0,
            freeze_used: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    /// Recomputes the status against `today`.
    pub fn refresh_status(&mut self, today: NaiveDate) {
        self.terms.status = self.terms.end_date.map(|end| compute_status(end, today));
    }

    /// Replaces the profile, recomputing age and terms.
    ///
    /// Returns the fields that changed, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` when the birth date is after `today`.
    pub fn edit(
        &mut self,
        profile: MemberProfile,
        today: NaiveDate,
    ) -> Result<Vec<FieldChange>, MemberError> {
        let updated = NewMember::create(profile, today)?;
        let changes = diff(self, &updated);

        self.profile = updated.profile;
        self.age = updated.age;
        self.terms = updated.terms;

        Ok(changes)
    }

    /// Starts a new membership period on `renewal_date`.
    pub fn renew(&mut self, package: MembershipPackage, renewal_date: NaiveDate, today: NaiveDate) {
        self.profile.starting_date = renewal_date;
        self.profile.package_label = package.label().to_string();
        self.terms = MembershipTerms::compute(renewal_date, package.label(), today);
    }
}

/// One field that changed during an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl FieldChange {
    /// Turns the change into a change-log entry.
    pub fn into_log(
        self,
        member: &Member,
        edited_by: Option<String>,
        edited_at: NaiveDateTime,
    ) -> MemberChange {
        MemberChange {
            member_id: member.id,
            member_name: member.name().to_string(),
            field_name: self.field_name,
            old_value: self.old_value,
            new_value: self.new_value,
            edited_by,
            edited_at,
        }
    }
}

/// Change-log entry for an edited member field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberChange {
    pub member_id: MemberId,
    pub member_name: String,
    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub edited_by: Option<String>,
    pub edited_at: NaiveDateTime,
}

/// Renewal-log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenewalRecord {
    pub member_id: MemberId,
    pub package: MembershipPackage,
    pub renewal_date: NaiveDate,
    pub fee: Money,
    pub edited_by: Option<String>,
    pub renewed_at: NaiveDateTime,
}

fn age_on(profile: &MemberProfile, today: NaiveDate) -> Result<Option<u32>, MemberError> {
    Ok(profile
        .birthdate
        .map(|birth| compute_age(birth, today))
        .transpose()?)
}

fn diff(current: &Member, updated: &NewMember) -> Vec<FieldChange> {
    let old = &current.profile;
    let new = &updated.profile;
    let mut changes = Vec::new();

    let mut record = |field: &str, before: Option<String>, after: Option<String>| {
        if before != after {
            changes.push(FieldChange {
                field_name: field.to_string(),
                old_value: before,
                new_value: after,
            });
        }
    };

    record("name", Some(old.name.clone()), Some(new.name.clone()));
    record("email", old.email.clone(), new.email.clone());
    record("phone", old.phone.clone(), new.phone.clone());
    record("gender", old.gender.clone(), new.gender.clone());
    record("birthdate", date_str(old.birthdate), date_str(new.birthdate));
    record("age", current.age.map(|a| a.to_string()), updated.age.map(|a| a.to_string()));
    record(
        "actual_starting_date",
        date_str(old.actual_starting_date),
        date_str(new.actual_starting_date),
    );
    record(
        "starting_date",
        date_str(Some(old.starting_date)),
        date_str(Some(new.starting_date)),
    );
    record(
        "package",
        Some(old.package_label.clone()),
        Some(new.package_label.clone()),
    );
    record(
        "end_date",
        date_str(current.terms.end_date),
        date_str(updated.terms.end_date),
    );
    record(
        "fee",
        current.terms.fee.map(|f| f.to_string()),
        updated.terms.fee.map(|f| f.to_string()),
    );
    record(
        "status",
        current.terms.status.map(|s| s.to_string()),
        updated.terms.status.map(|s| s.to_string()),
    );
    record("comment", old.comment.clone(), new.comment.clone());

    changes
}

fn date_str(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}
