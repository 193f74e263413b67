//! Request and response DTOs for member endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adapters::http::membership::dto::MoneyResponse;
use crate::domain::member::{Member, MemberChange, MemberInput, RenewalRecord};
use crate::domain::membership::MembershipStatus;

/// Request body for PUT /api/members/:id
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMemberRequest {
    #[serde(flatten)]
    pub member: MemberInput,
    #[serde(default)]
    pub edited_by: Option<String>,
}

/// Request body for POST /api/members/:id/renew
#[derive(Debug, Clone, Deserialize)]
pub struct RenewMembershipRequest {
    pub package: String,
    #[serde(default)]
    pub renewal_date: Option<String>,
    #[serde(default)]
    pub edited_by: Option<String>,
}

/// Query string for GET /api/members
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMembersParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A member as shown on the member card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub age: Option<u32>,
    pub actual_starting_date: Option<NaiveDate>,
    pub starting_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub package: String,
    pub duration_months: Option<u32>,
    pub fee: Option<MoneyResponse>,
    pub status: Option<MembershipStatus>,
    pub invitations: i32,
    pub comment: Option<String>,
    pub freeze_used: bool,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        let profile = member.profile;
        Self {
            id: member.id.as_i32(),
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            gender: profile.gender,
            birthdate: profile.birthdate,
            age: member.age,
            actual_starting_date: profile.actual_starting_date,
            starting_date: profile.starting_date,
            end_date: member.terms.end_date,
            package: profile.package_label,
            duration_months: member.terms.duration_months,
            fee: member.terms.fee.map(MoneyResponse::from),
            status: member.terms.status,
            invitations: member.invitations,
            comment: profile.comment,
            freeze_used: member.freeze_used,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
    pub count: usize,
}

impl From<Vec<Member>> for MemberListResponse {
    fn from(members: Vec<Member>) -> Self {
        let members: Vec<MemberResponse> = members.into_iter().map(MemberResponse::from).collect();
        Self {
            count: members.len(),
            members,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMemberResponse {
    pub member: MemberResponse,
    pub changes: Vec<MemberChange>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenewalResponse {
    pub package: String,
    pub renewal_date: NaiveDate,
    pub fee: MoneyResponse,
    pub edited_by: Option<String>,
}

impl From<RenewalRecord> for RenewalResponse {
    fn from(renewal: RenewalRecord) -> Self {
        Self {
            package: renewal.package.label().to_string(),
            renewal_date: renewal.renewal_date,
            fee: renewal.fee.into(),
            edited_by: renewal.edited_by,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenewMembershipResponse {
    pub member: MemberResponse,
    pub renewal: RenewalResponse,
}
