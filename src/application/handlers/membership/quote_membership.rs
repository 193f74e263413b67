//! QuoteMembershipHandler - Query handler that prices a membership before registration.

use std::sync::Arc;

use crate::domain::membership::{parse_date, MembershipError, MembershipQuote};
use crate::ports::Clock;

/// Query with the raw form values.
#[derive(Debug, Clone)]
pub struct QuoteMembershipQuery {
    pub starting_date: String,
    pub package: String,
    pub birthdate: Option<String>,
}

pub type QuoteMembershipResult = MembershipQuote;

/// Computes end date, fee, status and age without storing anything.
pub struct QuoteMembershipHandler {
    clock: Arc<dyn Clock>,
}

impl QuoteMembershipHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn handle(
        &self,
        query: QuoteMembershipQuery,
    ) -> Result<QuoteMembershipResult, MembershipError> {
        let starting_date = parse_date("starting_date", &query.starting_date)?;
        let birthdate = match query.birthdate.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_date("birthdate", raw)?),
            _ => None,
        };

        MembershipQuote::compute(starting_date, &query.package, birthdate, self.clock.today())
    }
}
