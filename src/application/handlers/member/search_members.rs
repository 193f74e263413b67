//! SearchMembersHandler - Query handler for the member list.

use std::sync::Arc;

use crate::domain::member::{Member, MemberError};
use crate::ports::{Clock, MemberFilter, MemberRepository};

/// Query with optional name, phone and email filters.
#[derive(Debug, Clone, Default)]
pub struct SearchMembersQuery {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl SearchMembersQuery {
    /// Filters with blank values dropped.
    fn filter(self) -> MemberFilter {
        fn present(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        MemberFilter {
            name: present(self.name),
            phone: present(self.phone),
            email: present(self.email),
        }
    }
}

pub type SearchMembersResult = Vec<Member>;

/// Handler for searching members, newest first.
pub struct SearchMembersHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl SearchMembersHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        query: SearchMembersQuery,
    ) -> Result<SearchMembersResult, MemberError> {
        let filter = query.filter();
        let today = self.clock.today();

        let mut members = self.repository.search(&filter).await?;
        for member in &mut members {
            member.refresh_status(today);
        }

        tracing::debug!(?filter, count = members.len(), "member search");
        Ok(members)
    }
}
