//! PostgreSQL member adapter
//!
//! The internal (database) implementation of [`MemberPort`], bridging the
//! domain port to the repository layer:
//!
//! - Translates port operations into repository calls
//! - Converts database rows back into domain models
//! - Translates `DatabaseError` into `PortError`

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, MemberId, PortError};
use domain_member::{
    DeleteOutcome, InsertOutcome, Member, MemberPatch, MemberPort, MemberQuery, NewMember,
    UpdateOutcome,
};

use crate::error::DatabaseError;
use crate::repositories::member::MemberRepository;

/// PostgreSQL-backed implementation of the [`MemberPort`] trait
#[derive(Debug, Clone)]
pub struct PostgresMemberAdapter {
    repository: MemberRepository,
}

impl PostgresMemberAdapter {
    /// Creates a new adapter over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MemberRepository::new(pool),
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &MemberRepository {
        &self.repository
    }
}

impl DomainPort for PostgresMemberAdapter {}

#[async_trait]
impl MemberPort for PostgresMemberAdapter {
    #[instrument(skip(self, member))]
    async fn insert(&self, member: NewMember) -> Result<InsertOutcome, PortError> {
        debug!("Inserting member");

        let inserted_id = self
            .repository
            .insert(member)
            .await
            .map_err(db_to_port_error)?;
        Ok(InsertOutcome { inserted_id })
    }

    #[instrument(skip(self), fields(member_id = %id))]
    async fn find(&self, id: MemberId) -> Result<Member, PortError> {
        debug!("Fetching member by ID");

        self.repository.get_by_id(id).await.map_err(|e| {
            if e.is_not_found() {
                PortError::not_found("Member", id)
            } else {
                db_to_port_error(e)
            }
        })
    }

    #[instrument(skip(self, patch), fields(member_id = %id))]
    async fn update(&self, id: MemberId, patch: MemberPatch) -> Result<UpdateOutcome, PortError> {
        debug!("Updating member");

        let matched = self
            .repository
            .update_by_id(id, patch)
            .await
            .map_err(db_to_port_error)?;
        Ok(UpdateOutcome { matched })
    }

    #[instrument(skip(self), fields(member_id = %id))]
    async fn delete(&self, id: MemberId) -> Result<DeleteOutcome, PortError> {
        debug!("Deleting member");

        let deleted = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(db_to_port_error)?;
        Ok(DeleteOutcome { deleted })
    }

    #[instrument(skip(self))]
    async fn list(&self, query: MemberQuery) -> Result<Vec<Member>, PortError> {
        debug!("Listing members");

        self.repository
            .list_page(query)
            .await
            .map_err(db_to_port_error)
    }
}

/// Translates database errors into port errors.
fn db_to_port_error(err: DatabaseError) -> PortError {
    let message = err.to_string();
    if err.is_connection_error() {
        PortError::Connection {
            message,
            source: Some(Box::new(err)),
        }
    } else {
        PortError::Internal {
            message,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_errors_translate_to_connection() {
        let translated = db_to_port_error(DatabaseError::PoolExhausted);
        assert!(matches!(translated, PortError::Connection { .. }));
    }

    #[test]
    fn test_other_errors_translate_to_internal() {
        let translated = db_to_port_error(DatabaseError::QueryFailed("bad syntax".into()));
        assert!(matches!(translated, PortError::Internal { .. }));
    }
}
