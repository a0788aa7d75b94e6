//! Member domain port
//!
//! [`MemberPort`] describes every operation the service needs from its
//! member store. Two implementations exist: the PostgreSQL adapter in
//! `infra_db` and an in-memory adapter in `test_utils` for testing without
//! external dependencies.

use async_trait::async_trait;

use core_kernel::{DomainPort, MemberId, PageRequest, PortError};

use crate::member::{Member, MemberPatch, NewMember};

/// Typed query parameters for listing members
///
/// Every filter the port can express is a typed field here or a typed
/// argument on the port itself, keeping the adapter contract statically
/// checkable instead of passing ad-hoc filter maps to the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberQuery {
    /// Number of records to skip
    pub skip: i64,
    /// Maximum number of records to return
    pub limit: i64,
}

impl MemberQuery {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }
}

impl Default for MemberQuery {
    fn default() -> Self {
        PageRequest::default().into()
    }
}

impl From<PageRequest> for MemberQuery {
    fn from(page: PageRequest) -> Self {
        Self {
            skip: page.skip,
            limit: page.limit,
        }
    }
}

/// Confirmation returned by a successful insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Identifier assigned to the new record
    pub inserted_id: MemberId,
}

/// Result of an update operation
///
/// A zero match count is not an error; it is reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Number of records whose id matched
    pub matched: u64,
}

/// Result of a delete operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Number of records removed
    pub deleted: u64,
}

/// Port over the member collection
#[async_trait]
pub trait MemberPort: DomainPort {
    /// Persists a new member, assigning its identifier.
    async fn insert(&self, member: NewMember) -> Result<InsertOutcome, PortError>;

    /// Fetches the member with the given id.
    async fn find(&self, id: MemberId) -> Result<Member, PortError>;

    /// Applies a patch to the member with the given id.
    ///
    /// Matching zero records is not a failure; the outcome reports the
    /// match count.
    async fn update(&self, id: MemberId, patch: MemberPatch) -> Result<UpdateOutcome, PortError>;

    /// Removes the member with the given id. Idempotent.
    async fn delete(&self, id: MemberId) -> Result<DeleteOutcome, PortError>;

    /// Lists members in insertion order within the query's window.
    async fn list(&self, query: MemberQuery) -> Result<Vec<Member>, PortError>;
}
