//! In-memory member adapter
//!
//! Implements [`MemberPort`] over a plain vector, preserving insertion
//! order. Handler and domain tests run against this adapter instead of
//! PostgreSQL.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use core_kernel::{DomainPort, MemberId, PortError};
use domain_member::{
    DeleteOutcome, InsertOutcome, Member, MemberPatch, MemberPort, MemberQuery, NewMember,
    UpdateOutcome,
};

/// Vector-backed implementation of the [`MemberPort`] trait
#[derive(Debug, Default)]
pub struct InMemoryMemberAdapter {
    records: Mutex<Vec<Member>>,
}

impl InMemoryMemberAdapter {
    /// Creates an empty adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter seeded with existing records.
    pub fn with_members(members: Vec<Member>) -> Self {
        Self {
            records: Mutex::new(members),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Member>>, PortError> {
        self.records
            .lock()
            .map_err(|_| PortError::internal("member store lock poisoned"))
    }
}

impl DomainPort for InMemoryMemberAdapter {}

#[async_trait]
impl MemberPort for InMemoryMemberAdapter {
    async fn insert(&self, member: NewMember) -> Result<InsertOutcome, PortError> {
        let mut records = self.lock()?;
        let inserted_id = MemberId::new_v7();
        records.push(member.into_member(inserted_id));
        Ok(InsertOutcome { inserted_id })
    }

    async fn find(&self, id: MemberId) -> Result<Member, PortError> {
        let records = self.lock()?;
        records
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Member", id))
    }

    async fn update(&self, id: MemberId, patch: MemberPatch) -> Result<UpdateOutcome, PortError> {
        let mut records = self.lock()?;
        let mut matched = 0;
        if let Some(member) = records.iter_mut().find(|m| m.id == id) {
            patch.apply(member);
            matched = 1;
        }
        Ok(UpdateOutcome { matched })
    }

    async fn delete(&self, id: MemberId) -> Result<DeleteOutcome, PortError> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|m| m.id != id);
        Ok(DeleteOutcome {
            deleted: (before - records.len()) as u64,
        })
    }

    async fn list(&self, query: MemberQuery) -> Result<Vec<Member>, PortError> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .skip(query.skip.max(0) as usize)
            .take(query.limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::MemberBuilder;
    use crate::fixtures::MemberFixtures;

    fn new_member(name: &str) -> NewMember {
        MemberBuilder::new().with_name(name).build_new()
    }

    #[tokio::test]
    async fn test_insert_then_find_round_trips() {
        let adapter = InMemoryMemberAdapter::new();

        let outcome = adapter.insert(MemberFixtures::ann()).await.unwrap();
        let found = adapter.find(outcome.inserted_id).await.unwrap();

        assert_eq!(found.id, outcome.inserted_id);
        assert_eq!(found.name, "Ann");
        assert_eq!(found.email, "a@x.com");
        assert_eq!(found.age, 30);
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let adapter = InMemoryMemberAdapter::new();
        let err = adapter.find(MemberId::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let adapter = InMemoryMemberAdapter::new();
        for name in ["first", "second", "third"] {
            adapter.insert(new_member(name)).await.unwrap();
        }

        let page = adapter.list(MemberQuery::new(1, 1)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "second");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let adapter = InMemoryMemberAdapter::new();
        let outcome = adapter.insert(new_member("Ann")).await.unwrap();

        let first = adapter.delete(outcome.inserted_id).await.unwrap();
        assert_eq!(first.deleted, 1);

        let second = adapter.delete(outcome.inserted_id).await.unwrap();
        assert_eq!(second.deleted, 0);
    }

    #[tokio::test]
    async fn test_update_missing_reports_zero_matches() {
        let adapter = InMemoryMemberAdapter::new();
        let outcome = adapter
            .update(MemberId::new(), MemberPatch::default())
            .await
            .unwrap();
        assert_eq!(outcome.matched, 0);
    }

    #[tokio::test]
    async fn test_update_patches_in_place() {
        let adapter = InMemoryMemberAdapter::new();
        let inserted = adapter.insert(new_member("Ann")).await.unwrap();

        let patch = MemberPatch {
            age: Some(31),
            ..Default::default()
        };
        let outcome = adapter.update(inserted.inserted_id, patch).await.unwrap();
        assert_eq!(outcome.matched, 1);

        let found = adapter.find(inserted.inserted_id).await.unwrap();
        assert_eq!(found.age, 31);
        assert_eq!(found.name, "Ann");
    }
}
