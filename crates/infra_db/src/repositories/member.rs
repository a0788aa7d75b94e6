//! Member repository
//!
//! All SQL touching the `members` table lives here. Rows are ordered by the
//! internal `seq` column, which records insertion order and is never
//! exposed.
//!
//! Queries are bound at runtime rather than through the compile-time
//! checked macros so the crate builds without a live `DATABASE_URL`.

use sqlx::{FromRow, PgPool};
use tracing::warn;
use uuid::Uuid;

use core_kernel::MemberId;
use domain_member::{Member, MemberPatch, MemberQuery, NewMember};

use crate::error::DatabaseError;

/// Database row for a member record
#[derive(Debug, Clone, FromRow)]
pub struct MemberRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member {
            id: MemberId::from_uuid(row.id),
            name: row.name,
            email: row.email,
            age: row.age,
        }
    }
}

/// Repository for the `members` table
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Creates a new repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new member, assigning a fresh identifier.
    pub async fn insert(&self, member: NewMember) -> Result<MemberId, DatabaseError> {
        let id = MemberId::new_v7();
        sqlx::query("INSERT INTO members (id, name, email, age) VALUES ($1, $2, $3, $4)")
            .bind(Uuid::from(id))
            .bind(&member.name)
            .bind(&member.email)
            .bind(member.age)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;
        Ok(id)
    }

    /// Fetches a member by id.
    pub async fn get_by_id(&self, id: MemberId) -> Result<Member, DatabaseError> {
        let row =
            sqlx::query_as::<_, MemberRow>("SELECT id, name, email, age FROM members WHERE id = $1")
                .bind(Uuid::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DatabaseError::from(&e))?;

        row.map(Member::from)
            .ok_or_else(|| DatabaseError::not_found("Member", id))
    }

    /// Applies a patch to the member with the given id.
    ///
    /// Returns the number of rows whose id matched; zero is not an error.
    pub async fn update_by_id(
        &self,
        id: MemberId,
        patch: MemberPatch,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE members \
             SET name = COALESCE($2, name), \
                 email = COALESCE($3, email), \
                 age = COALESCE($4, age) \
             WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.age)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(result.rows_affected())
    }

    /// Deletes the member with the given id.
    ///
    /// Returns how many rows were removed; deleting a missing id reports
    /// zero rather than failing.
    pub async fn delete_by_id(&self, id: MemberId) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        Ok(result.rows_affected())
    }

    /// Lists members in insertion order within the given window.
    ///
    /// Rows that fail to decode are logged and skipped rather than failing
    /// the whole page.
    pub async fn list_page(&self, query: MemberQuery) -> Result<Vec<Member>, DatabaseError> {
        let rows =
            sqlx::query("SELECT id, name, email, age FROM members ORDER BY seq OFFSET $1 LIMIT $2")
                .bind(query.skip)
                .bind(query.limit)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DatabaseError::from(&e))?;

        let mut members = Vec::with_capacity(rows.len());
        for row in &rows {
            match MemberRow::from_row(row) {
                Ok(row) => members.push(Member::from(row)),
                Err(e) => warn!(error = %e, "skipping member row that failed to decode"),
            }
        }
        Ok(members)
    }
}
