//! Member DTOs

use serde::{Deserialize, Serialize};

use core_kernel::MemberId;
use domain_member::{DeleteOutcome, InsertOutcome, Member, MemberPatch, NewMember, UpdateOutcome};

/// Body for `POST /members`
#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<CreateMemberRequest> for NewMember {
    fn from(req: CreateMemberRequest) -> Self {
        NewMember {
            name: req.name,
            email: req.email,
            age: req.age,
        }
    }
}

/// Body for `PUT /member`
///
/// Fields left out keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl From<UpdateMemberRequest> for MemberPatch {
    fn from(req: UpdateMemberRequest) -> Self {
        MemberPatch {
            name: req.name,
            email: req.email,
            age: req.age,
        }
    }
}

/// Query parameters for `GET|PUT|DELETE /member`
#[derive(Debug, Deserialize)]
pub struct MemberIdQuery {
    /// Raw identifier token; decoded by the handler
    pub id: String,
}

/// Query parameters for `GET /members`
///
/// Captured as raw strings: non-numeric values degrade to the pagination
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListMembersQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

/// Wire representation of a member record
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            age: member.age,
        }
    }
}

/// Response body for `POST /members`
#[derive(Debug, Serialize)]
pub struct InsertMemberResponse {
    pub inserted_id: MemberId,
}

impl From<InsertOutcome> for InsertMemberResponse {
    fn from(outcome: InsertOutcome) -> Self {
        Self {
            inserted_id: outcome.inserted_id,
        }
    }
}

/// Response body for `PUT /member`
#[derive(Debug, Serialize)]
pub struct UpdateMemberResponse {
    pub matched_count: u64,
}

impl From<UpdateOutcome> for UpdateMemberResponse {
    fn from(outcome: UpdateOutcome) -> Self {
        Self {
            matched_count: outcome.matched,
        }
    }
}

/// Response body for `DELETE /member`
#[derive(Debug, Serialize)]
pub struct DeleteMemberResponse {
    pub deleted_count: u64,
}

impl From<DeleteOutcome> for DeleteMemberResponse {
    fn from(outcome: DeleteOutcome) -> Self {
        Self {
            deleted_count: outcome.deleted,
        }
    }
}
