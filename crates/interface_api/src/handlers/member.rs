//! Member handlers
//!
//! Each handler walks the same path: decode, validate, call the port,
//! encode. Failures terminate here as status codes; a malformed identifier
//! never reaches the port.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;

use core_kernel::{MemberId, PageRequest};
use domain_member::MemberQuery;

use crate::dto::member::{
    CreateMemberRequest, DeleteMemberResponse, InsertMemberResponse, ListMembersQuery,
    MemberIdQuery, MemberResponse, UpdateMemberRequest, UpdateMemberResponse,
};
use crate::error::ApiError;
use crate::AppState;

/// `POST /members` - creates a new member
pub async fn create_member(
    State(state): State<AppState>,
    body: Result<Json<CreateMemberRequest>, JsonRejection>,
) -> Result<Json<InsertMemberResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let outcome = state.members.insert(request.into()).await?;
    Ok(Json(outcome.into()))
}

/// `GET /member?id=` - fetches a member by id
pub async fn get_member(
    State(state): State<AppState>,
    Query(query): Query<MemberIdQuery>,
) -> Result<Json<MemberResponse>, ApiError> {
    let id = decode_id(&query.id)?;
    let member = state.members.find(id).await?;
    Ok(Json(member.into()))
}

/// `PUT /member?id=` - updates a member by id
///
/// Responds 200 with the update outcome regardless of the match count.
pub async fn update_member(
    State(state): State<AppState>,
    Query(query): Query<MemberIdQuery>,
    body: Result<Json<UpdateMemberRequest>, JsonRejection>,
) -> Result<Json<UpdateMemberResponse>, ApiError> {
    let id = decode_id(&query.id)?;
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let outcome = state.members.update(id, request.into()).await?;
    Ok(Json(outcome.into()))
}

/// `DELETE /member?id=` - deletes a member by id
///
/// Idempotent: deleting a missing id responds 200 with a zero count.
pub async fn delete_member(
    State(state): State<AppState>,
    Query(query): Query<MemberIdQuery>,
) -> Result<Json<DeleteMemberResponse>, ApiError> {
    let id = decode_id(&query.id)?;
    let outcome = state.members.delete(id).await?;
    Ok(Json(outcome.into()))
}

/// `GET /members?page=&size=` - lists members with pagination
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<ListMembersQuery>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let page = PageRequest::resolve(query.page.as_deref(), query.size.as_deref());
    let members = state.members.list(MemberQuery::from(page)).await?;
    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

/// Decodes the external identifier token.
fn decode_id(raw: &str) -> Result<MemberId, ApiError> {
    raw.parse::<MemberId>().map_err(|_| ApiError::invalid_id())
}
