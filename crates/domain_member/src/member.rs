//! Member entity
//!
//! A member is a flat, self-contained record: nothing cascades from it, and
//! its identifier never changes once assigned.

use serde::{Deserialize, Serialize};

use core_kernel::MemberId;

/// A persisted member record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// A member record awaiting its identifier
///
/// The repository assigns the id on insert; callers never choose one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl NewMember {
    /// Attaches an identifier, producing the persisted form.
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// A partial update to a member record
///
/// Fields left as `None` keep their stored value, so the same type covers
/// both partial and full updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl MemberPatch {
    /// Applies the patch to an existing record in place.
    pub fn apply(&self, member: &mut Member) {
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(email) = &self.email {
            member.email = email.clone();
        }
        if let Some(age) = self.age {
            member.age = age;
        }
    }

    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}
