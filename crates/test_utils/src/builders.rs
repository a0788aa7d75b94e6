//! Test Data Builders
//!
//! Builder patterns for constructing member test data with generated
//! defaults, so tests specify only the fields they care about.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

use core_kernel::MemberId;
use domain_member::{Member, NewMember};

/// Builder for member test data
pub struct MemberBuilder {
    id: MemberId,
    name: String,
    email: String,
    age: i32,
}

impl Default for MemberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberBuilder {
    /// Creates a new builder with generated defaults
    pub fn new() -> Self {
        Self {
            id: MemberId::new_v7(),
            name: Name().fake(),
            email: SafeEmail().fake(),
            age: (18..90).fake(),
        }
    }

    /// Sets the member id
    pub fn with_id(mut self, id: MemberId) -> Self {
        self.id = id;
        self
    }

    /// Sets the member name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the member email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the member age
    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Builds a persisted member record
    pub fn build(self) -> Member {
        Member {
            id: self.id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }

    /// Builds the unpersisted form, dropping the id
    pub fn build_new(self) -> NewMember {
        NewMember {
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let member = MemberBuilder::new()
            .with_name("Ann")
            .with_email("a@x.com")
            .with_age(30)
            .build();

        assert_eq!(member.name, "Ann");
        assert_eq!(member.email, "a@x.com");
        assert_eq!(member.age, 30);
    }
}
