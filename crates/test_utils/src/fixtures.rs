//! Pre-built Test Fixtures
//!
//! Ready-to-use member records for common test scenarios.

use domain_member::{Member, NewMember};

use crate::builders::MemberBuilder;

/// Fixtures for member records
pub struct MemberFixtures;

impl MemberFixtures {
    /// The well-known member used across scenario tests
    pub fn ann() -> NewMember {
        NewMember {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            age: 30,
        }
    }

    /// A generated member record
    pub fn random() -> Member {
        MemberBuilder::new().build()
    }

    /// A batch of generated member records
    pub fn batch(count: usize) -> Vec<Member> {
        (0..count).map(|_| Self::random()).collect()
    }
}
