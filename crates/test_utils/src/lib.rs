//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the member directory test suite.
//!
//! # Modules
//!
//! - `memory`: in-memory `MemberPort` adapter for tests without a database
//! - `builders`: builder patterns for member test data
//! - `fixtures`: pre-built records for common scenarios

pub mod builders;
pub mod fixtures;
pub mod memory;

pub use builders::MemberBuilder;
pub use fixtures::MemberFixtures;
pub use memory::InMemoryMemberAdapter;
