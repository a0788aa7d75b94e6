//! Repository implementations
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! domain types, hiding the database details from the layers above.

pub mod member;

pub use member::MemberRepository;
