//! Core Kernel - foundational types for the member directory
//!
//! This crate provides the building blocks used across the service:
//! - Strongly-typed member identifiers
//! - Pagination value objects
//! - Port abstractions shared by all adapters

pub mod identifiers;
pub mod pagination;
pub mod ports;

pub use identifiers::MemberId;
pub use pagination::{PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use ports::{DomainPort, PortError};
