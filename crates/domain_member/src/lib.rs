//! Member Domain
//!
//! Defines the Member aggregate and the port through which the rest of the
//! system reads and writes member records.

pub mod member;
pub mod ports;

pub use member::{Member, MemberPatch, NewMember};
pub use ports::{DeleteOutcome, InsertOutcome, MemberPort, MemberQuery, UpdateOutcome};
