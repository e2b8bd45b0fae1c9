//! Core domain models shared by events and agent code.
//!
//! This module contains the closed enumerations attached to every event:
//! - EventType: Why the event was produced (new block, reorg)
//! - Network: Which chain the event came from
//! - EnumMember: Membership check over untyped input

mod event_type;
mod member;
mod network;

pub use event_type::EventType;
pub use member::EnumMember;
pub use network::Network;
