//! Wire-level identifier types for total-order anycast group messaging.
//!
//! A total-order anycast protocol lets many concurrent senders issue
//! messages while every group member delivers them in one globally agreed
//! order. The ordering decision hinges on a compact token attached to each
//! message: the [`MessageId`], a pair of originating member address and
//! per-sender sequence counter. This crate provides that token — its total
//! order, its equality and hash contract, and its exact binary wire
//! encoding — together with the [`MemberAddress`] contract the surrounding
//! protocol's address types must satisfy.
//!
//! Counter generation, membership views, and delivery logic live in the
//! surrounding protocol; this crate is a pure value and codec layer.

pub mod address;
pub mod compact;
pub mod error;
pub mod id;
pub mod uuid;

pub use address::MemberAddress;
pub use error::{DecodeError, EncodeError};
pub use id::MessageId;
pub use uuid::UuidAddress;
