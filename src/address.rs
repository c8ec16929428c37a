//! The member-address contract and the shared optional-address codec.
//!
//! The identifier treats the originating member's address as an opaque
//! value: it must compare, hash, and carry its own wire encoding, but its
//! internals never matter here. [`MemberAddress`] captures that contract so
//! the surrounding protocol can plug in whichever address representation
//! its transport uses; [`UuidAddress`](crate::UuidAddress) is the stock
//! implementation.
//!
//! On the wire an address slot may be empty, so every address is prefixed
//! by a one-byte marker: [`ABSENT_MARKER`] for no address, or
//! [`PRESENT_MARKER`] followed by the address's own encoding. The free
//! functions below implement that shared format for any envelope field that
//! carries a possibly-absent address.

use std::{fmt, hash::Hash};

use bytes::{Buf, BufMut};

use crate::error::DecodeError;

/// Marker byte for an empty address slot.
pub const ABSENT_MARKER: u8 = 0x00;

/// Marker byte announcing that an encoded address follows.
pub const PRESENT_MARKER: u8 = 0x01;

/// An opaque, comparable, wire-serializable group-member address.
///
/// The total order is whatever the implementation chooses; it only has to
/// be consistent across all members so that identifier tie-breaks agree
/// everywhere. `encoded_len` must report exactly the number of bytes `put`
/// appends, and `get` must consume exactly that many.
pub trait MemberAddress: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {
    /// Exact number of bytes [`MemberAddress::put`] writes for this value.
    fn encoded_len(&self) -> usize;

    /// Append this address's wire encoding to `buf`.
    ///
    /// The caller guarantees at least [`MemberAddress::encoded_len`]
    /// writable bytes.
    fn put<B: BufMut>(&self, buf: &mut B);

    /// Read an address of this type from `buf`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] on truncated or malformed input.
    fn get<B: Buf>(buf: &mut B) -> Result<Self, DecodeError>
    where
        Self: Sized;
}

/// Exact encoded size of a possibly-absent address slot.
#[must_use]
pub fn encoded_len_opt<A: MemberAddress>(address: Option<&A>) -> usize {
    1 + address.map_or(0, MemberAddress::encoded_len)
}

/// Append a possibly-absent address slot to `buf`.
pub fn put_opt<A: MemberAddress, B: BufMut>(address: Option<&A>, buf: &mut B) {
    match address {
        Some(address) => {
            buf.put_u8(PRESENT_MARKER);
            address.put(buf);
        }
        None => buf.put_u8(ABSENT_MARKER),
    }
}

/// Read a possibly-absent address slot from `buf`.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] if the marker byte is missing,
/// [`DecodeError::InvalidAddressMarker`] for an unknown marker, or
/// whatever error the address type raises for its own encoding.
pub fn get_opt<A: MemberAddress, B: Buf>(buf: &mut B) -> Result<Option<A>, DecodeError> {
    if !buf.has_remaining() {
        return Err(DecodeError::Truncated { have: 0, need: 1 });
    }
    match buf.get_u8() {
        ABSENT_MARKER => Ok(None),
        PRESENT_MARKER => Ok(Some(A::get(buf)?)),
        marker => Err(DecodeError::InvalidAddressMarker { marker }),
    }
}
