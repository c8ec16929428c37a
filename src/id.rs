//! The message identifier driving total-order delivery.

use std::{cmp::Ordering, fmt};

use bytes::{Buf, BufMut};

use crate::{
    address::{self, MemberAddress},
    compact,
    error::{DecodeError, EncodeError},
};

/// Globally unique, totally ordered identifier for a group message.
///
/// Pairs the originating member's address with that member's 64-bit
/// sequence counter. Senders assign counters from a local monotonically
/// increasing source, so the pair is unique across the group's lifetime;
/// counter uniqueness and monotonicity are the caller's contract, not
/// checked here.
///
/// The total order is counter-primary: a smaller counter sorts first
/// regardless of address, and equal counters fall back to the address
/// order. Comparison uses signed 64-bit semantics with no wraparound
/// protection. Every member applies the same rule, which is what lets the
/// delivery layer agree on one global order.
///
/// Identifiers are plain immutable values: construct one with
/// [`MessageId::new`] or decode one off the wire with [`MessageId::decode`];
/// nothing mutates it afterwards. The address slot is empty only for
/// identifiers decoded from a frame that carried the absent marker.
///
/// # Examples
///
/// ```
/// use anycast_wire::{MessageId, UuidAddress};
///
/// let addr = UuidAddress::new(1, 2);
/// let first = MessageId::new(addr, 7);
/// let later = MessageId::new(addr, 8);
/// assert!(first < later);
///
/// let mut wire = Vec::with_capacity(first.encoded_len());
/// first.encode(&mut wire).unwrap();
/// assert_eq!(wire.len(), first.encoded_len());
/// assert_eq!(MessageId::decode(&mut wire.as_slice()).unwrap(), first);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId<A> {
    address: Option<A>,
    counter: i64,
}

impl<A: MemberAddress> MessageId<A> {
    /// Create an identifier for a message sent by `address` with the given
    /// sequence counter.
    #[must_use]
    pub const fn new(address: A, counter: i64) -> Self {
        Self {
            address: Some(address),
            counter,
        }
    }

    /// The originating member's address, if the identifier carries one.
    #[must_use]
    pub const fn address(&self) -> Option<&A> { self.address.as_ref() }

    /// The originating member's sequence counter.
    #[must_use]
    pub const fn counter(&self) -> i64 { self.counter }

    /// Exact number of bytes [`MessageId::encode`] writes for this value.
    ///
    /// Callers may preallocate buffers from this; the write never deviates
    /// from it.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        address::encoded_len_opt(self.address.as_ref()) + compact::len_i64(self.counter)
    }

    /// Append the wire encoding — address slot, then compact counter — to
    /// `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InsufficientCapacity`] if `buf` cannot hold
    /// [`MessageId::encoded_len`] more bytes. The check happens before any
    /// byte is written, so a failed encode leaves `buf` untouched.
    pub fn encode<B: BufMut>(&self, buf: &mut B) -> Result<(), EncodeError> {
        let required = self.encoded_len();
        if buf.remaining_mut() < required {
            return Err(EncodeError::InsufficientCapacity {
                required,
                remaining: buf.remaining_mut(),
            });
        }
        address::put_opt(self.address.as_ref(), buf);
        compact::put_i64(self.counter, buf);
        Ok(())
    }

    /// Encode into a freshly sized `Vec<u8>`.
    #[must_use]
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        address::put_opt(self.address.as_ref(), &mut buf);
        compact::put_i64(self.counter, &mut buf);
        buf
    }

    /// Read an identifier from `buf`, consuming exactly its encoded bytes.
    ///
    /// This is the only way to obtain an identifier with an empty address
    /// slot.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] for truncated or malformed input; `buf`
    /// may then be left mid-field and should be discarded.
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        let address = address::get_opt(buf)?;
        let counter = compact::get_i64(buf)?;
        Ok(Self { address, counter })
    }
}

impl<A: MemberAddress> Ord for MessageId<A> {
    /// Counter-primary order; equal counters fall back to the address
    /// order, with an empty address slot sorting before any present
    /// address.
    fn cmp(&self, other: &Self) -> Ordering {
        self.counter
            .cmp(&other.counter)
            .then_with(|| self.address.cmp(&other.address))
    }
}

impl<A: MemberAddress> PartialOrd for MessageId<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl<A: fmt::Display> fmt::Display for MessageId<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MessageId{")?;
        match &self.address {
            Some(address) => write!(f, "{address}")?,
            None => f.write_str("-")?,
        }
        write!(f, ":{}}}", self.counter)
    }
}
