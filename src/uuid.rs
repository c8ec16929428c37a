//! Stock 128-bit member address.

use std::fmt;

use bytes::{Buf, BufMut};

use crate::{address::MemberAddress, error::DecodeError};

/// Encoded size of a [`UuidAddress`]: two big-endian 64-bit halves.
pub const UUID_WIRE_LEN: usize = 16;

/// A 128-bit member address with UUID semantics.
///
/// Group members are typically addressed by a UUID minted when the member
/// joins. Ordering compares the most-significant half first, so the derived
/// order matches the byte-wise order of the wire encoding.
///
/// # Examples
///
/// ```
/// use anycast_wire::UuidAddress;
///
/// let addr = UuidAddress::new(0x0011_2233_4455_6677, 0x8899_aabb_ccdd_eeff);
/// assert_eq!(addr.to_string(), "00112233-4455-6677-8899-aabbccddeeff");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UuidAddress {
    most_sig: u64,
    least_sig: u64,
}

impl UuidAddress {
    /// Create an address from its two 64-bit halves.
    #[must_use]
    pub const fn new(most_sig: u64, least_sig: u64) -> Self {
        Self {
            most_sig,
            least_sig,
        }
    }

    /// Create an address from its 16-byte big-endian wire form.
    #[must_use]
    #[expect(clippy::cast_lossless, reason = "`u64::from` is not usable in const fn.")]
    pub const fn from_bytes(bytes: [u8; UUID_WIRE_LEN]) -> Self {
        let (mut most_sig, mut least_sig) = (0u64, 0u64);
        let mut i = 0;
        while i < 8 {
            most_sig = (most_sig << 8) | bytes[i] as u64;
            least_sig = (least_sig << 8) | bytes[i + 8] as u64;
            i += 1;
        }
        Self {
            most_sig,
            least_sig,
        }
    }

    /// Return the 16-byte big-endian wire form.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; UUID_WIRE_LEN] {
        let mut bytes = [0u8; UUID_WIRE_LEN];
        bytes[..8].copy_from_slice(&self.most_sig.to_be_bytes());
        bytes[8..].copy_from_slice(&self.least_sig.to_be_bytes());
        bytes
    }

    /// Most-significant 64 bits.
    #[must_use]
    pub const fn most_sig(&self) -> u64 { self.most_sig }

    /// Least-significant 64 bits.
    #[must_use]
    pub const fn least_sig(&self) -> u64 { self.least_sig }
}

impl MemberAddress for UuidAddress {
    fn encoded_len(&self) -> usize { UUID_WIRE_LEN }

    fn put<B: BufMut>(&self, buf: &mut B) {
        buf.put_u64(self.most_sig);
        buf.put_u64(self.least_sig);
    }

    fn get<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        if buf.remaining() < UUID_WIRE_LEN {
            return Err(DecodeError::Truncated {
                have: buf.remaining(),
                need: UUID_WIRE_LEN,
            });
        }
        let most_sig = buf.get_u64();
        let least_sig = buf.get_u64();
        Ok(Self {
            most_sig,
            least_sig,
        })
    }
}

impl fmt::Display for UuidAddress {
    /// Canonical lowercase `8-4-4-4-12` hex rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            self.most_sig >> 32,
            (self.most_sig >> 16) & 0xffff,
            self.most_sig & 0xffff,
            self.least_sig >> 48,
            self.least_sig & 0xffff_ffff_ffff
        )
    }
}
