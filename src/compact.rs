//! Compact signed 64-bit integer codec.
//!
//! Sequence counters are written as one length byte followed by the minimal
//! number of little-endian payload bytes. Zero collapses to the single byte
//! `0x00`; a negative value keeps its sign bits under arithmetic shifting
//! and therefore always needs the full 8 payload bytes. The encoded size is
//! exactly computable up front via [`len_i64`], so envelope code can size
//! buffers without performing the write.

use bytes::{Buf, BufMut};

use crate::error::DecodeError;

/// Largest number of bytes a compact `i64` can occupy on the wire.
pub const MAX_LEN_I64: usize = 9;

/// Number of payload bytes required for a non-zero value.
///
/// Uses arithmetic shift, so any negative value reports 8.
fn payload_len(value: i64) -> usize {
    let mut len = 8;
    while len > 1 && value >> ((len - 1) * 8) == 0 {
        len -= 1;
    }
    len
}

/// Exact number of bytes [`put_i64`] will write for `value`.
///
/// # Examples
///
/// ```
/// use anycast_wire::compact::len_i64;
///
/// assert_eq!(len_i64(0), 1);
/// assert_eq!(len_i64(0x1234), 3);
/// assert_eq!(len_i64(-1), 9);
/// ```
#[must_use]
pub fn len_i64(value: i64) -> usize {
    if value == 0 { 1 } else { 1 + payload_len(value) }
}

/// Append `value` to `buf` in compact form.
///
/// The caller must ensure `buf` has at least [`len_i64`]`(value)` writable
/// bytes; growable buffers such as `Vec<u8>` always do.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The length fits in 1..=8 and each byte cast keeps exactly the low 8 bits."
)]
pub fn put_i64<B: BufMut>(value: i64, buf: &mut B) {
    if value == 0 {
        buf.put_u8(0);
        return;
    }
    let len = payload_len(value);
    buf.put_u8(len as u8);
    for i in 0..len {
        buf.put_u8((value >> (i * 8)) as u8);
    }
}

/// Read a compact `i64` from `buf`.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] if the buffer ends mid-field and
/// [`DecodeError::InvalidIntLength`] if the length byte exceeds 8.
pub fn get_i64<B: Buf>(buf: &mut B) -> Result<i64, DecodeError> {
    if !buf.has_remaining() {
        return Err(DecodeError::Truncated { have: 0, need: 1 });
    }
    let len_byte = buf.get_u8();
    if len_byte == 0 {
        return Ok(0);
    }
    if len_byte > 8 {
        return Err(DecodeError::InvalidIntLength { len: len_byte });
    }
    let len = usize::from(len_byte);
    if buf.remaining() < len {
        return Err(DecodeError::Truncated {
            have: buf.remaining(),
            need: len,
        });
    }
    let mut value = 0i64;
    for i in 0..len {
        value |= i64::from(buf.get_u8()) << (i * 8);
    }
    Ok(value)
}
