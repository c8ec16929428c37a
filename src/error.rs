//! Error types for identifier encoding and decoding.
//!
//! Both enums surface precise, structured diagnostics and perform no local
//! recovery: every failure is propagated to the caller, which owns the
//! policy for a malformed peer or an undersized buffer.

use thiserror::Error;

/// Errors raised while writing an identifier to an output buffer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The destination buffer cannot hold the encoded identifier.
    #[error("insufficient buffer capacity: required {required}, remaining {remaining}")]
    InsufficientCapacity {
        /// Exact number of bytes the encoding needs.
        required: usize,
        /// Writable bytes left in the destination buffer.
        remaining: usize,
    },
}

/// Errors raised while reading an identifier from an input buffer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended before the field was complete.
    #[error("truncated input: have {have}, need {need}")]
    Truncated {
        /// Bytes currently available.
        have: usize,
        /// Bytes required to finish the current field.
        need: usize,
    },

    /// A compact-integer length byte exceeded the 8-byte maximum.
    #[error("invalid compact integer length byte: {len}")]
    InvalidIntLength {
        /// The offending length byte.
        len: u8,
    },

    /// The address marker byte was neither the absent nor the present marker.
    #[error("unknown address marker byte: {marker:#04x}")]
    InvalidAddressMarker {
        /// The offending marker byte.
        marker: u8,
    },
}
