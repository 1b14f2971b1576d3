//! Codec filter streams for `streamrs`.
//!
//! Every codec is a decorator over a core stream and overrides only the
//! primitive `input`/`output` hook:
//!
//! - **`HexDecodeInputStream`**: ASCII hexadecimal to binary, whitespace tolerant
//! - **`HexEncodeOutputStream`**: binary to uppercase ASCII hexadecimal
//! - **`WashInputStream`** / **`WashOutputStream`**: strip a set of bytes in transit
//! - **`HexDecodeFactory`**: recognizes hexadecimal input for a `FilterResolver`
//!
//! # Quick Start
//!
//! ```
//! use streamrs::{InputStream, MemoryInputStream};
//! use streamrs_codecs::HexDecodeInputStream;
//!
//! let source = MemoryInputStream::new(b"68 65 6C 6C 6F\n".to_vec());
//! let mut input = HexDecodeInputStream::new(source);
//!
//! let mut bytes = Vec::new();
//! input.read(&mut bytes, 16).unwrap();
//! assert_eq!(bytes, b"hello");
//! ```
//!
//! # Features
//!
//! - `log`: Enable logging through the `log` facade

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod hex;
pub mod wash;

pub use hex::{
    HexDecodeFactory, HexDecodeInputStream, HexEncodeOutputStream, has_non_hexadecimal_character,
    is_space,
};
pub use wash::{WashInputStream, WashOutputStream, WashRule};
