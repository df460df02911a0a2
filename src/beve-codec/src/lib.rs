//! Implements the BEVE (Binary Efficient Versatile Encoding) format.
//!
//! BEVE is a compact, self-describing binary encoding for trees of
//! dynamically typed values. Every value starts with a header byte
//! which describes its type, followed by a type-specific payload.
//! All multi-byte numbers are stored in little-endian byte order.
//!
//! Decoding produces a [`Value`] tree, and encoding writes one back:
//!
//! ```
//! use beve_codec::{Value, codec};
//!
//! let value = Value::from(vec![Value::from(1i32), Value::from("hello")]);
//! let bytes = codec::to_vec(&value).unwrap();
//!
//! assert_eq!(codec::from_slice(&bytes).unwrap(), value);
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;

pub mod value;
pub use value::Value;
