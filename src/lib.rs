//! Base58 codec, Bitcoin alphabet.
//!
//! Bytes are converted with a base-256 to base-58 radix conversion; each leading
//! zero byte becomes one leading `'1'` and back. Every operation comes in two
//! flavors: one that allocates its result and one that writes into a buffer
//! supplied by the caller.
//!
//! ```
//! let text = btc58::encode(b"hello");
//! assert_eq!(text, "Cn8eVZg");
//! assert_eq!(btc58::decode(&text).unwrap(), b"hello");
//! ```

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

mod alphabet;
mod decode;
mod encode;
mod error;

pub use decode::{decode, decode_into, max_decoded_len};
pub use encode::{encode, encode_into, encoded_len_bound, max_encoded_len};
pub use error::{Error, Result};
