//! Base58 decoding module for btc58.
//! Symbols are folded most-significant first into a big number held as
//! big-endian 32-bit words (`value = value * 58 + digit`), then unpacked to
//! bytes. Leading '1's come back as leading zero bytes, one for one.
//! Perf: one u64 multiply-add per word per symbol; no allocation besides the word array.

use std::ops::Range;

use crate::alphabet::{digit_value, ZERO_SYMBOL};
use crate::{Error, Result};

/// Numerator and denominator of the integer stand-in for `log(58) / log(256)`.
const RATIO_NUM: usize = 406;
const RATIO_DEN: usize = 555;

/// Output buffer size [`decode_into`] requires for a `len`-symbol string.
///
/// `2 * (len * 406 / 555 + 1)`, computed without overflowing for large `len`.
/// The doubling leaves room for the word unpacking, which emits one byte per
/// input symbol before the leading zeros are trimmed.
#[must_use]
pub const fn max_decoded_len(len: usize) -> usize {
    let scaled = len / RATIO_DEN * RATIO_NUM + len % RATIO_DEN * RATIO_NUM / RATIO_DEN;
    2 * (scaled + 1)
}

/// Decodes a Base58 string (Bitcoin alphabet) to bytes.
///
/// # Errors
/// - `EmptyInput`: `input` is empty.
/// - `InvalidDigit`: `input` holds a character outside the alphabet.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    if input.is_empty() {
        log::debug!("base58 decode rejected: empty input");
        return Err(Error::EmptyInput);
    }
    let mut output = vec![0u8; max_decoded_len(input.len())];
    let range = decode_into(input, &mut output)?;
    output.truncate(range.end);
    output.drain(..range.start);
    Ok(output)
}

/// Decodes a Base58 string into `output`, returning where the bytes landed.
///
/// The decoded bytes are `output[range]`. The buffer does not need to be
/// zeroed; bytes outside the range are scratch.
///
/// # Errors
/// - `EmptyInput`: `input` is empty.
/// - `InsufficientBuffer`: `output` is shorter than [`max_decoded_len`] of the
///   input length.
/// - `InvalidDigit`: `input` holds a character outside the alphabet; the first
///   one is reported.
pub fn decode_into(input: &str, output: &mut [u8]) -> Result<Range<usize>> {
    if input.is_empty() {
        log::debug!("base58 decode rejected: empty input");
        return Err(Error::EmptyInput);
    }
    let len = input.len();
    let required = max_decoded_len(len);
    if output.len() < required {
        log::debug!(
            "base58 decode rejected: buffer of {} bytes, {required} required",
            output.len()
        );
        return Err(Error::InsufficientBuffer {
            required,
            actual: output.len(),
        });
    }
    let digits = validate(input)?;
    let zeros = input.bytes().take_while(|&b| b == ZERO_SYMBOL).count();

    let words = accumulate(&digits, len.div_ceil(4));
    let end = unpack(&words, len, output);

    // The value needs fewer bytes than symbols, so at least `zeros` leading
    // bytes of the unpacked span are zero.
    let start = output[zeros..end]
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(0);
    Ok(start..end)
}

/// Maps every symbol to its digit value, or reports the first bad one.
fn validate(input: &str) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(input.len());
    for (index, character) in input.char_indices() {
        let Some(value) = digit_value(character) else {
            log::debug!("base58 decode rejected: invalid digit {character:?} at index {index}");
            return Err(Error::InvalidDigit { character, index });
        };
        digits.push(value);
    }
    Ok(digits)
}

/// Horner accumulation into big-endian base-2^32 words.
fn accumulate(digits: &[u8], word_count: usize) -> Vec<u32> {
    let mut words = vec![0u32; word_count];
    for &digit in digits {
        let mut carry = u64::from(digit);
        for word in words.iter_mut().rev() {
            let t = u64::from(*word) * 58 + carry;
            carry = t >> 32;
            #[allow(clippy::cast_possible_truncation)]
            let low = t as u32;
            *word = low;
        }
        debug_assert_eq!(carry, 0, "58^n always fits in n bytes");
    }
    words
}

/// Writes exactly `len` bytes, big-endian. The top word only carries
/// `len % 4` bytes (all four when that is zero); the rest carry four each.
fn unpack(words: &[u32], len: usize, output: &mut [u8]) -> usize {
    let mut width = match len % 4 {
        0 => 4,
        partial => partial,
    };
    let mut out_len = 0;
    for word in words {
        let bytes = word.to_be_bytes();
        output[out_len..out_len + width].copy_from_slice(&bytes[4 - width..]);
        out_len += width;
        width = 4;
    }
    out_len
}
