//! Base58 encoding module for btc58.
//! Bytes are read most-significant first and folded into a big-endian base-58
//! digit buffer ("multiply by 256, add byte, carry base 58"). A `high` water-mark
//! keeps each step from rescanning digit positions no carry can reach.
//! Leading zero bytes come out as leading '1's, one for one.
use crate::alphabet::ZERO_SYMBOL;
use crate::{Error, Result, ALPHABET};

/// Numerator and denominator of the integer stand-in for `log(256) / log(58)`.
const RATIO_NUM: usize = 555;
const RATIO_DEN: usize = 406;

/// `len * 555 / 406`, floored, without overflowing for large `len`.
#[inline]
const fn scale(len: usize) -> usize {
    len / RATIO_DEN * RATIO_NUM + len % RATIO_DEN * RATIO_NUM / RATIO_DEN
}

/// Worst-case output length of [`encode`] for `len` input bytes.
///
/// A buffer of this size is accepted by [`encode_into`] for every input of
/// that length.
#[must_use]
pub const fn max_encoded_len(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    scale(len) + 1
}

/// Buffer size [`encode_into`] requires for this particular `input`.
///
/// Leading zero bytes cost exactly one symbol each, so this is never larger
/// than [`max_encoded_len`] of the same length.
#[must_use]
pub fn encoded_len_bound(input: &[u8]) -> usize {
    if input.is_empty() {
        return 0;
    }
    let zeros = leading_zeros(input);
    zeros + scale(input.len() - zeros) + 1
}

#[inline]
fn leading_zeros(input: &[u8]) -> usize {
    input.iter().take_while(|&&b| b == 0).count()
}

/// Encodes `input` into a freshly allocated Base58 string.
#[must_use]
pub fn encode(input: &[u8]) -> String {
    if input.is_empty() {
        return String::new();
    }
    let mut output = vec![0u8; encoded_len_bound(input)];
    let len = convert(input, &mut output);
    output.truncate(len);
    // SAFETY: `convert` leaves only `ALPHABET` symbols in `output[..len]`, all ASCII.
    unsafe { String::from_utf8_unchecked(output) }
}

/// Encodes `input` into `output`, returning the number of symbols written.
///
/// The text occupies `output[..n]`; anything after it is scratch space and
/// holds no meaningful data. The buffer does not need to be zeroed.
///
/// # Errors
/// - `InsufficientBuffer`: `output` is shorter than [`encoded_len_bound`] of
///   `input`. Nothing is written in that case.
pub fn encode_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    if input.is_empty() {
        return Ok(0);
    }
    let required = encoded_len_bound(input);
    if output.len() < required {
        log::debug!(
            "base58 encode rejected: buffer of {} bytes, {required} required",
            output.len()
        );
        return Err(Error::InsufficientBuffer {
            required,
            actual: output.len(),
        });
    }
    let buf = &mut output[..required];
    buf.fill(0);
    Ok(convert(input, buf))
}

/// Shared body of both entry points. `buf` must be exactly
/// `encoded_len_bound(input)` zeroed bytes; returns the text length.
fn convert(input: &[u8], buf: &mut [u8]) -> usize {
    let zeros = leading_zeros(input);
    let size = buf.len();
    // Positions `high..size` hold the digits produced so far.
    let mut high = size;
    for &byte in input {
        let mut carry = u32::from(byte);
        let mut i = size;
        while i > high || carry != 0 {
            i -= 1;
            carry += u32::from(buf[i]) << 8;
            #[allow(clippy::cast_possible_truncation)]
            let digit = (carry % 58) as u8;
            buf[i] = digit;
            carry /= 58;
        }
        high = i;
    }
    // Over-allocation leaves a run of zero digits in front of the value; keep
    // exactly `zeros` of them for the leading zero bytes.
    let first = zeros + buf[zeros..].iter().take_while(|&&d| d == 0).count();
    let skip = first - zeros;
    buf.copy_within(skip.., 0);
    let len = size - skip;
    for digit in &mut buf[..len] {
        *digit = ALPHABET[usize::from(*digit)];
    }
    debug_assert!(buf[..zeros].iter().all(|&s| s == ZERO_SYMBOL));
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    #[test]
    fn encode_known_no_zeros() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"a"), "2g");
        assert_eq!(encode(b"bbb"), "a3gV");
        assert_eq!(encode(b"ccc"), "aPEr");
        assert_eq!(encode(b"hello"), "Cn8eVZg");
        assert_eq!(encode(b"simply a long string"), "2cFupjhnEsSn59qHXstmK2ffpLv2");
        assert_eq!(encode(&hex!("516b6fcd0f")), "ABnLTmg");
        assert_eq!(encode(&hex!("bf4f89001e670274dd")), "3SEo3LWLoPntC");
        assert_eq!(encode(&hex!("572e4794")), "3EFU7m");
        assert_eq!(encode(&hex!("ecac89cad93923c02321")), "EJDM8drfXA6uyA");
        assert_eq!(encode(&hex!("10c8511e")), "Rt5zm");
    }
    #[test]
    fn encode_with_zeros() {
        assert_eq!(encode(&hex!("00")), "1");
        assert_eq!(encode(&hex!("0000")), "11");
        assert_eq!(encode(&hex!("0001")), "12");
        assert_eq!(
            encode(&hex!("00eb15231dfceb60925886b67d065299925915aeb172c06647")),
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"
        );
        assert_eq!(
            encode(&hex!(
                "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
            )),
            "111114VYJtj3yEDffZem7N3PkK563wkLZZ8RjKzcfY"
        );
    }
    #[test]
    fn encode_all_zero() {
        // nil UUID
        assert_eq!(encode(&[0u8; 16]), "1".repeat(16));
        assert_eq!(encode(&[0u8; 50]), "1".repeat(50));
    }
    #[test]
    fn bounds() {
        assert_eq!(max_encoded_len(0), 0);
        assert_eq!(max_encoded_len(16), 22);
        assert_eq!(max_encoded_len(32), 44);
        assert_eq!(encoded_len_bound(&[]), 0);
        assert_eq!(encoded_len_bound(&[0, 0, 1]), 2 + 1 + 1);
        // no overflow near the top of the range
        assert!(max_encoded_len(usize::MAX / 2) > usize::MAX / 2);
        for len in 0..5000 {
            assert_eq!(scale(len), len * RATIO_NUM / RATIO_DEN, "len {len}");
        }
    }
    #[test]
    fn encode_into_matches_encode() {
        let input = hex!("00eb15231dfceb60925886b67d065299925915aeb172c06647");
        let mut buf = [0xAAu8; 64];
        let n = encode_into(&input, &mut buf).unwrap();
        assert_eq!(&buf[..n], encode(&input).as_bytes());
        // reused, dirty buffer of exactly the bound
        let uuid = hex!("6ba7b8109dad11d180b400c04fd430c8");
        let mut exact = [0xFFu8; 22];
        let n = encode_into(&uuid, &mut exact).unwrap();
        assert_eq!(&exact[..n], encode(&uuid).as_bytes());
    }
    #[test]
    fn encode_into_short_buffer() {
        assert_eq!(
            encode_into(b"a", &mut []),
            Err(Error::InsufficientBuffer { required: 2, actual: 0 })
        );
        let mut buf = [7u8; 21];
        assert_eq!(
            encode_into(&[0xFF; 16], &mut buf),
            Err(Error::InsufficientBuffer { required: 22, actual: 21 })
        );
        assert_eq!(buf, [7u8; 21]);
        assert_eq!(encode_into(b"", &mut []), Ok(0));
    }
}
