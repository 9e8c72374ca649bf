//! Lookup tables shared by the encoder and decoder.

use crate::ALPHABET;

/// Marks decode table slots that are not part of the alphabet.
pub(crate) const INVALID: u8 = 0xFF;

/// Symbol for digit value 0; stands in for one leading zero byte.
pub(crate) const ZERO_SYMBOL: u8 = ALPHABET[0];

/// ASCII code -> digit value, `INVALID` where the code is not in the alphabet.
pub(crate) const DIGIT_TO_VAL: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        #[allow(clippy::cast_possible_truncation)]
        let value = i as u8;
        table[ALPHABET[i] as usize] = value;
        i += 1;
    }
    table
};

/// Digit value of `ch`, or `None` for non-ASCII and unmapped characters.
#[inline]
pub(crate) fn digit_value(ch: char) -> Option<u8> {
    let code = u32::from(ch);
    if code > 127 {
        return None;
    }
    match DIGIT_TO_VAL[code as usize] {
        INVALID => None,
        value => Some(value),
    }
}
