use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `decode` was handed an empty string.
    #[error("zero length string")]
    EmptyInput,
    /// A character outside the alphabet, at byte `index` of the input.
    #[error("{}", describe_digit(.character, .index))]
    InvalidDigit { character: char, index: usize },
    /// The caller's buffer is shorter than the conservative bound for this input.
    #[error("insufficient out buffer size: need {required} bytes, got {actual}")]
    InsufficientBuffer { required: usize, actual: usize },
}

fn describe_digit(character: &char, index: &usize) -> String {
    if character.is_ascii() {
        format!("invalid base58 digit ({character:?}) at index {index}")
    } else {
        format!("high-bit set on invalid digit ({character:?}) at index {index}")
    }
}
