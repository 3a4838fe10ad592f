use thiserror::Error;

/// The only two ways a decode can fail.
///
/// Everything else — unknown OS/ABI bytes, nonsensical offsets or counts,
/// truncated files — is out of this crate's jurisdiction and left to the
/// caller to judge.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The first four bytes are not `7F 45 4C 46`.
    ///
    /// Carries the bytes that were actually read so callers can report
    /// what the file started with.
    #[error("invalid ELF magic: expected [7f, 45, 4c, 46], found {found:02x?}")]
    InvalidMagic { found: [u8; 4] },

    /// The identification block declares a different bit width than the
    /// header decoder that was invoked.
    ///
    /// `declared` is the raw class byte from the identification block.
    /// Re-decode with the matching variant, or reject the file if the
    /// byte is neither of the two defined class values.
    #[error("identification class {declared:#04x} does not match the invoked decoder width")]
    WidthMismatch { declared: u8 },
}
