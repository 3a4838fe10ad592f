//! The 16-byte identification block at the start of every ELF file.

use serde::Serialize;

use crate::error::DecodeError;

/// The four magic bytes every ELF file starts with: `0x7F` followed by `"ELF"`.
pub const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];

/// Class byte of a 32-bit object.
pub const CLASS_32: u8 = 1;
/// Class byte of a 64-bit object.
pub const CLASS_64: u8 = 2;

/// Endianness byte of a little-endian object.
pub const ENDIAN_LITTLE: u8 = 1;
/// Endianness byte of a big-endian object.
pub const ENDIAN_BIG: u8 = 2;

/// Length of the identification block in bytes.
pub const IDENT_LEN: usize = 16;

/// ELF identification block.
///
/// This corresponds to the `e_ident` array of the standard `ElfXX_Ehdr`,
/// broken out into named fields. It declares the properties every later
/// decoding step depends on: whether addresses are 32 or 64 bits wide and
/// which byte order multi-byte fields use.
///
/// Decoding is deliberately lenient. Only the magic is checked; the class,
/// endianness, version and OS/ABI bytes are stored verbatim even when they
/// hold values the rest of this crate cannot work with. Rejecting those is
/// the caller's decision — the header decoders check the class themselves
/// and nothing ever checks the rest.
///
/// Reference: [ELF Specification v1.2](https://refspecs.linuxfoundation.org/elf/elf.pdf)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ident {
    /// Magic signature, `7F 45 4C 46` in a valid file.
    pub magic: [u8; 4],

    /// Bit width of the object: [`CLASS_32`] or [`CLASS_64`].
    pub class: u8,

    /// Byte order of multi-byte header fields: [`ENDIAN_LITTLE`] or
    /// [`ENDIAN_BIG`].
    pub endian: u8,

    /// Identification format version, `1` for current objects.
    pub version: u8,

    /// Target OS/ABI, see [`crate::consts::osabi`].
    pub os_abi: u8,

    /// ABI version; its meaning depends on `os_abi`.
    pub abi_version: u8,

    /// Reserved padding bytes, carried through untouched.
    pub pad: [u8; 7],
}

impl Ident {
    /// Decodes the identification block from the first [`IDENT_LEN`] bytes
    /// of `content`.
    ///
    /// The magic bytes are copied out of the buffer first and checked
    /// second, so a failed check still hands the caller the bytes that
    /// were found, inside [`DecodeError::InvalidMagic`]. No other byte is
    /// validated.
    ///
    /// # Panics
    ///
    /// Panics if `content` is shorter than [`IDENT_LEN`] bytes.
    pub fn decode(content: &[u8]) -> Result<Ident, DecodeError> {
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&content[0x00..0x04]);
        if magic != ELF_MAGIC {
            return Err(DecodeError::InvalidMagic { found: magic });
        }

        let mut pad = [0u8; 7];
        pad.copy_from_slice(&content[0x09..0x10]);

        Ok(Ident {
            magic,
            class: content[0x04],
            endian: content[0x05],
            version: content[0x06],
            os_abi: content[0x07],
            abi_version: content[0x08],
            pad,
        })
    }

    /// Returns true if the declared byte order differs from the host's,
    /// i.e. the header decoders will reverse every multi-byte field.
    pub fn needs_swap(&self) -> bool {
        self.endian != host_endian()
    }

    /// Returns true if the object declares itself 64-bit.
    pub fn is_64(&self) -> bool {
        self.class == CLASS_64
    }
}

/// The endianness byte matching the machine this code runs on.
///
/// This is the one place the decode result depends on the executing
/// platform rather than the input bytes.
pub fn host_endian() -> u8 {
    if cfg!(target_endian = "big") {
        ENDIAN_BIG
    } else {
        ENDIAN_LITTLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LE64_IDENT: [u8; 16] = [
        0x7F, 0x45, 0x4C, 0x46, 0x02, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00,
    ];

    #[test]
    fn decodes_valid_ident() {
        let ident = Ident::decode(&LE64_IDENT).unwrap();
        assert_eq!(ident.magic, ELF_MAGIC);
        assert_eq!(ident.class, CLASS_64);
        assert_eq!(ident.endian, ENDIAN_LITTLE);
        assert_eq!(ident.version, 1);
        assert_eq!(ident.os_abi, 0);
        assert_eq!(ident.abi_version, 0);
        assert_eq!(ident.pad, [0u8; 7]);
    }

    #[test]
    fn bad_magic_reports_the_bytes_found() {
        let err = Ident::decode(&[0u8; 16]).unwrap_err();
        assert_eq!(err, DecodeError::InvalidMagic { found: [0u8; 4] });

        // A single wrong byte is enough, and the copy happens before the check.
        let mut bytes = LE64_IDENT;
        bytes[3] = b'G';
        let err = Ident::decode(&bytes).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidMagic {
                found: [0x7F, b'E', b'L', b'G']
            }
        );
    }

    #[test]
    fn out_of_range_tags_are_preserved_not_rejected() {
        let mut bytes = LE64_IDENT;
        bytes[0x04] = 0xFF;
        bytes[0x05] = 0x7E;
        bytes[0x07] = 0xAB;
        let ident = Ident::decode(&bytes).unwrap();
        assert_eq!(ident.class, 0xFF);
        assert_eq!(ident.endian, 0x7E);
        assert_eq!(ident.os_abi, 0xAB);
    }

    #[test]
    fn padding_bytes_round_trip() {
        let mut bytes = LE64_IDENT;
        bytes[0x09..0x10].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        let ident = Ident::decode(&bytes).unwrap();
        assert_eq!(ident.pad, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn swap_decision_tracks_host_endianness() {
        let mut ident = Ident::decode(&LE64_IDENT).unwrap();
        assert_eq!(ident.needs_swap(), host_endian() != ENDIAN_LITTLE);
        ident.endian = ENDIAN_BIG;
        assert_eq!(ident.needs_swap(), host_endian() != ENDIAN_BIG);
    }
}
