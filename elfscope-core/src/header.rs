//! The width-variant ELF file header and its decoders.
//!
//! The file header comes in two layouts that share one logical schema: the
//! 64-bit form widens the three address-sized fields (`e_entry`, `e_phoff`,
//! `e_shoff`) from 4 to 8 bytes, which shifts everything after them. Both
//! decoders read each field at its fixed offset and swap its bytes when the
//! declared endianness differs from the host's; nothing beyond the class
//! check is validated here.

use serde::Serialize;

use crate::error::DecodeError;
use crate::ident::{Ident, CLASS_32, CLASS_64, IDENT_LEN};
use crate::raw::{read_u16, read_u32, read_u64};

/// Size of the 32-bit header body following the identification block.
pub const HEADER32_BODY_LEN: usize = 0x24;
/// Size of the 64-bit header body following the identification block.
pub const HEADER64_BODY_LEN: usize = 0x30;

/// File header of a 32-bit ELF object, `Elf32_Ehdr` in the C world.
///
/// The offsets in the field docs are from the start of the file; the
/// decoder takes a buffer that begins right after the identification
/// block, at file offset `0x10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header32 {
    /// The identification block this header was decoded against.
    pub ident: Ident,

    /// Object file type, see [`crate::consts::ftype`]. Offset `0x10`.
    pub e_type: u16,

    /// Target architecture identifier, e.g. `3` for x86. Offset `0x12`.
    pub e_machine: u16,

    /// ELF version, `1` for current objects. Offset `0x14`.
    pub e_version: u32,

    /// Virtual address execution starts at. Offset `0x18`.
    pub e_entry: u32,

    /// File offset of the program header table. Offset `0x1C`.
    pub e_phoff: u32,

    /// File offset of the section header table. Offset `0x20`.
    pub e_shoff: u32,

    /// Processor-specific flags. Offset `0x24`.
    pub e_flags: u32,

    /// Size of this header, `0x34` for well-formed ELF32. Offset `0x28`.
    pub e_ehsize: u16,

    /// Size of one program header table entry. Offset `0x2A`.
    pub e_phentsize: u16,

    /// Number of program header table entries. Offset `0x2C`.
    pub e_phnum: u16,

    /// Size of one section header table entry. Offset `0x2E`.
    pub e_shentsize: u16,

    /// Number of section header table entries. Offset `0x30`.
    pub e_shnum: u16,

    /// Section header table index of the section-name string table.
    /// Offset `0x32`.
    pub e_shstrndx: u16,
}

/// File header of a 64-bit ELF object, `Elf64_Ehdr` in the C world.
///
/// Identical schema to [`Header32`] with 8-byte address fields, which
/// pushes every later field to a higher offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header64 {
    /// The identification block this header was decoded against.
    pub ident: Ident,

    /// Object file type, see [`crate::consts::ftype`]. Offset `0x10`.
    pub e_type: u16,

    /// Target architecture identifier, e.g. `62` for x86-64. Offset `0x12`.
    pub e_machine: u16,

    /// ELF version, `1` for current objects. Offset `0x14`.
    pub e_version: u32,

    /// Virtual address execution starts at. Offset `0x18`.
    pub e_entry: u64,

    /// File offset of the program header table. Offset `0x20`.
    pub e_phoff: u64,

    /// File offset of the section header table. Offset `0x28`.
    pub e_shoff: u64,

    /// Processor-specific flags. Offset `0x30`.
    pub e_flags: u32,

    /// Size of this header, `0x40` for well-formed ELF64. Offset `0x34`.
    pub e_ehsize: u16,

    /// Size of one program header table entry. Offset `0x36`.
    pub e_phentsize: u16,

    /// Number of program header table entries. Offset `0x38`.
    pub e_phnum: u16,

    /// Size of one section header table entry. Offset `0x3A`.
    pub e_shentsize: u16,

    /// Number of section header table entries. Offset `0x3C`.
    pub e_shnum: u16,

    /// Section header table index of the section-name string table.
    /// Offset `0x3E`.
    pub e_shstrndx: u16,
}

impl Header32 {
    /// Decodes the 32-bit header body.
    ///
    /// `content` must start at file offset `0x10`, immediately after the
    /// identification block, and hold at least [`HEADER32_BODY_LEN`]
    /// bytes. The caller is expected to have checked that; this function
    /// does not.
    ///
    /// Fails only when `ident` declares a class other than [`CLASS_32`],
    /// and in that case reads no byte of `content`. Once the class check
    /// passes, decoding always succeeds; field values are not validated.
    pub fn decode(ident: Ident, content: &[u8]) -> Result<Header32, DecodeError> {
        if ident.class != CLASS_32 {
            return Err(DecodeError::WidthMismatch {
                declared: ident.class,
            });
        }
        let swap = ident.needs_swap();

        Ok(Header32 {
            ident,
            e_type: read_u16(content, 0x10 - IDENT_LEN, swap),
            e_machine: read_u16(content, 0x12 - IDENT_LEN, swap),
            e_version: read_u32(content, 0x14 - IDENT_LEN, swap),
            e_entry: read_u32(content, 0x18 - IDENT_LEN, swap),
            e_phoff: read_u32(content, 0x1C - IDENT_LEN, swap),
            e_shoff: read_u32(content, 0x20 - IDENT_LEN, swap),
            e_flags: read_u32(content, 0x24 - IDENT_LEN, swap),
            e_ehsize: read_u16(content, 0x28 - IDENT_LEN, swap),
            e_phentsize: read_u16(content, 0x2A - IDENT_LEN, swap),
            e_phnum: read_u16(content, 0x2C - IDENT_LEN, swap),
            e_shentsize: read_u16(content, 0x2E - IDENT_LEN, swap),
            e_shnum: read_u16(content, 0x30 - IDENT_LEN, swap),
            e_shstrndx: read_u16(content, 0x32 - IDENT_LEN, swap),
        })
    }
}

impl Header64 {
    /// Decodes the 64-bit header body.
    ///
    /// Same contract as [`Header32::decode`] with [`HEADER64_BODY_LEN`]
    /// bytes required and [`CLASS_64`] expected.
    pub fn decode(ident: Ident, content: &[u8]) -> Result<Header64, DecodeError> {
        if ident.class != CLASS_64 {
            return Err(DecodeError::WidthMismatch {
                declared: ident.class,
            });
        }
        let swap = ident.needs_swap();

        Ok(Header64 {
            ident,
            e_type: read_u16(content, 0x10 - IDENT_LEN, swap),
            e_machine: read_u16(content, 0x12 - IDENT_LEN, swap),
            e_version: read_u32(content, 0x14 - IDENT_LEN, swap),
            e_entry: read_u64(content, 0x18 - IDENT_LEN, swap),
            e_phoff: read_u64(content, 0x20 - IDENT_LEN, swap),
            e_shoff: read_u64(content, 0x28 - IDENT_LEN, swap),
            e_flags: read_u32(content, 0x30 - IDENT_LEN, swap),
            e_ehsize: read_u16(content, 0x34 - IDENT_LEN, swap),
            e_phentsize: read_u16(content, 0x36 - IDENT_LEN, swap),
            e_phnum: read_u16(content, 0x38 - IDENT_LEN, swap),
            e_shentsize: read_u16(content, 0x3A - IDENT_LEN, swap),
            e_shnum: read_u16(content, 0x3C - IDENT_LEN, swap),
            e_shstrndx: read_u16(content, 0x3E - IDENT_LEN, swap),
        })
    }
}

/// A decoded file header of either width.
///
/// Callers that do not want to commit to a width at the type level hold
/// one of these; within each variant field access stays fully typed. The
/// accessors widen 32-bit values to `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Header {
    Elf32(Header32),
    Elf64(Header64),
}

impl Header {
    /// Decodes whichever header body the identification block declares,
    /// branching on its class byte. `content` starts at file offset
    /// `0x10`, as for the width-specific decoders.
    ///
    /// Returns [`DecodeError::WidthMismatch`] when the class byte is
    /// neither [`CLASS_32`] nor [`CLASS_64`].
    pub fn decode(ident: Ident, content: &[u8]) -> Result<Header, DecodeError> {
        match ident.class {
            CLASS_32 => Header32::decode(ident, content).map(Header::Elf32),
            CLASS_64 => Header64::decode(ident, content).map(Header::Elf64),
            other => Err(DecodeError::WidthMismatch { declared: other }),
        }
    }

    /// Returns the identification block the header embeds.
    pub fn ident(&self) -> &Ident {
        match self {
            Header::Elf32(h) => &h.ident,
            Header::Elf64(h) => &h.ident,
        }
    }

    /// Returns the virtual address of the entry point.
    pub fn entry_point(&self) -> u64 {
        match self {
            Header::Elf32(h) => h.e_entry as u64,
            Header::Elf64(h) => h.e_entry,
        }
    }

    /// Returns the machine architecture identifier.
    pub fn machine(&self) -> u16 {
        match self {
            Header::Elf32(h) => h.e_machine,
            Header::Elf64(h) => h.e_machine,
        }
    }

    /// Returns the object file type.
    pub fn file_type(&self) -> u16 {
        match self {
            Header::Elf32(h) => h.e_type,
            Header::Elf64(h) => h.e_type,
        }
    }

    /// Returns the file offset of the program header table.
    pub fn program_header_offset(&self) -> u64 {
        match self {
            Header::Elf32(h) => h.e_phoff as u64,
            Header::Elf64(h) => h.e_phoff,
        }
    }

    /// Returns the file offset of the section header table.
    pub fn section_header_offset(&self) -> u64 {
        match self {
            Header::Elf32(h) => h.e_shoff as u64,
            Header::Elf64(h) => h.e_shoff,
        }
    }

    /// Returns true if this is a 64-bit header.
    pub fn is_64(&self) -> bool {
        matches!(self, Header::Elf64(_))
    }

    /// Returns true if the object is an executable (vs object/lib).
    pub fn is_executable(&self) -> bool {
        self.file_type() == crate::consts::ftype::EXECUTABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::{host_endian, ENDIAN_BIG, ENDIAN_LITTLE};

    fn ident(class: u8, endian: u8) -> Ident {
        Ident {
            magic: crate::ident::ELF_MAGIC,
            class,
            endian,
            version: 1,
            os_abi: 0,
            abi_version: 0,
            pad: [0; 7],
        }
    }

    fn push(body: &mut Vec<u8>, value: u64, width: usize, endian: u8) {
        let le = value.to_le_bytes();
        if endian == ENDIAN_BIG {
            body.extend(le[..width].iter().rev());
        } else {
            body.extend_from_slice(&le[..width]);
        }
    }

    // A fully populated 64-bit header body in the requested byte order,
    // starting at file offset 0x10.
    fn body64(endian: u8) -> Vec<u8> {
        let mut b = Vec::with_capacity(HEADER64_BODY_LEN);
        push(&mut b, 2, 2, endian); // e_type
        push(&mut b, 0x3E, 2, endian); // e_machine
        push(&mut b, 1, 4, endian); // e_version
        push(&mut b, 0x0000_7FFF_0040_1040, 8, endian); // e_entry
        push(&mut b, 0x40, 8, endian); // e_phoff
        push(&mut b, 0x0001_2345, 8, endian); // e_shoff
        push(&mut b, 0x1234_5678, 4, endian); // e_flags
        push(&mut b, 64, 2, endian); // e_ehsize
        push(&mut b, 56, 2, endian); // e_phentsize
        push(&mut b, 13, 2, endian); // e_phnum
        push(&mut b, 64, 2, endian); // e_shentsize
        push(&mut b, 31, 2, endian); // e_shnum
        push(&mut b, 30, 2, endian); // e_shstrndx
        assert_eq!(b.len(), HEADER64_BODY_LEN);
        b
    }

    fn body32(endian: u8) -> Vec<u8> {
        let mut b = Vec::with_capacity(HEADER32_BODY_LEN);
        push(&mut b, 3, 2, endian); // e_type
        push(&mut b, 3, 2, endian); // e_machine
        push(&mut b, 1, 4, endian); // e_version
        push(&mut b, 0x0804_8000, 4, endian); // e_entry
        push(&mut b, 0x34, 4, endian); // e_phoff
        push(&mut b, 0x2000, 4, endian); // e_shoff
        push(&mut b, 0, 4, endian); // e_flags
        push(&mut b, 52, 2, endian); // e_ehsize
        push(&mut b, 32, 2, endian); // e_phentsize
        push(&mut b, 7, 2, endian); // e_phnum
        push(&mut b, 40, 2, endian); // e_shentsize
        push(&mut b, 25, 2, endian); // e_shnum
        push(&mut b, 24, 2, endian); // e_shstrndx
        assert_eq!(b.len(), HEADER32_BODY_LEN);
        b
    }

    fn check64(h: &Header64) {
        assert_eq!(h.e_type, 2);
        assert_eq!(h.e_machine, 0x3E);
        assert_eq!(h.e_version, 1);
        assert_eq!(h.e_entry, 0x0000_7FFF_0040_1040);
        assert_eq!(h.e_phoff, 0x40);
        assert_eq!(h.e_shoff, 0x0001_2345);
        assert_eq!(h.e_flags, 0x1234_5678);
        assert_eq!(h.e_ehsize, 64);
        assert_eq!(h.e_phentsize, 56);
        assert_eq!(h.e_phnum, 13);
        assert_eq!(h.e_shentsize, 64);
        assert_eq!(h.e_shnum, 31);
        assert_eq!(h.e_shstrndx, 30);
    }

    #[test]
    fn decodes_little_endian_64bit_header() {
        let ident = ident(CLASS_64, ENDIAN_LITTLE);
        let h = Header64::decode(ident, &body64(ENDIAN_LITTLE)).unwrap();
        assert_eq!(h.ident, ident);
        check64(&h);
    }

    #[test]
    fn decodes_big_endian_64bit_header() {
        // Opposite byte order in the file, same numeric values out.
        let h = Header64::decode(ident(CLASS_64, ENDIAN_BIG), &body64(ENDIAN_BIG)).unwrap();
        check64(&h);
    }

    #[test]
    fn decodes_32bit_header_in_both_byte_orders() {
        for endian in [ENDIAN_LITTLE, ENDIAN_BIG] {
            let h = Header32::decode(ident(CLASS_32, endian), &body32(endian)).unwrap();
            assert_eq!(h.e_type, 3);
            assert_eq!(h.e_machine, 3);
            assert_eq!(h.e_entry, 0x0804_8000);
            assert_eq!(h.e_phoff, 0x34);
            assert_eq!(h.e_shoff, 0x2000);
            assert_eq!(h.e_shstrndx, 24);
        }
    }

    #[test]
    fn host_order_file_needs_no_swap() {
        let ident = ident(CLASS_64, host_endian());
        assert!(!ident.needs_swap());
        let h = Header64::decode(ident, &body64(host_endian())).unwrap();
        check64(&h);
    }

    #[test]
    fn width_mismatch_reads_nothing() {
        // An empty body would panic on any read; the class check fires first.
        let err = Header32::decode(ident(CLASS_64, ENDIAN_LITTLE), &[]).unwrap_err();
        assert_eq!(err, DecodeError::WidthMismatch { declared: CLASS_64 });

        let err = Header64::decode(ident(CLASS_32, ENDIAN_LITTLE), &[]).unwrap_err();
        assert_eq!(err, DecodeError::WidthMismatch { declared: CLASS_32 });
    }

    #[test]
    fn dispatch_follows_the_declared_class() {
        let h = Header::decode(ident(CLASS_64, ENDIAN_LITTLE), &body64(ENDIAN_LITTLE)).unwrap();
        assert!(h.is_64());
        assert!(h.is_executable());
        assert_eq!(h.entry_point(), 0x0000_7FFF_0040_1040);
        assert_eq!(h.machine(), 0x3E);

        let h = Header::decode(ident(CLASS_32, ENDIAN_LITTLE), &body32(ENDIAN_LITTLE)).unwrap();
        assert!(!h.is_64());
        assert!(!h.is_executable()); // shared object
        assert_eq!(h.entry_point(), 0x0804_8000);
        assert_eq!(h.section_header_offset(), 0x2000);
    }

    #[test]
    fn dispatch_rejects_unknown_class() {
        let err = Header::decode(ident(0xFF, ENDIAN_LITTLE), &[]).unwrap_err();
        assert_eq!(err, DecodeError::WidthMismatch { declared: 0xFF });
    }

    // The worked example from the format docs: minimal little-endian
    // 64-bit executable decoded on whatever host runs the tests.
    #[test]
    fn executable_file_type_decodes_from_raw_bytes() {
        let file: Vec<u8> = {
            let mut f = vec![
                0x7F, 0x45, 0x4C, 0x46, 0x02, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x00,
            ];
            let mut body = vec![0u8; HEADER64_BODY_LEN];
            body[0] = 0x02; // e_type = ET_EXEC, little-endian
            f.extend_from_slice(&body);
            f
        };

        let ident = Ident::decode(&file).unwrap();
        assert_eq!(ident.class, CLASS_64);
        assert_eq!(ident.endian, ENDIAN_LITTLE);

        let h = Header64::decode(ident, &file[IDENT_LEN..]).unwrap();
        assert_eq!(h.e_type, 2);

        // Same body tagged big-endian: the swapped read sees 0x0200.
        let mut swapped = ident;
        swapped.endian = ENDIAN_BIG;
        let h = Header64::decode(swapped, &file[IDENT_LEN..]).unwrap();
        assert_eq!(h.e_type, 0x0200);
    }
}
