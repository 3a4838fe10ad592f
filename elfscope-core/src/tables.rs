//! Program header and section header table entries.
//!
//! Data model only for now: these are the struct shapes the two table
//! kinds take at each bit width. Decoders for them follow the same recipe
//! as the file header — fixed offsets, the shared copy-and-swap read, one
//! class check against the identification block — and slot in here when
//! table walking lands.

use serde::Serialize;

/// Program header table entry of a 32-bit object (`Elf32_Phdr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramHeader32 {
    /// Segment type, see [`crate::consts::ptype`].
    pub p_type: u32,
    /// File offset of the segment's first byte.
    pub p_offset: u32,
    /// Virtual address of the segment in memory.
    pub p_vaddr: u32,
    /// Physical address, on systems where that is meaningful.
    pub p_paddr: u32,
    /// Number of bytes in the file image of the segment.
    pub p_filesz: u32,
    /// Number of bytes in the memory image of the segment.
    pub p_memsz: u32,
    /// Flag bits, see [`crate::consts::pflags`].
    pub p_flags: u32,
    /// Required alignment of the segment.
    pub p_align: u32,
}

/// Program header table entry of a 64-bit object (`Elf64_Phdr`).
///
/// Note the layout difference from [`ProgramHeader32`]: the flags field
/// moves up to second place so the 64-bit fields stay naturally aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramHeader64 {
    /// Segment type, see [`crate::consts::ptype`].
    pub p_type: u32,
    /// Flag bits, see [`crate::consts::pflags`].
    pub p_flags: u32,
    /// File offset of the segment's first byte.
    pub p_offset: u64,
    /// Virtual address of the segment in memory.
    pub p_vaddr: u64,
    /// Physical address, on systems where that is meaningful.
    pub p_paddr: u64,
    /// Number of bytes in the file image of the segment.
    pub p_filesz: u64,
    /// Number of bytes in the memory image of the segment.
    pub p_memsz: u64,
    /// Required alignment of the segment.
    pub p_align: u64,
}

/// Section header table entry of a 32-bit object (`Elf32_Shdr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHeader32 {
    /// Offset of the section's name in the section-name string table.
    pub sh_name: u32,
    /// Section type, see [`crate::consts::stype`].
    pub sh_type: u32,
    /// Flag bits, see [`crate::consts::sflags`].
    pub sh_flags: u32,
    /// Virtual address of the section in memory, if loaded.
    pub sh_addr: u32,
    /// File offset of the section's first byte.
    pub sh_offset: u32,
    /// Size of the section in bytes.
    pub sh_size: u32,
    /// Section index of an associated section.
    pub sh_link: u32,
    /// Extra information, interpretation depends on the type.
    pub sh_info: u32,
    /// Required alignment of the section.
    pub sh_addralign: u32,
    /// Entry size for sections holding fixed-size records, else zero.
    pub sh_entsize: u32,
}

/// Section header table entry of a 64-bit object (`Elf64_Shdr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHeader64 {
    /// Offset of the section's name in the section-name string table.
    pub sh_name: u32,
    /// Section type, see [`crate::consts::stype`].
    pub sh_type: u32,
    /// Flag bits, see [`crate::consts::sflags`].
    pub sh_flags: u64,
    /// Virtual address of the section in memory, if loaded.
    pub sh_addr: u64,
    /// File offset of the section's first byte.
    pub sh_offset: u64,
    /// Size of the section in bytes.
    pub sh_size: u64,
    /// Section index of an associated section.
    pub sh_link: u32,
    /// Extra information, interpretation depends on the type.
    pub sh_info: u32,
    /// Required alignment of the section.
    pub sh_addralign: u64,
    /// Entry size for sections holding fixed-size records, else zero.
    pub sh_entsize: u64,
}
