//! Enumerated values used by ELF header fields.
//!
//! Pure vocabulary: nothing here decodes anything, and the decoders accept
//! values outside these lists without complaint. The `name` helpers exist
//! for presentation layers and return `None` for anything unrecognized.

/// OS/ABI identifiers (`Ident::os_abi`).
pub mod osabi {
    pub const SYSTEM_V: u8 = 0;
    pub const HPUX: u8 = 1;
    pub const NETBSD: u8 = 2;
    pub const LINUX: u8 = 3;
    pub const GNU_HURD: u8 = 4;
    pub const SOLARIS: u8 = 5;
    pub const AIX: u8 = 6;
    pub const IRIX: u8 = 7;
    pub const FREEBSD: u8 = 8;
    pub const TRU64: u8 = 9;
    pub const NOVELL_MODESTO: u8 = 10;
    pub const OPENBSD: u8 = 11;
    pub const OPENVMS: u8 = 12;
    pub const NONSTOP_KERNEL: u8 = 13;
    pub const AROS: u8 = 14;
    pub const FENIX_OS: u8 = 15;
    pub const CLOUD_ABI: u8 = 16;
    pub const OPENVOS: u8 = 17;

    pub fn name(value: u8) -> Option<&'static str> {
        Some(match value {
            SYSTEM_V => "System V",
            HPUX => "HP-UX",
            NETBSD => "NetBSD",
            LINUX => "Linux",
            GNU_HURD => "GNU Hurd",
            SOLARIS => "Solaris",
            AIX => "AIX",
            IRIX => "IRIX",
            FREEBSD => "FreeBSD",
            TRU64 => "Tru64",
            NOVELL_MODESTO => "Novell Modesto",
            OPENBSD => "OpenBSD",
            OPENVMS => "OpenVMS",
            NONSTOP_KERNEL => "NonStop Kernel",
            AROS => "AROS",
            FENIX_OS => "FenixOS",
            CLOUD_ABI => "CloudABI",
            OPENVOS => "OpenVOS",
            _ => return None,
        })
    }
}

/// Object file types (`e_type`).
///
/// Besides the five named values, two inclusive ranges are reserved for
/// OS-specific and processor-specific types.
pub mod ftype {
    pub const NONE: u16 = 0;
    pub const RELOCATABLE: u16 = 1;
    pub const EXECUTABLE: u16 = 2;
    pub const SHARED: u16 = 3;
    pub const CORE: u16 = 4;

    /// OS-specific range, inclusive.
    pub const LO_OS: u16 = 0xFE00;
    pub const HI_OS: u16 = 0xFEFF;

    /// Processor-specific range, inclusive.
    pub const LO_PROC: u16 = 0xFF00;
    pub const HI_PROC: u16 = 0xFFFF;

    pub fn name(value: u16) -> Option<&'static str> {
        Some(match value {
            NONE => "none",
            RELOCATABLE => "relocatable",
            EXECUTABLE => "executable",
            SHARED => "shared object",
            CORE => "core dump",
            LO_OS..=HI_OS => "OS-specific",
            LO_PROC..=HI_PROC => "processor-specific",
            _ => return None,
        })
    }
}

/// Program header types (`p_type`).
pub mod ptype {
    pub const NULL: u32 = 0;
    pub const LOADABLE: u32 = 1;
    pub const DYNAMIC_INFO: u32 = 2;
    pub const INTERPRETER_INFO: u32 = 3;
    pub const NOTE: u32 = 4;
    /// Reserved.
    pub const SHLIB: u32 = 5;
    pub const PHDR: u32 = 6;
    pub const TLS: u32 = 7;

    /// OS-specific range, inclusive.
    pub const LO_OS: u32 = 0x6000_0000;
    pub const HI_OS: u32 = 0x6FFF_FFFF;

    /// Processor-specific range, inclusive.
    pub const LO_PROC: u32 = 0x7000_0000;
    pub const HI_PROC: u32 = 0x7FFF_FFFF;
}

/// Program header flag bits (`p_flags`).
pub mod pflags {
    pub const EXECUTABLE: u32 = 0x1;
    pub const WRITABLE: u32 = 0x2;
    pub const READABLE: u32 = 0x4;
}

/// Section header types (`sh_type`).
pub mod stype {
    pub const NULL: u32 = 0;
    pub const PROGBITS: u32 = 1;
    pub const SYMTAB: u32 = 2;
    pub const STRTAB: u32 = 3;
    pub const RELA: u32 = 4;
    pub const HASH: u32 = 5;
    pub const DYNAMIC_INFO: u32 = 6;
    pub const NOTE: u32 = 7;
    pub const NOBITS: u32 = 8;
    pub const REL: u32 = 9;
    /// Reserved.
    pub const SHLIB: u32 = 10;
    pub const DYNSYM: u32 = 11;
    pub const INIT_ARRAY: u32 = 12;
    pub const FINISH_ARRAY: u32 = 13;
    pub const PREINIT_ARRAY: u32 = 14;
    pub const GROUP: u32 = 15;
    pub const SYMTAB_SHNDX: u32 = 16;
    pub const NUM: u32 = 17;

    /// Start of the OS-specific range.
    pub const LO_OS: u32 = 0x6000_0000;
}

/// Section header flag bits (`sh_flags`).
///
/// `u64` because the 64-bit section header widens the flags field; the
/// 32-bit form truncates cleanly.
pub mod sflags {
    pub const WRITABLE: u64 = 0x1;
    pub const ALLOCATES: u64 = 0x2;
    pub const EXECUTABLE: u64 = 0x4;
    pub const MERGE: u64 = 0x10;
    pub const STRINGS: u64 = 0x20;
    pub const INFO_LINK: u64 = 0x40;
    pub const LINK_ORDER: u64 = 0x80;
    pub const OS_NONCONFORMING: u64 = 0x100;
    pub const GROUP: u64 = 0x200;
    pub const TLS: u64 = 0x400;
    pub const ORDERED: u64 = 0x400_0000;
    pub const EXCLUDED: u64 = 0x800_0000;
    pub const MASK_OS: u64 = 0x0FF0_0000;
    pub const MASK_PROC: u64 = 0xF000_0000;
}
