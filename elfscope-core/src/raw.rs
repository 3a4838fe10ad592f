//! Raw field extraction: copy a fixed-width field out of a byte buffer,
//! optionally reversing its byte order on the way out.

use byteorder::{ByteOrder, NativeEndian};

/// Copies `dst.len()` bytes from `src`, reversing their order when `swap`
/// is set.
///
/// Every multi-byte field read goes through this one primitive; it behaves
/// the same for 2-, 4- and 8-byte fields. Single-byte fields never reach
/// it.
pub(crate) fn copy_swap(dst: &mut [u8], src: &[u8], swap: bool) {
    debug_assert_eq!(dst.len(), src.len());
    if swap {
        for (d, s) in dst.iter_mut().zip(src.iter().rev()) {
            *d = *s;
        }
    } else {
        dst.copy_from_slice(src);
    }
}

pub(crate) fn read_u16(buf: &[u8], offset: usize, swap: bool) -> u16 {
    let mut bytes = [0u8; 2];
    copy_swap(&mut bytes, &buf[offset..offset + 2], swap);
    NativeEndian::read_u16(&bytes)
}

pub(crate) fn read_u32(buf: &[u8], offset: usize, swap: bool) -> u32 {
    let mut bytes = [0u8; 4];
    copy_swap(&mut bytes, &buf[offset..offset + 4], swap);
    NativeEndian::read_u32(&bytes)
}

pub(crate) fn read_u64(buf: &[u8], offset: usize, swap: bool) -> u64 {
    let mut bytes = [0u8; 8];
    copy_swap(&mut bytes, &buf[offset..offset + 8], swap);
    NativeEndian::read_u64(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_without_swap_preserves_order() {
        let cases: [&[u8]; 3] = [&[0xAA, 0xBB], &[1, 2, 3, 4], &[1, 2, 3, 4, 5, 6, 7, 8]];
        for src in cases {
            let mut dst = vec![0u8; src.len()];
            copy_swap(&mut dst, src, false);
            assert_eq!(dst, src);
        }
    }

    #[test]
    fn copy_with_swap_reverses_each_width() {
        let mut two = [0u8; 2];
        copy_swap(&mut two, &[0xAA, 0xBB], true);
        assert_eq!(two, [0xBB, 0xAA]);

        let mut four = [0u8; 4];
        copy_swap(&mut four, &[1, 2, 3, 4], true);
        assert_eq!(four, [4, 3, 2, 1]);

        let mut eight = [0u8; 8];
        copy_swap(&mut eight, &[1, 2, 3, 4, 5, 6, 7, 8], true);
        assert_eq!(eight, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn reads_produce_native_values() {
        let buf = 0x1122_3344_5566_7788u64.to_ne_bytes();
        assert_eq!(read_u64(&buf, 0, false), 0x1122_3344_5566_7788);

        let buf = 0xBEEF_CAFEu32.to_ne_bytes();
        assert_eq!(read_u32(&buf, 0, false), 0xBEEF_CAFE);

        let buf = 0x0102u16.to_ne_bytes();
        assert_eq!(read_u16(&buf, 0, false), 0x0102);
    }

    #[test]
    fn reads_with_swap_reverse_interpretation() {
        let mut buf = 0x1122_3344_5566_7788u64.to_ne_bytes();
        buf.reverse();
        assert_eq!(read_u64(&buf, 0, true), 0x1122_3344_5566_7788);

        let mut buf = 0x0102u16.to_ne_bytes();
        buf.reverse();
        assert_eq!(read_u16(&buf, 0, true), 0x0102);
    }

    #[test]
    fn reads_honor_the_offset() {
        let mut buf = vec![0xFF; 3];
        buf.extend_from_slice(&0xD00Du16.to_ne_bytes());
        assert_eq!(read_u16(&buf, 3, false), 0xD00D);
    }
}
