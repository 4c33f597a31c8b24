#![expect(unsafe_code)]

use crate::{
    bus::Bus,
    registers::{FIRST, LAST},
};
use core::ptr::NonNull;

const IO_PAGE: u16 = 0xFF00;

/// Volatile access to the memory-mapped sound registers.
///
/// Holds a pointer to the start of the I/O page (`0xFF00` on hardware) and
/// reads or writes `base + (addr - 0xFF00)` with volatile operations.
/// Addresses outside `0xFF10..=0xFF3F` read as `0xFF` and are never written.
#[derive(Debug)]
pub struct Mmio {
    base: NonNull<u8>,
}

impl Mmio {
    /// Accesses the sound registers at their hardware address.
    ///
    /// # Safety
    ///
    /// Must only be called on the target console, and the returned handle
    /// must be the only code touching `0xFF10..=0xFF3F` while it is alive.
    #[inline]
    #[must_use]
    pub const unsafe fn hardware() -> Self {
        let base = IO_PAGE as usize as *mut u8;
        Self {
            // SAFETY: 0xFF00 is not null.
            base: unsafe { NonNull::new_unchecked(base) },
        }
    }

    /// Accesses the sound registers through a page mapped at `base`.
    ///
    /// # Safety
    ///
    /// `base` must be valid for volatile reads and writes of at least
    /// `0x40` bytes, and nothing else may access bytes `0x10..0x40` of it
    /// while the returned handle is alive.
    #[inline]
    #[must_use]
    pub const unsafe fn from_ptr(base: NonNull<u8>) -> Self {
        Self { base }
    }

    const fn offset(addr: u16) -> Option<usize> {
        if addr >= FIRST && addr <= LAST {
            Some((addr - IO_PAGE) as usize)
        } else {
            None
        }
    }
}

impl Bus for Mmio {
    #[inline]
    fn read(&self, addr: u16) -> u8 {
        Self::offset(addr).map_or(0xFF, |offset| {
            // SAFETY: offset < 0x40, inside the page promised by the constructor.
            unsafe { self.base.add(offset).read_volatile() }
        })
    }

    #[inline]
    fn write(&mut self, addr: u16, val: u8) {
        if let Some(offset) = Self::offset(addr) {
            // SAFETY: offset < 0x40, inside the page promised by the constructor.
            unsafe { self.base.add(offset).write_volatile(val) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{NR10, NR52, WAVE_RAM};

    #[test]
    fn writes_land_at_page_offsets() {
        let mut page = [0_u8; 0x40];
        {
            // SAFETY: `page` is 0x40 bytes and only used through `mmio` here.
            let mut mmio = unsafe { Mmio::from_ptr(NonNull::from(&mut page).cast()) };
            mmio.write(NR10, 0x11);
            mmio.write(NR52, 0x80);
            mmio.write(WAVE_RAM + 0xF, 0x5A);
            mmio.write(0xFF00, 0x99);
            assert_eq!(mmio.read(NR52), 0x80, "reads back the written byte");
            assert_eq!(mmio.read(0xFF05), 0xFF, "outside the window is open bus");
        }
        assert_eq!(page[0x10], 0x11, "NR10 is at offset 0x10");
        assert_eq!(page[0x26], 0x80, "NR52 is at offset 0x26");
        assert_eq!(page[0x3F], 0x5A, "last wave byte is at offset 0x3F");
        assert_eq!(page[0x00], 0x00, "joypad register is never touched");
    }
}
