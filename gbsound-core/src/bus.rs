use crate::registers::{FIRST, LAST};

/// Byte-addressable access to the sound registers.
///
/// The driver only ever touches addresses in `0xFF10..=0xFF3F`. Reads are
/// only used for read-modify-write of registers whose other bits must
/// survive.
pub trait Bus {
    fn read(&self, addr: u16) -> u8;

    fn write(&mut self, addr: u16, val: u8);
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, val: u8) {
        (**self).write(addr, val);
    }
}

const FILE_SIZE: usize = (LAST - FIRST + 1) as usize;

/// In-memory stand-in for the sound registers.
///
/// Stores the last value written to each address of the sound window, with
/// no read masks or side effects. Addresses outside the window read as
/// `0xFF` and swallow writes, like open bus.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RegisterFile {
    regs: [u8; FILE_SIZE],
}

impl Default for RegisterFile {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regs: [0; FILE_SIZE],
        }
    }

    /// Builds a register file with every byte set to `val`, useful to check
    /// which bits a write leaves alone.
    #[inline]
    #[must_use]
    pub const fn filled(val: u8) -> Self {
        Self {
            regs: [val; FILE_SIZE],
        }
    }

    #[inline]
    #[must_use]
    pub const fn snapshot(&self) -> &[u8; FILE_SIZE] {
        &self.regs
    }

    /// Iterates `(address, value)` pairs over the whole window.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        (FIRST..=LAST).zip(self.regs.iter().copied())
    }

    const fn index(addr: u16) -> Option<usize> {
        if addr >= FIRST && addr <= LAST {
            Some((addr - FIRST) as usize)
        } else {
            None
        }
    }
}

impl Bus for RegisterFile {
    #[inline]
    fn read(&self, addr: u16) -> u8 {
        Self::index(addr).map_or(0xFF, |i| self.regs[i])
    }

    #[inline]
    fn write(&mut self, addr: u16, val: u8) {
        if let Some(i) = Self::index(addr) {
            self.regs[i] = val;
        }
    }
}

/// A single recorded register write.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Write {
    pub addr: u16,
    pub val: u8,
}

/// Bus wrapper that logs every write, in order, before forwarding it.
///
/// The log holds at most `N` entries; later writes still reach the inner
/// bus but are not recorded, and [`Recorder::overflowed`] reports it.
#[derive(Debug)]
pub struct Recorder<B, const N: usize = 64> {
    inner: B,
    log: heapless::Vec<Write, N>,
    overflowed: bool,
}

impl<B: Bus, const N: usize> Recorder<B, N> {
    #[inline]
    pub const fn new(inner: B) -> Self {
        Self {
            inner,
            log: heapless::Vec::new(),
            overflowed: false,
        }
    }

    #[inline]
    pub fn writes(&self) -> &[Write] {
        &self.log
    }

    #[inline]
    pub const fn overflowed(&self) -> bool {
        self.overflowed
    }

    #[inline]
    pub fn clear(&mut self) {
        self.log.clear();
        self.overflowed = false;
    }

    #[inline]
    pub const fn inner(&self) -> &B {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Bus, const N: usize> Bus for Recorder<B, N> {
    #[inline]
    fn read(&self, addr: u16) -> u8 {
        self.inner.read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, val: u8) {
        if self.log.push(Write { addr, val }).is_err() {
            self.overflowed = true;
        }
        self.inner.write(addr, val);
    }
}
