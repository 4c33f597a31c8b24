use crate::registers::WAVE_RAM_SIZE;

/// Number of 4-bit samples in wave RAM.
pub const SAMPLES: usize = WAVE_RAM_SIZE as usize * 2;

/// One period of the wave channel's waveform, one 4-bit sample per byte.
pub type WaveTable = [u8; SAMPLES];

pub const TRIANGLE: WaveTable = [
    0x0, 0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0xB, 0xC, 0xD, 0xE, 0xF, 0xF, 0xE, 0xD,
    0xC, 0xB, 0xA, 0x9, 0x8, 0x7, 0x6, 0x5, 0x4, 0x3, 0x2, 0x1, 0x0,
];

pub const SAWTOOTH: WaveTable = [
    0x0, 0x0, 0x1, 0x1, 0x2, 0x2, 0x3, 0x3, 0x4, 0x4, 0x5, 0x5, 0x6, 0x6, 0x7, 0x7, 0x8, 0x8, 0x9,
    0x9, 0xA, 0xA, 0xB, 0xB, 0xC, 0xC, 0xD, 0xD, 0xE, 0xE, 0xF, 0xF,
];

pub const SQUARE: WaveTable = [
    0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0xF, 0x0, 0x0, 0x0,
    0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
];

/// Packs samples two per byte, the earlier sample in the upper nibble.
/// Bits above the low nibble of each sample are dropped.
#[inline]
#[must_use]
pub const fn pack(samples: &WaveTable) -> [u8; WAVE_RAM_SIZE as usize] {
    let mut ram = [0; WAVE_RAM_SIZE as usize];
    let mut i = 0;
    while i < ram.len() {
        ram[i] = ((samples[i * 2] & 0xF) << 4) | (samples[i * 2 + 1] & 0xF);
        i += 1;
    }
    ram
}

/// Inverse of [`pack`].
#[inline]
#[must_use]
pub const fn unpack(ram: &[u8; WAVE_RAM_SIZE as usize]) -> WaveTable {
    let mut samples = [0; SAMPLES];
    let mut i = 0;
    while i < ram.len() {
        samples[i * 2] = ram[i] >> 4;
        samples[i * 2 + 1] = ram[i] & 0xF;
        i += 1;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_nibble_holds_first_sample() {
        let ram = pack(&TRIANGLE);
        assert_eq!(ram[0], 0x01, "samples 0 and 1");
        assert_eq!(ram[7], 0xEF, "samples 14 and 15");
        assert_eq!(ram[8], 0xFE, "samples 16 and 17");
        assert_eq!(ram[15], 0x10, "samples 30 and 31");
    }

    #[test]
    fn pack_masks_samples_to_four_bits() {
        let mut samples = [0xF0; SAMPLES];
        samples[0] = 0x3A;
        samples[1] = 0x25;
        let ram = pack(&samples);
        assert_eq!(ram[0], 0xA5, "upper bits of each sample dropped");
        assert!(ram[1..].iter().all(|&b| b == 0), "0xF0 packs to zero");
    }

    #[test]
    fn unpack_recovers_four_bit_samples() {
        assert_eq!(unpack(&pack(&SAWTOOTH)), SAWTOOTH, "sawtooth survives");
    }
}
