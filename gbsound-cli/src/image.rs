//! Rendering of a register file for humans and for scripts.

use core::fmt::{self, Write as _};
use gbsound_core::{
    RegisterFile, Write,
    registers::{self, WAVE_RAM},
    wave,
};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Register {
    pub name: &'static str,
    pub addr: String,
    pub value: u8,
}

#[derive(Serialize, Debug)]
pub struct Image {
    pub registers: Vec<Register>,
    pub wave: wave::WaveTable,
    pub writes: Option<Vec<Write>>,
}

impl Image {
    /// Named registers only; wave RAM is reported as unpacked samples.
    pub fn new(regs: &RegisterFile, writes: Option<&[Write]>) -> Self {
        let registers = regs
            .iter()
            .filter(|&(addr, _)| addr < WAVE_RAM)
            .filter_map(|(addr, value)| {
                registers::name(addr).map(|name| Register {
                    name,
                    addr: format!("{addr:#06X}"),
                    value,
                })
            })
            .collect();

        let mut ram = [0; registers::WAVE_RAM_SIZE as usize];
        ram.copy_from_slice(&regs.snapshot()[usize::from(WAVE_RAM - registers::FIRST)..]);

        Self {
            registers,
            wave: wave::unpack(&ram),
            writes: writes.map(<[Write]>::to_vec),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_table(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();

        for reg in &self.registers {
            writeln!(
                out,
                "{} {} {:#04X} {:08b}",
                reg.name, reg.addr, reg.value, reg.value
            )?;
        }

        out.push_str("WAVE");
        for sample in self.wave {
            write!(out, " {sample:X}")?;
        }
        out.push('\n');

        if let Some(writes) = &self.writes {
            out.push_str("\nwrites:\n");
            for w in writes {
                let name = registers::name(w.addr).unwrap_or("?");
                writeln!(out, "  {name} {:#06X} <- {:#04X}", w.addr, w.val)?;
            }
        }

        Ok(out)
    }
}
