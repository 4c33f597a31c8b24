//! Drives the sound chip driver against an in-memory register file and
//! prints the resulting register image.

mod image;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use gbsound_core::{Apu, Channel, Duty, Envelope, Pan, Patch, Period, Recorder, RegisterFile};
use image::Image;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

type Driver = Apu<Recorder<RegisterFile, 512>>;

#[derive(Parser, Debug)]
#[command(name = "gbsound")]
#[command(about = "Show the register writes behind Game Boy sound settings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the register image as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Also list every register write in order
    #[arg(long, global = true)]
    writes: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a frequency to a channel period
    Timer {
        #[arg(allow_negative_numbers = true)]
        hz: i32,

        /// Use the wave channel's divider
        #[arg(long)]
        wave: bool,
    },
    /// Play a single note
    Note {
        /// pulse1, pulse2, wave or noise
        channel: Channel,

        #[arg(allow_negative_numbers = true)]
        hz: i32,

        /// Initial volume, 0-15 [default: 15]. On the wave channel this is
        /// the output level instead: 0 mutes, 1 is full, 2 half and 3 a
        /// quarter [default: 1]
        #[arg(short, long)]
        volume: Option<u8>,

        /// 12.5, 25, 50 or 75
        #[arg(short, long, default_value = "50")]
        duty: Duty,

        /// none, left, right or both
        #[arg(short, long, default_value = "both")]
        pan: Pan,

        /// Length timer load value; enables the length timer when given
        #[arg(short, long)]
        length: Option<u8>,
    },
    /// Apply patches from a JSON file holding an array of patches
    Patch { file: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let out = run(&cli)?;
    print!("{out}");
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let patches = match &cli.command {
        Command::Timer { hz, wave } => return Ok(describe_period(*hz, *wave)),
        Command::Note {
            channel,
            hz,
            volume,
            duty,
            pan,
            length,
        } => {
            let volume = volume.unwrap_or(if channel.is_wave() { 1 } else { 0xF });
            vec![Patch {
                duty: *duty,
                pan: *pan,
                envelope: Envelope::constant(volume),
                length: length.unwrap_or(0),
                length_enable: length.is_some(),
                ..Patch::note(*channel, *hz)
            }]
        }
        Command::Patch { file } => load_patches(file)?,
    };

    let mut apu: Driver = Apu::new(Recorder::new(RegisterFile::new()));
    apu.set_enable(true);
    apu.set_master_volume(7, 7);
    for patch in &patches {
        apu.apply(patch);
    }

    let rec = apu.into_bus();
    if cli.writes && rec.overflowed() {
        warn!(
            "write log is full, only the first {} writes are listed",
            rec.writes().len()
        );
    }

    let image = Image::new(rec.inner(), cli.writes.then(|| rec.writes()));
    if cli.json {
        let mut json = image.to_json().context("Failed to serialize register image")?;
        json.push('\n');
        Ok(json)
    } else {
        image.to_table().context("Failed to format register image")
    }
}

fn describe_period(hz: i32, wave: bool) -> String {
    let period = Period::from_hz(hz, wave);
    format!(
        "period {} ({:#05X}), plays at {} Hz\n",
        period.get(),
        period.get(),
        period.hz(wave)
    )
}

fn load_patches(path: &Path) -> Result<Vec<Patch>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read patch file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse patch file: {}", path.display()))
}
