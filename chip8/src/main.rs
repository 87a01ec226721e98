use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use vip8::CLOCK_SPEED;

mod keymap;
mod run;

/// A CHIP-8 virtual machine
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Integer scaling factor for the 64x32 display
    #[arg(short, long, default_value_t = 10)]
    scale: u32,

    /// Delay between CPU cycles in milliseconds; defaults to the 500Hz
    /// hardware clock
    #[arg(short, long)]
    cycle_delay: Option<u64>,

    /// Path to the ROM image to run
    rom: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cycle_time = match args.cycle_delay {
        Some(ms) => Duration::from_millis(ms),
        None => Duration::new(0, CLOCK_SPEED),
    };

    run::run(args.rom, args.scale, cycle_time)
}
