//! # chippie
//!
//! Runs a rom headless for a few seconds and prints the last frame. Useful to check that a rom
//! boots and draws something; it reads no keys and makes no sound.

use std::error::Error;
use std::time::{Duration, Instant};

use chippie_vm::{Config, Cpu, RomBuffer, Scheduler};
use log::info;

/// How long to run when no duration is given
const DEFAULT_RUN_TIME: Duration = Duration::from_secs(5);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: chippie <rom> [seconds]")?;
    let run_time = match args.next() {
        Some(seconds) => Duration::try_from_secs_f64(seconds.parse()?)?,
        None => DEFAULT_RUN_TIME,
    };

    let rom = RomBuffer::read(&path)?;
    let mut cpu = Cpu::new(Config::default());
    cpu.load(rom.contents())?;
    info!("running {path} for {run_time:?}");

    let mut scheduler = Scheduler::for_cpu(&cpu);
    let start = Instant::now();
    scheduler.advance_to(&mut cpu, start)?;
    while start.elapsed() < run_time {
        spin_sleep::sleep(scheduler.until_next_tick());
        scheduler.advance_to(&mut cpu, Instant::now())?;
    }

    if cpu.is_waiting_for_key() {
        info!("stopped while waiting for a key");
    }
    println!("{}", cpu.read_display());
    Ok(())
}
