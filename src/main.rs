use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::error;

use chirp8::display::{Display, MonoTermDisplay};
use chirp8::input::{Input, StdinInput};
use chirp8::interpreter::Chip8;
use chirp8::sound::{Mute, SimpleBeep, Sound};

/// run a CHIP-8 program in the terminal
#[derive(Parser)]
struct Cli {
    /// path to a program image (raw big-endian instruction words)
    rom: PathBuf,

    /// instruction steps per second
    #[arg(long, default_value_t = 540)]
    hz: u32,

    /// disable the sound timer beep
    #[arg(long)]
    mute: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut display = MonoTermDisplay::new()?;
    let mut input = StdinInput::new()?;
    let mut sound: Box<dyn Sound> = if cli.mute {
        Box::new(Mute)
    } else {
        Box::new(SimpleBeep::new())
    };

    let mut chip8 = Chip8::new();
    let mut rom = File::open(&cli.rom)?;
    chip8.load_from(&mut rom)?;

    let hz = cli.hz.max(1);
    let sleeper = spin_sleep::SpinSleeper::default();
    let step_period = Duration::from_secs(1) / hz;
    // terminal key events have no release half, so hold each press in the
    // latch for a short window instead
    let hold_steps = (hz / 10).max(1);
    let mut held_for = 0;

    loop {
        held_for += 1;
        if held_for >= hold_steps {
            input.flush_keys()?;
            chip8.clear_keys();
            held_for = 0;
        }
        for &key in input.peek_keys()? {
            chip8.set_key(key, true);
        }
        if input.quit_requested() {
            break;
        }

        if let Err(e) = chip8.step() {
            error!("halted: {}", e);
            break;
        }

        if chip8.take_redraw() {
            display.draw(chip8.frame())?;
        }

        if chip8.sound_timer() > 0 {
            sound.start()?;
        } else {
            sound.stop()?;
        }

        sleeper.sleep(step_period);
    }
    sound.stop()?;

    // shove some junk on stdout to stop the cli messing up the last frame
    for _ in 0..4 {
        println!();
    }
    Ok(())
}
