use beep::beep;
use std::error::Error;

/// Beep seam. The interpreter owns the sound timer; the driver turns the
/// tone on while it is nonzero and off again when it hits zero.
pub trait Sound {
    fn start(&mut self) -> Result<(), Box<dyn Error>>;
    fn stop(&mut self) -> Result<(), Box<dyn Error>>;
}

const BEEP_PITCH: u16 = 440; // A4

/// square wave through the pc speaker
pub struct SimpleBeep {
    sounding: bool,
}

impl SimpleBeep {
    pub fn new() -> Self {
        SimpleBeep { sounding: false }
    }
}

impl Sound for SimpleBeep {
    fn start(&mut self) -> Result<(), Box<dyn Error>> {
        // the driver calls this every step the timer is up; only poke the
        // speaker on the transition
        if !self.sounding {
            beep(BEEP_PITCH)?;
            self.sounding = true;
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        if self.sounding {
            beep(0)?;
            self.sounding = false;
        }
        Ok(())
    }
}

/// silent stand-in for tests and --mute
pub struct Mute;

impl Sound for Mute {
    fn start(&mut self) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}
