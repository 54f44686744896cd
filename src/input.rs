use crossterm::event::{poll, read, Event, KeyCode};
use crossterm::terminal;
use log::warn;
use std::io;
use std::time::Duration;

/// Map a terminal character onto the 4x4 pad using the conventional
/// left-hand qwerty layout, where the top row 1-2-3-4 stands in for the
/// pad's 1-2-3-C column.
fn map_key(key: char) -> Option<u8> {
    let mapped = match key {
        'x' => 0x0,
        '1' => 0x1,
        '2' => 0x2,
        '3' => 0x3,
        'q' => 0x4,
        'w' => 0x5,
        'e' => 0x6,
        'a' => 0x7,
        's' => 0x8,
        'd' => 0x9,
        'z' => 0xa,
        'c' => 0xb,
        '4' => 0xc,
        'r' => 0xd,
        'f' => 0xe,
        'v' => 0xf,
        _ => return None,
    };
    Some(mapped)
}

/// Reads keypresses. The driver copies whatever this yields into the
/// interpreter's key latch between steps; the interpreter itself never
/// talks to the terminal.
pub trait Input {
    /// all the mapped keys pressed since the last flush, without
    /// draining them from the buffer
    fn peek_keys(&mut self) -> Result<&[u8], io::Error>;

    /// drain the buffer
    fn flush_keys(&mut self) -> Result<(), io::Error>;

    /// has the user asked to leave the emulator?
    fn quit_requested(&self) -> bool {
        false
    }
}

/// simple implementation of Input, using terminal events via crossterm
pub struct StdinInput {
    buffer: Vec<u8>,
    quit: bool,
}

impl StdinInput {
    pub fn new() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(StdinInput {
            buffer: Vec::new(),
            quit: false,
        })
    }

    fn drain_events(&mut self) -> Result<(), io::Error> {
        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(evt) => match evt.code {
                    KeyCode::Char(key) => match map_key(key) {
                        Some(mapped) => self.buffer.push(mapped),
                        None => warn!("no pad key bound to {:?}", key),
                    },
                    KeyCode::Esc => self.quit = true,
                    _ => {}
                },
                _ => {}
            }
        }
        Ok(())
    }
}

impl Drop for StdinInput {
    fn drop(&mut self) {
        terminal::disable_raw_mode().ok();
    }
}

impl Input for StdinInput {
    fn peek_keys(&mut self) -> Result<&[u8], io::Error> {
        self.drain_events()?;
        Ok(self.buffer.as_slice())
    }

    fn flush_keys(&mut self) -> Result<(), io::Error> {
        self.drain_events()?;
        self.buffer.clear();
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// dummy Input implementation for testing
pub struct DummyInput {
    bytes: Vec<u8>,
}

impl DummyInput {
    pub fn new(keys: &[u8]) -> Self {
        DummyInput {
            bytes: Vec::from(keys),
        }
    }
}

impl Input for DummyInput {
    fn peek_keys(&mut self) -> Result<&[u8], io::Error> {
        Ok(self.bytes.as_slice())
    }

    fn flush_keys(&mut self) -> Result<(), io::Error> {
        self.bytes.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pad_key_is_mapped() {
        let mut seen: Vec<u8> = "x123qweasdzc4rfv"
            .chars()
            .filter_map(map_key)
            .collect();
        seen.sort_unstable();
        let want: Vec<u8> = (0x0..=0xf).collect();
        assert_eq!(seen, want);
    }

    #[test]
    fn test_unbound_characters_map_to_none() {
        assert_eq!(map_key('5'), None);
        assert_eq!(map_key('t'), None);
        assert_eq!(map_key(' '), None);
    }

    #[test]
    fn test_dummy_input_peek_then_flush() -> Result<(), io::Error> {
        let mut input = DummyInput::new(&[0x1, 0xa]);
        assert_eq!(input.peek_keys()?, &[0x1, 0xa]);
        assert_eq!(input.peek_keys()?, &[0x1, 0xa]);
        input.flush_keys()?;
        assert!(input.peek_keys()?.is_empty());
        Ok(())
    }
}
