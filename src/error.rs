use std::io;
use thiserror::Error;

/// Errors surfaced by the loader and the step engine. Every variant is a
/// stop condition for the step that raised it; whether the whole run halts
/// is the caller's call.
#[derive(Debug, Error)]
pub enum Chip8Error {
    /// program image does not fit between 0x200 and the top of RAM
    #[error("program is {len} bytes but only {max} fit above 0x200")]
    ProgramTooLarge { len: usize, max: usize },

    /// the program source could not be read; raised by whatever supplies
    /// the bytes, not manufactured here
    #[error("program source unavailable: {0}")]
    Io(#[from] io::Error),

    /// fetched bit pattern matches none of the 35 instructions
    #[error("unknown opcode {opcode:#06x} at {pc:#05x}")]
    UnknownOpcode { opcode: u16, pc: u16 },

    /// seventeenth nested call
    #[error("call stack overflow at {pc:#05x}")]
    StackOverflow { pc: u16 },

    /// return with nothing on the call stack
    #[error("return with empty call stack at {pc:#05x}")]
    StackUnderflow { pc: u16 },
}
