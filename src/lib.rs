//! chirp8: a CHIP-8 interpreter.
//!
//! ## Design
//!
//! * one owned [`interpreter::Chip8`] value holds every piece of machine
//!   state: RAM, registers, call stack, timers, frame buffer, key latch
//! * one step = one instruction, and the timers count down once per step;
//!   wall-clock speed follows whatever cadence the driver picks
//! * instructions decode into a closed enum first, execute second, so each
//!   of the 35 ops can be tested on its own
//! * abstract the display, input and sound behind traits so alternatives
//!   to the in-terminal versions can be plugged in
//! * errors come back to the embedder rather than killing the process:
//!   bad opcodes, stack misuse and oversized programs are all values
//!
//! The library owns none of the pacing, rendering or key translation; see
//! the binary for a driver that wires those up in a terminal.

pub mod display;
pub mod error;
pub mod input;
pub mod instruction;
pub mod interpreter;
pub mod memory;
pub mod sound;
