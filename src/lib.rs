//! # libconsole - embedded command console
//!
//! A line-oriented command interpreter for resource-constrained devices that
//! talk over a character stream (UART, USB-CDC, RTT, a TCP socket during
//! development). The console accumulates incoming bytes into a fixed-capacity
//! line buffer, splits completed lines into a command name and arguments,
//! matches the name against a fixed table of registered handlers, and invokes
//! the matching handler. This library is designed for embedded systems and
//! supports `no_std` environments.
//!
//! ## Features
//!
//! - **Fixed memory budgets**: every buffer and table is sized by const
//!   generics at construction; nothing grows at runtime
//! - **Non-blocking**: a single [`poll`](console::Console::poll) entry point
//!   drains whatever bytes the transport has and returns; a line may be
//!   assembled across many polls
//! - **Line editing**: backspace/delete handling with optional terminal echo
//! - **Built-in help**: `help <command>` prints registered help text
//! - **Graceful failure**: overlong lines, unknown commands, full command
//!   tables and missing handlers are all reported over the transport and
//!   never corrupt state
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libconsole = "0.1.0"
//! ```
//!
//! Bind the console to a transport and a monotonic clock, register commands,
//! then call `poll()` from the superloop:
//!
//! ```rust
//! use libconsole::console::Console;
//! use libconsole::transport::{Read, Transport, Write};
//! use std::cell::Cell;
//! use std::collections::VecDeque;
//!
//! struct Loopback {
//!     rx: VecDeque<u8>,
//!     tx: Vec<u8>,
//! }
//!
//! impl Read for Loopback {
//!     type Error = ();
//!     fn available(&self) -> usize {
//!         self.rx.len()
//!     }
//!     fn read_byte(&mut self) -> Result<u8, Self::Error> {
//!         self.rx.pop_front().ok_or(())
//!     }
//! }
//!
//! impl Write for Loopback {
//!     type Error = ();
//!     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
//!         self.tx.extend_from_slice(buf);
//!         Ok(buf.len())
//!     }
//!     fn flush(&mut self) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! impl Transport for Loopback {}
//!
//! let port = Loopback {
//!     rx: b"blink\n".iter().copied().collect(),
//!     tx: Vec::new(),
//! };
//! let mut now = 0u64;
//! let clock = move || {
//!     now += 1_000;
//!     now
//! };
//!
//! let blinks = Cell::new(0u32);
//! let mut blink = || blinks.set(blinks.get() + 1);
//!
//! let mut console: Console<_, _, 8, 64, 8> = Console::new(port, clock);
//! console
//!     .register("blink", Some(&mut blink), Some("Toggle the status LED"))
//!     .unwrap();
//!
//! console.poll();
//! assert_eq!(blinks.get(), 1);
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support, including a ready-made
//!   [`StdClock`](time::StdClock) (default: disabled)
//! - `defmt`: Enable defmt formatting of public enums for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Byte-stream transport abstraction the console reads from and writes to.
///
/// Contains the [`Read`](transport::Read), [`Write`](transport::Write) and
/// [`Transport`](transport::Transport) traits a UART driver (or any other
/// character device) implements to host a console.
pub mod transport;

/// Monotonic time abstraction driving the poll throttle.
pub mod time;

/// The command console: configuration, command registration, line assembly
/// and dispatch.
pub mod console;

/// Re-exports of the types most applications need.
pub mod prelude {
    pub use crate::console::{Config, Console, Handler, error::Error};
    pub use crate::time::Monotonic;
    pub use crate::transport::{Read, Transport, Write};
}
