//! A byte-stream transport abstraction for the console
//!
//! The console never talks to hardware directly. It is bound to any object
//! that can report how many bytes are waiting, hand over one byte at a time,
//! and accept outgoing bytes for echo, prompts and diagnostics. A UART
//! driver, a USB-CDC endpoint or a plain TCP socket can all host a console
//! by implementing these traits.
//!
//! Reads are strictly non-blocking: the console only calls
//! [`Read::read_byte`] after [`Read::available`] reported at least one
//! pending byte.

#![allow(missing_docs)]
#![deny(unsafe_code)]

// Core synchronous traits
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Number of bytes currently available to read, without blocking
    fn available(&self) -> usize;
    /// Read one byte; only called when `available()` reported at least one
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the stream, returning how many bytes were accepted
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// A bidirectional character stream the console can be bound to
pub trait Transport: Read + Write {}
