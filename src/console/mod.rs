//! Command console interface for embedded systems.
//!
//! The console couples two fixed-capacity components: a command table
//! ([`registry`]) mapping trigger names to handlers, and a line processor
//! ([`line`]) that assembles terminator-delimited lines byte by byte and
//! splits them into arguments in place. The owning application calls
//! [`Console::poll`] on a fixed or throttled cadence; each eligible poll
//! drains the bytes the transport has queued, and when a line completes it
//! is tokenized, optionally echoed, dispatched and discarded.
//!
//! Everything that can go wrong at runtime (overlong lines, unknown
//! commands, triggers without handlers, a full command table) is reported
//! as a human-readable diagnostic over the transport and the console keeps
//! going; `poll()` itself never returns an error.
//!
//! # Usage
//!
//! ```rust,no_run
//! use libconsole::console::{Config, Console};
//! # use libconsole::transport::{Read, Transport, Write};
//! # struct Uart;
//! # impl Read for Uart {
//! #     type Error = ();
//! #     fn available(&self) -> usize { 0 }
//! #     fn read_byte(&mut self) -> Result<u8, Self::Error> { Err(()) }
//! # }
//! # impl Write for Uart {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Transport for Uart {}
//! # fn millis() -> u64 { 0 }
//!
//! let uart = Uart;
//!
//! let mut reboot = || { /* pend a reset flag */ };
//! let mut console: Console<_, _> = Console::with_config(
//!     uart,
//!     || millis(),
//!     Config {
//!         echo_chars: true,
//!         prompt_when_ready: true,
//!         ..Config::default()
//!     },
//! );
//! console
//!     .register("reboot", Some(&mut reboot), Some("Restart the device"))
//!     .unwrap();
//!
//! loop {
//!     console.poll();
//!     // ... the rest of the superloop
//! }
//! ```

pub mod error;
pub mod line;
mod registry;

#[cfg(test)]
mod tests;

pub use registry::Handler;

use crate::time::Monotonic;
use crate::transport::{Transport, Write};

use error::Error;
use line::{Event, LineAssembler, LineState};
use registry::Registry;

/// Console behavior options, fixed at construction.
///
/// Capacities (command table size, line length, argument count) are const
/// generic parameters of [`Console`] instead; everything here is plain
/// data.
#[derive(Debug, Clone)]
pub struct Config<'a> {
    /// Primary byte marking the end of a line.
    pub terminator1: u8,
    /// Alternate line-ending byte, so both `\n` and `\r` submit.
    pub terminator2: u8,
    /// Byte separating arguments within a line.
    pub delimiter: u8,
    /// Minimum milliseconds between two polls that actually read.
    pub scan_period_ms: u64,
    /// Text shown to invite input and to lead the full-line echo.
    pub prompt: &'a str,
    /// Echo each completed line back, reconstructed from its arguments.
    pub echo_line: bool,
    /// Echo every accepted byte as it arrives (interactive terminals).
    pub echo_chars: bool,
    /// Re-display the prompt whenever the console becomes ready for a new
    /// line (terminal mode rather than line-editor mode).
    pub prompt_when_ready: bool,
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self {
            terminator1: b'\n',
            terminator2: b'\r',
            delimiter: b' ',
            scan_period_ms: 250,
            prompt: "\n>> ",
            echo_line: true,
            echo_chars: false,
            prompt_when_ready: false,
        }
    }
}

/// A polled command console bound to a transport and a clock.
///
/// `CMDS` is the command-table capacity, `LINE` the line-buffer capacity
/// in bytes (including the terminator slot) and `ARGS` the maximum number
/// of arguments per line. The defaults match a small device console; size
/// them to taste:
///
/// ```rust,ignore
/// let mut console: Console<_, _, 32, 128, 12> = Console::new(uart, clock);
/// ```
pub struct Console<
    'a,
    T,
    M,
    const CMDS: usize = 10,
    const LINE: usize = 50,
    const ARGS: usize = 5,
> where
    T: Transport,
    M: Monotonic,
{
    transport: T,
    clock: M,
    config: Config<'a>,
    registry: Registry<'a, CMDS>,
    line: LineAssembler<LINE, ARGS>,
    last_scan_ms: u64,
}

impl<'a, T, M, const CMDS: usize, const LINE: usize, const ARGS: usize>
    Console<'a, T, M, CMDS, LINE, ARGS>
where
    T: Transport,
    M: Monotonic,
{
    /// Create a console with the default [`Config`].
    pub fn new(transport: T, clock: M) -> Self {
        Self::with_config(transport, clock, Config::default())
    }

    /// Create a console with an explicit [`Config`].
    pub fn with_config(transport: T, clock: M, config: Config<'a>) -> Self {
        Self {
            transport,
            clock,
            config,
            registry: Registry::new(),
            line: LineAssembler::new(),
            last_scan_ms: 0,
        }
    }

    /// Register a command.
    ///
    /// `handler` may be `None`: the trigger is then recognized but invoking
    /// it reports that no handler is bound, which is useful for reserving a
    /// name early in bring-up. Registering beyond the `CMDS` capacity
    /// leaves the table unchanged, emits a diagnostic over the transport
    /// and returns [`Error::TableFull`]. Duplicate names are legal; every
    /// matching entry fires on dispatch.
    pub fn register(
        &mut self,
        name: &'a str,
        handler: Option<&'a mut dyn Handler>,
        help: Option<&'a str>,
    ) -> Result<(), Error> {
        match self.registry.register(name, handler, help) {
            Err(Error::TableFull) => {
                emit(&mut self.transport, "console: cannot register \"");
                emit(&mut self.transport, name);
                emit(
                    &mut self.transport,
                    "\": the command table is full. Increase the CMDS capacity.\r\n",
                );
                Err(Error::TableFull)
            }
            other => other,
        }
    }

    /// Number of commands registered so far.
    pub fn command_count(&self) -> usize {
        self.registry.len()
    }

    /// Current state of the line under assembly.
    pub fn line_state(&self) -> LineState {
        self.line.state()
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// The configuration this console was built with.
    pub fn config(&self) -> &Config<'a> {
        &self.config
    }

    /// Give back the transport and clock, consuming the console.
    pub fn release(self) -> (T, M) {
        (self.transport, self.clock)
    }

    /// Drain available input and dispatch at most one completed line.
    ///
    /// Intended to be called repeatedly from the application superloop.
    /// Returns immediately when less than `scan_period_ms` has elapsed
    /// since the previous eligible poll finished; queued bytes simply wait
    /// in the transport. Partial-line state carries over between calls, so
    /// a line typed one byte per poll dispatches exactly like one that
    /// arrived whole.
    ///
    /// All outcomes are visible only as transport output; this method
    /// never reports failure. Handlers run synchronously within this call,
    /// so a slow handler delays the next poll.
    pub fn poll(&mut self) {
        let now = self.clock.now_ms();
        if now.wrapping_sub(self.last_scan_ms) < self.config.scan_period_ms {
            return;
        }

        while self.transport.available() > 0 && self.line.state() != LineState::Ready {
            let byte = match self.transport.read_byte() {
                Ok(byte) => byte,
                Err(_) => break,
            };

            let event = self
                .line
                .accept(byte, self.config.terminator1, self.config.terminator2);

            // Terminators are echoed like content; erased and ignored
            // bytes are not.
            if self.config.echo_chars
                && matches!(event, Event::Stored | Event::Ready | Event::Empty)
            {
                emit_bytes(&mut self.transport, &[byte]);
            }

            match event {
                Event::Stored | Event::Ignored | Event::Ready => {}
                Event::Erased => {
                    if self.config.echo_chars {
                        emit(&mut self.transport, "\x08 \x08");
                    }
                }
                Event::Empty => {
                    self.clean_slate();
                    break;
                }
                Event::Overflow => {
                    emit(
                        &mut self.transport,
                        "\r\nconsole: line exceeded the maximum line length; input up to the next terminator was discarded\r\n",
                    );
                    self.discard_to_terminator();
                    self.clean_slate();
                    break;
                }
            }
        }

        if self.line.state() == LineState::Ready {
            self.line.tokenize(self.config.delimiter);
            self.echo_line();
            self.dispatch();
            self.clean_slate();
        }

        self.last_scan_ms = self.clock.now_ms();
    }

    /// Read and drop transport bytes until a terminator goes by or nothing
    /// is left, so the tail of an overlong line cannot leak into the next.
    fn discard_to_terminator(&mut self) {
        while self.transport.available() > 0 {
            match self.transport.read_byte() {
                Ok(byte)
                    if byte == self.config.terminator1 || byte == self.config.terminator2 =>
                {
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    }

    /// Unconditional reset between lines: buffer emptied, argument views
    /// invalidated, prompt re-shown when configured.
    fn clean_slate(&mut self) {
        self.line.reset();
        if self.config.prompt_when_ready {
            let prompt = self.config.prompt;
            emit(&mut self.transport, prompt);
        }
    }

    /// Echo a completed line, rebuilt from its tokenized arguments so the
    /// echoed form reflects the actual split. Without full-line echo a bare
    /// line break still goes out to move the cursor past the input.
    fn echo_line(&mut self) {
        let Self {
            transport,
            line,
            config,
            ..
        } = self;

        if config.echo_line {
            emit(transport, config.prompt);
            for index in 0..line.arg_count() {
                if index > 0 {
                    emit_bytes(transport, &[config.delimiter]);
                }
                if let Some(arg) = line.arg_bytes(index) {
                    emit_bytes(transport, arg);
                }
            }
        }
        emit(transport, "\r\n");
    }

    /// Route a tokenized line: built-in `help` first, then a linear scan
    /// of the command table. Every entry whose name matches fires, in
    /// registration order.
    fn dispatch(&mut self) {
        let Self {
            transport,
            line,
            registry,
            ..
        } = self;

        let Some(first) = line.arg_bytes(0) else {
            return;
        };

        let mut found = false;

        if first == b"help" && line.arg_count() > 1 {
            let target = line.arg_bytes(1).unwrap_or(b"");
            for entry in registry.iter() {
                if entry.name.as_bytes() == target {
                    found = true;
                    match entry.help {
                        Some(help) => {
                            emit(transport, help);
                            emit(transport, "\r\n");
                        }
                        None => {
                            emit(transport, "console: no help text registered for \"");
                            emit(transport, entry.name);
                            emit(transport, "\"\r\n");
                        }
                    }
                }
            }
            if !found {
                emit(transport, "console: no command named \"");
                emit_bytes(transport, target);
                emit(transport, "\" to show help for\r\n");
            }
        } else {
            for entry in registry.iter_mut() {
                if entry.name.as_bytes() == first {
                    found = true;
                    match entry.handler.as_mut() {
                        Some(handler) => handler.invoke(),
                        None => {
                            emit(transport, "console: trigger \"");
                            emit(transport, entry.name);
                            emit(transport, "\" is registered without a handler\r\n");
                        }
                    }
                }
            }
        }

        if !found {
            if first != b"help" {
                emit(transport, "console: command \"");
                emit_bytes(transport, first);
                emit(transport, "\" not recognized\r\n");
            }
            emit(
                transport,
                "Type 'help <command>' for help on a specific command.\r\n",
            );
            emit(transport, "Available commands:\r\n");
            for entry in registry.iter() {
                emit(transport, " - ");
                emit(transport, entry.name);
                emit(transport, "\r\n");
            }
        }
    }
}

/// Best-effort write of UTF-8 text; diagnostics must never fail a poll.
fn emit<W: Write>(writer: &mut W, text: &str) {
    emit_bytes(writer, text.as_bytes());
}

/// Best-effort write; short writes are retried, errors are swallowed.
fn emit_bytes<W: Write>(writer: &mut W, mut bytes: &[u8]) {
    while !bytes.is_empty() {
        match writer.write(bytes) {
            Ok(0) | Err(_) => return,
            Ok(written) => bytes = &bytes[written..],
        }
    }
    let _ = writer.flush();
}
