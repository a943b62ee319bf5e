//! Incremental line assembly and tokenization.
//!
//! [`LineAssembler`] is the stateful core of the console: it accepts input
//! one byte at a time, across as many polls as the bytes take to arrive,
//! and turns each completed line into a set of argument views without
//! copying or allocating. The owning console feeds it classified bytes and
//! reacts to the returned [`Event`]; the assembler itself never touches the
//! transport.
//!
//! `LINE` is the buffer capacity in bytes and counts the slot the line
//! terminator would have occupied, so a completable line holds at most
//! `LINE - 1` content bytes. `ARGS` bounds how many arguments a line can
//! tokenize into; anything beyond that is silently dropped.

use heapless::Vec;

/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII delete character (0x7F).
pub const ASCII_DEL: u8 = 0x7F;
/// ASCII NUL (0x00), always treated as a line terminator.
pub const ASCII_NUL: u8 = 0x00;

/// Where the assembler is between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// Buffer empty, ready for new input.
    Idle,
    /// Bytes are being appended to the current line.
    Accumulating,
    /// A terminator arrived with content present; the line awaits
    /// tokenization and dispatch.
    Ready,
}

#[cfg(feature = "defmt")]
impl defmt::Format for LineState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            LineState::Idle => defmt::write!(f, "Idle"),
            LineState::Accumulating => defmt::write!(f, "Accumulating"),
            LineState::Ready => defmt::write!(f, "Ready"),
        }
    }
}

/// What one accepted byte did to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Byte appended to the buffer.
    Stored,
    /// Backspace erased the most recently appended byte.
    Erased,
    /// Byte had no effect (backspace on an empty buffer).
    Ignored,
    /// Terminator arrived with content present; the line is complete.
    Ready,
    /// Terminator arrived with no content; nothing to dispatch.
    Empty,
    /// Appending this byte would exceed the buffer capacity.
    Overflow,
}

/// One argument's position inside the line buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Span {
    start: usize,
    len: usize,
}

/// Fixed-capacity line buffer, write cursor and argument views.
///
/// Argument views are index spans into the buffer, rebuilt by
/// [`tokenize`](Self::tokenize) each time a line completes and invalidated
/// by [`reset`](Self::reset); after a reset the accessors simply return
/// `None`.
#[derive(Debug)]
pub struct LineAssembler<const LINE: usize, const ARGS: usize> {
    buf: [u8; LINE],
    len: usize,
    state: LineState,
    args: Vec<Span, ARGS>,
}

impl<const LINE: usize, const ARGS: usize> LineAssembler<LINE, ARGS> {
    /// Create an empty assembler in [`LineState::Idle`].
    pub fn new() -> Self {
        Self {
            buf: [0; LINE],
            len: 0,
            state: LineState::Idle,
            args: Vec::new(),
        }
    }

    /// Current state of the line under assembly.
    pub fn state(&self) -> LineState {
        self.state
    }

    /// Bytes accumulated so far in the current line.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the current line holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Classify and absorb one input byte.
    ///
    /// Classification order matters and is fixed: capacity check first,
    /// then backspace/delete, then terminators (`term1`, `term2` or NUL),
    /// then plain content. A backspace never terminates a line, and a
    /// terminator on an empty buffer yields [`Event::Empty`] rather than a
    /// dispatchable line.
    ///
    /// Must not be called while [`Ready`](LineState::Ready); the caller
    /// tokenizes and resets first.
    pub fn accept(&mut self, byte: u8, term1: u8, term2: u8) -> Event {
        debug_assert_ne!(self.state, LineState::Ready);

        if self.len >= LINE {
            return Event::Overflow;
        }

        if byte == ASCII_BACKSPACE || byte == ASCII_DEL {
            if self.len == 0 {
                return Event::Ignored;
            }
            self.len -= 1;
            if self.len == 0 {
                self.state = LineState::Idle;
            }
            return Event::Erased;
        }

        if byte == term1 || byte == term2 || byte == ASCII_NUL {
            if self.len == 0 {
                self.state = LineState::Idle;
                return Event::Empty;
            }
            self.state = LineState::Ready;
            return Event::Ready;
        }

        self.buf[self.len] = byte;
        self.len += 1;
        self.state = LineState::Accumulating;
        Event::Stored
    }

    /// Split the completed line on `delimiter`, rebuilding the argument
    /// views.
    ///
    /// Consecutive, leading and trailing delimiters produce empty
    /// arguments; positions stay predictable. Arguments past the `ARGS`
    /// capacity are dropped without error.
    pub fn tokenize(&mut self, delimiter: u8) {
        self.args.clear();
        let mut start = 0;
        for i in 0..=self.len {
            if i == self.len || self.buf[i] == delimiter {
                if self.args.push(Span {
                    start,
                    len: i - start,
                }).is_err() {
                    break;
                }
                start = i + 1;
            }
        }
    }

    /// Number of arguments the last [`tokenize`](Self::tokenize) produced.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Raw bytes of argument `index`, or `None` past the end.
    pub fn arg_bytes(&self, index: usize) -> Option<&[u8]> {
        let span = self.args.get(index)?;
        Some(&self.buf[span.start..span.start + span.len])
    }

    /// Argument `index` as UTF-8 text, or `None` past the end or for
    /// non-UTF-8 input.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.arg_bytes(index)
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
    }

    /// Return to [`LineState::Idle`]: cursor to zero, argument views
    /// cleared. Safe to call in any state, any number of times.
    pub fn reset(&mut self) {
        self.len = 0;
        self.state = LineState::Idle;
        self.args.clear();
    }
}

impl<const LINE: usize, const ARGS: usize> Default for LineAssembler<LINE, ARGS> {
    fn default() -> Self {
        Self::new()
    }
}
