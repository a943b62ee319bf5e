//! The command table: a fixed-capacity, append-only registry mapping a
//! trigger name to a handler and an optional help string.

use heapless::Vec;

use super::error::Error;

/// A command callback.
///
/// Handlers take no arguments and return nothing; a command that needs to
/// report something writes through whatever it captured at registration
/// time. The blanket impl lets closures, bound methods and plain functions
/// all register without wrapping:
///
/// ```rust
/// use libconsole::console::Handler;
///
/// let mut count = 0u32;
/// let mut bump = || count += 1;
/// (&mut bump as &mut dyn Handler).invoke();
/// assert_eq!(count, 1);
/// ```
pub trait Handler {
    /// Run the command.
    fn invoke(&mut self);
}

impl<F: FnMut()> Handler for F {
    fn invoke(&mut self) {
        self()
    }
}

/// One registered command.
///
/// The handler is borrowed, not owned; the registering caller keeps it
/// alive for as long as the console does.
pub(crate) struct Entry<'a> {
    pub(crate) name: &'a str,
    pub(crate) handler: Option<&'a mut dyn Handler>,
    pub(crate) help: Option<&'a str>,
}

impl core::fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("has_handler", &self.handler.is_some())
            .field("help", &self.help)
            .finish()
    }
}

/// Fixed-capacity command table, insertion-ordered.
#[derive(Debug)]
pub(crate) struct Registry<'a, const CMDS: usize> {
    entries: Vec<Entry<'a>, CMDS>,
}

impl<'a, const CMDS: usize> Registry<'a, CMDS> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry. Rejection leaves the table untouched.
    pub(crate) fn register(
        &mut self,
        name: &'a str,
        handler: Option<&'a mut dyn Handler>,
        help: Option<&'a str>,
    ) -> Result<(), Error> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        self.entries
            .push(Entry {
                name,
                handler,
                help,
            })
            .map_err(|_| Error::TableFull)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Entry<'a>> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entry<'a>> {
        self.entries.iter_mut()
    }
}
