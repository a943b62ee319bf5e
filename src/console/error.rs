//! Error types for command registration.
//!
//! Registration is the only console operation that reports failure as a
//! value. Everything that happens while polling (overlong lines, unknown
//! commands, missing handlers) is surfaced as a human-readable diagnostic
//! written to the transport and never propagates to the caller.

/// Why a command could not be registered.
///
/// Both conditions are recoverable: the table is left exactly as it was
/// and the console keeps running with the commands it already has.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The command table already holds as many entries as its capacity.
    TableFull,
    /// The trigger name was empty.
    EmptyName,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::TableFull => defmt::write!(f, "TableFull"),
            Error::EmptyName => defmt::write!(f, "EmptyName"),
        }
    }
}
