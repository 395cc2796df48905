use std::fmt;
use std::io;

/// Errors that can surface from bridge setup.
///
/// Worker loops never return errors; they log their I/O failures locally
/// and keep running. Everything in here is a startup failure and fatal to
/// the process.
#[derive(Debug)]
pub enum BridgeError {
    /// The TUN device could not be allocated or configured.
    TunSetup(tun::Error),
    /// The radio network layer failed to come up.
    RadioSetup(String),
    /// The interactive startup selection was not one of the known choices.
    InvalidAddressChoice(String),
    /// I/O failure outside the worker loops.
    Io(io::Error),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::TunSetup(err) => {
                write!(f, "error allocating tun interface: {}", err)
            }
            BridgeError::RadioSetup(reason) => {
                write!(f, "error setting up radio: {}", reason)
            }
            BridgeError::InvalidAddressChoice(input) => {
                write!(f, "wrong address choice <{}>, expected 0-3", input)
            }
            BridgeError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BridgeError::TunSetup(err) => Some(err),
            BridgeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<tun::Error> for BridgeError {
    fn from(err: tun::Error) -> Self {
        BridgeError::TunSetup(err)
    }
}

impl From<io::Error> for BridgeError {
    fn from(err: io::Error) -> Self {
        BridgeError::Io(err)
    }
}
