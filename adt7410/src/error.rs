use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Transport failure (no device, NACK, bus timeout)
    Bus(E),
    /// The ID register did not identify an ADT7410
    UnexpectedId(u8),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::UnexpectedId(id) => write!(f, "unexpected device id 0x{:02x}", id),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
