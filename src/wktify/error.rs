use std::convert::From;
use std::io;

#[derive(Debug)]
pub enum Error {
    IOError,
    JSONParseError,
    InvalidJSONType,
    // The payload is read through the derived Debug impl, which dead-code
    // analysis intentionally ignores.
    MissingCoordinate(#[allow(dead_code)] &'static str),
}

impl From<io::Error> for Error {
    fn from(_: io::Error) -> Self {
        Error::IOError
    }
}

impl From<serde_json::Error> for Error {
    fn from(_: serde_json::Error) -> Self {
        Error::JSONParseError
    }
}
