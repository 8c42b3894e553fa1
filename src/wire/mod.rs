//! Binary wire encoding used to transfer status responses between processes.
//!
//! Every model implements [`Writeable`] and [`Readable`].
//! Decoding is the exact inverse of encoding: fields are read back in the same order
//! and with the same width they are written with.
//! Any error while decoding aborts the whole operation.
use std::io::Read;
use std::io::Write;

use crate::errors::WireError;

mod codec;
mod stream;

#[cfg(test)]
mod tests;

pub use self::codec::read_vec;
pub use self::codec::write_slice;
pub use self::stream::WireReader;
pub use self::stream::WireWriter;

/// Encode a value onto the binary stream.
pub trait Writeable {
    fn write_to<W: Write>(&self, out: &mut WireWriter<W>) -> Result<(), WireError>;
}

/// Decode a value from the binary stream.
pub trait Readable: Sized {
    fn read_from<R: Read>(input: &mut WireReader<R>) -> Result<Self, WireError>;
}
