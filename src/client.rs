// Client code: knows only the `Creator` capability.

use std::io::{self, Write};

use crate::creator::Creator;

pub const CLIENT_MESSAGE: &str = "Client: I'm not aware of the creator's class, but it still works.";

/// Runs the creator's business logic and writes the result to `out`.
///
/// Any creator can be passed in, as long as the client keeps talking to it
/// through the base trait.
pub fn client_code<W: Write + ?Sized>(creator: &dyn Creator, out: &mut W) -> io::Result<()> {
    write!(out, "{CLIENT_MESSAGE}\n{}", creator.some_operation())
}
