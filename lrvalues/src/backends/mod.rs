//! Backends consume classified programs. A backend is the part of the pipeline that a program
//! is sent to after every expression in it has been classified and checked.

pub mod debug;

use crate::program::Program;

/// Common backend interface.
pub trait Backend {
    /// Process the classified program. Backends should report any user-caused errors to
    /// the user, and panic if any internal error occurs. The returned `Result` indicates
    /// whether any user-caused errors occurred and were reported.
    fn run(&self, file_name: &str, source: &str, program: Program) -> Result<(), ()>;
}
