//! Debug backend that just dumps the classified program to stdout.

use super::Backend;
use crate::program::Program;

pub struct DebugBackend;

impl Backend for DebugBackend {
    fn run(&self, _: &str, _: &str, program: Program) -> Result<(), ()> {
        print!("{}", program);
        Ok(())
    }
}
