//! Storage of the running program: an arena of cells, addressed by `Place` handles.

use crate::values::{CellId, Place, Rvalue};
use tracing::trace;

/// Every variable, parameter and temporary with storage gets its own cell. Cells are never
/// freed while the program runs, so places never dangle.
pub struct Store {
    cells: Vec<Rvalue>,
}

impl Store {
    pub fn new() -> Store {
        Store { cells: Vec::new() }
    }

    /// Allocates a new cell holding `value`.
    pub fn allocate(&mut self, value: Rvalue) -> CellId {
        let cell = CellId(self.cells.len());
        trace!(cell = cell.0, %value, "allocated cell");
        self.cells.push(value);
        cell
    }

    /// Reads a copy of the contents of `place`.
    pub fn read(&self, place: &Place) -> Rvalue {
        let mut value = &self.cells[place.cell.0];
        for index in &place.path {
            value = value.child(*index);
        }
        value.clone()
    }

    /// Replaces the contents of `place`, leaving all other storage untouched.
    pub fn write(&mut self, place: &Place, new_value: Rvalue) {
        trace!(?place, value = %new_value, "write");
        let mut value = &mut self.cells[place.cell.0];
        for index in &place.path {
            value = value.child_mut(*index);
        }
        *value = new_value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_to_children_are_isolated() {
        let mut store = Store::new();
        let cell = store.allocate(Rvalue::Array(vec![Rvalue::Int(1), Rvalue::Int(1)]));
        let other = store.allocate(Rvalue::Int(7));

        store.write(&Place::root(cell).child(0), Rvalue::Int(3));

        assert_eq!(
            store.read(&Place::root(cell)),
            Rvalue::Array(vec![Rvalue::Int(3), Rvalue::Int(1)])
        );
        assert_eq!(store.read(&Place::root(other)), Rvalue::Int(7));
    }

    #[test]
    fn reads_are_copies() {
        let mut store = Store::new();
        let cell = store.allocate(Rvalue::Struct(vec![Rvalue::Int(1), Rvalue::Bool(true)]));

        let copy = store.read(&Place::root(cell));
        store.write(&Place::root(cell).child(1), Rvalue::Bool(false));

        assert_eq!(copy, Rvalue::Struct(vec![Rvalue::Int(1), Rvalue::Bool(true)]));
    }
}
