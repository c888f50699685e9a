use cubemath::{Axis, Vector3};

use crate::{Face, PerFace};

/// One sub-cube on the shell of the puzzle.
///
/// The basis records where the cell's solved-state X, Y, and Z directions
/// point now. Rotating a cell rotates its position and its basis together.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pos: Vector3,
    basis: [Vector3; 3],
}

impl Cell {
    /// Identity orientation.
    pub const IDENTITY_BASIS: [Vector3; 3] = [
        Vector3::new(1, 0, 0),
        Vector3::new(0, 1, 0),
        Vector3::new(0, 0, 1),
    ];

    /// Constructs a new cell at `pos` in the solved orientation.
    pub fn new(pos: Vector3) -> Self {
        Self {
            pos,
            basis: Self::IDENTITY_BASIS,
        }
    }

    /// Returns the lattice position of the cell.
    pub fn pos(&self) -> Vector3 {
        self.pos
    }
    /// Returns the current images of the solved-state X, Y, and Z directions.
    pub fn basis(&self) -> [Vector3; 3] {
        self.basis
    }

    /// Rotates the cell by a quarter turn around `axis`, through the origin.
    pub fn rotate(&mut self, axis: Axis, clockwise: bool) {
        self.pos = self.pos.rotated(axis, clockwise);
        for v in &mut self.basis {
            *v = v.rotated(axis, clockwise);
        }
    }
    /// Rotates the cell around the X axis.
    pub fn rotate_x(&mut self, clockwise: bool) {
        self.rotate(Axis::X, clockwise);
    }
    /// Rotates the cell around the Y axis.
    pub fn rotate_y(&mut self, clockwise: bool) {
        self.rotate(Axis::Y, clockwise);
    }
    /// Rotates the cell around the Z axis.
    pub fn rotate_z(&mut self, clockwise: bool) {
        self.rotate(Axis::Z, clockwise);
    }

    /// Returns the face of the solved cube whose sticker on this cell now
    /// points along `direction`.
    ///
    /// Returns `None` if `direction` is not parallel to a basis vector, which
    /// cannot happen for a principal axis direction.
    pub fn original_face(&self, direction: Vector3) -> Option<Face> {
        Axis::iter().find_map(|axis| {
            let dot = self.basis[axis.index()].dot(direction);
            Some(Face::from_axis_sign(axis, cubemath::Sign::of(dot)?))
        })
    }

    /// Returns the colour seen when looking at the cell along `view`.
    pub fn colour<'a, C>(&self, view: Vector3, scheme: &'a PerFace<C>) -> Option<&'a C> {
        self.original_face(-view).map(|face| &scheme[face])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_cell_faces() {
        let cell = Cell::new(Vector3::new(2, -2, 2));
        for face in Face::iter() {
            assert_eq!(Some(face), cell.original_face(face.normal()));
            let scheme = PerFace::from_fn(|f| f);
            assert_eq!(Some(&face), cell.colour(face.view_direction(), &scheme));
        }
    }

    #[test]
    fn test_rotated_cell_faces() {
        let mut cell = Cell::new(Vector3::new(2, -2, 2));
        cell.rotate_y(true);

        // Clockwise around Y carries +X onto +Z.
        assert_eq!(Vector3::new(-2, -2, 2), cell.pos());
        assert_eq!(Some(Face::R), cell.original_face(Face::F.normal()));
        assert_eq!(Some(Face::B), cell.original_face(Face::R.normal()));
        assert_eq!(Some(Face::U), cell.original_face(Face::U.normal()));

        cell.rotate_y(false);
        assert_eq!(Cell::new(Vector3::new(2, -2, 2)), cell);
    }
}
