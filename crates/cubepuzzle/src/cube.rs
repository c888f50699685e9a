use cubemath::{Axis, Vector3};
use itertools::Itertools;
use smallvec::SmallVec;

use crate::{Cell, CubeError, Face, ScrambleParams, Turn, TurnKind, TurnSource};

/// N×N×N cube puzzle.
///
/// Cell positions use a lattice centered at the origin with a spacing of 2,
/// so every coordinate is in `lo()..=hi()` and has the same parity as
/// `size - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    size: u32,
    lo: i32,
    hi: i32,
    cells: Vec<Cell>,

    /// Stack of turns that undo the turns done so far.
    undo_stack: Vec<Turn>,
    /// Stack of undone turns that can be redone.
    redo_stack: Vec<Turn>,
}

impl Cube {
    /// Maximum cube size, limited so that canvas coordinates fit in `u32`.
    pub const MAX_SIZE: u32 = i32::MAX as u32 / 4;

    /// Constructs a new solved cube with `size` cells along each edge.
    pub fn new(size: u32) -> Result<Self, CubeError> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(CubeError::InvalidSize { size });
        }

        let n = size as i32;
        let lo = 1 - n;
        let hi = n - 1;

        let coords = || (lo..=hi).step_by(2);
        let is_interior = |c: i32| lo < c && c < hi;
        let cells = coords()
            .cartesian_product(coords())
            .cartesian_product(coords())
            .filter(|&((x, y), z)| !(is_interior(x) && is_interior(y) && is_interior(z)))
            .map(|((x, y), z)| Cell::new(Vector3::new(x, y, z)))
            .collect_vec();

        log::debug!("constructed {size}x{size}x{size} cube with {} cells", cells.len());

        Ok(Self {
            size,
            lo,
            hi,
            cells,

            undo_stack: vec![],
            redo_stack: vec![],
        })
    }

    /// Returns the number of cells along each edge.
    pub fn size(&self) -> u32 {
        self.size
    }
    /// Returns the minimum lattice coordinate.
    pub fn lo(&self) -> i32 {
        self.lo
    }
    /// Returns the maximum lattice coordinate.
    pub fn hi(&self) -> i32 {
        self.hi
    }
    /// Returns all the cells on the shell of the cube.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Converts a lattice coordinate to a zero-based row or column index.
    pub fn to_canvas(&self, coord: i32) -> u32 {
        ((self.size as i32 + coord - 1) >> 1) as u32
    }
    /// Converts a zero-based row or column index to a lattice coordinate.
    pub fn to_space(&self, coord: u32) -> i32 {
        ((coord << 1) as i32) - self.size as i32 + 1
    }

    /// Returns the faces of the cube that `cell` is part of. Corner cells are
    /// on three faces.
    pub fn visible_faces(&self, cell: &Cell) -> SmallVec<[Face; 3]> {
        Face::iter()
            .filter(|&face| {
                let boundary = match face.sign() {
                    cubemath::Sign::Pos => self.hi,
                    cubemath::Sign::Neg => self.lo,
                };
                cell.pos()[face.axis()] == boundary
            })
            .collect()
    }

    /// Returns whether every face shows a single color.
    ///
    /// Reorienting the whole cube does not affect this.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| {
            self.cells
                .iter()
                .filter(|cell| self.visible_faces(cell).contains(&face))
                .map(|cell| cell.original_face(face.normal()))
                .all_equal()
        })
    }

    /*
     * TURNS
     */

    /// Turns a slice parallel to the front face. Slice 0 is the front face,
    /// and negative slices count from the back.
    pub fn turn_front(&mut self, slice: i32, clockwise: bool) -> Result<(), CubeError> {
        self.turn(TurnKind::Front, slice, clockwise)
    }
    /// Turns a slice parallel to the up face. Slice 0 is the up face, and
    /// negative slices count from the bottom.
    pub fn turn_top(&mut self, slice: i32, clockwise: bool) -> Result<(), CubeError> {
        self.turn(TurnKind::Top, slice, clockwise)
    }
    /// Turns a slice parallel to the left face. Slice 0 is the left face, and
    /// negative slices count from the right.
    pub fn turn_side(&mut self, slice: i32, clockwise: bool) -> Result<(), CubeError> {
        self.turn(TurnKind::Side, slice, clockwise)
    }

    /// Validates a slice index and applies the turn, recording it in the undo
    /// history.
    pub fn turn(&mut self, kind: TurnKind, slice: i32, clockwise: bool) -> Result<(), CubeError> {
        let slice = self.normalize_slice(slice)?;
        self.do_recorded_turn(Turn::new(kind, slice, clockwise));
        Ok(())
    }

    /// Returns the slice index in `0..size`, or an error if it is out of
    /// range.
    fn normalize_slice(&self, slice: i32) -> Result<u32, CubeError> {
        let n = self.size as i64;
        let s = slice as i64;
        if s < -n || s >= n {
            return Err(CubeError::InvalidSlice {
                slice,
                size: self.size,
            });
        }
        Ok(s.rem_euclid(n) as u32)
    }

    fn do_recorded_turn(&mut self, turn: Turn) {
        self.do_turn(turn);
        self.undo_stack.push(turn.rev());
        self.redo_stack.clear();
    }

    /// Applies a turn without touching the undo history. The slice must
    /// already be normalized.
    fn do_turn(&mut self, turn: Turn) {
        log::trace!("turn {turn}");

        let Turn {
            kind,
            slice,
            clockwise,
        } = turn;
        let (coord, clockwise) = match kind {
            TurnKind::Front => (-self.to_space(slice), !clockwise),
            TurnKind::Top => (self.to_space(slice), clockwise),
            TurnKind::Side => (self.to_space(slice), !clockwise),
        };
        let axis = kind.axis();
        for cell in &mut self.cells {
            if cell.pos()[axis] == coord {
                cell.rotate(axis, clockwise);
            }
        }
    }

    /*
     * REORIENTATION
     */

    /// Rotates the whole cube around the Z axis. This is not recorded in the
    /// undo history.
    pub fn roll(&mut self, clockwise: bool) {
        self.rotate_all(Axis::Z, clockwise);
    }
    /// Rotates the whole cube around the Y axis. This is not recorded in the
    /// undo history.
    pub fn yaw(&mut self, clockwise: bool) {
        self.rotate_all(Axis::Y, clockwise);
    }
    /// Rotates the whole cube around the X axis. This is not recorded in the
    /// undo history.
    pub fn pitch(&mut self, clockwise: bool) {
        self.rotate_all(Axis::X, clockwise);
    }

    fn rotate_all(&mut self, axis: Axis, clockwise: bool) {
        log::trace!("rotate cube around {axis} (clockwise: {clockwise})");
        for cell in &mut self.cells {
            cell.rotate(axis, clockwise);
        }
    }

    /*
     * SCRAMBLING
     */

    /// Applies `count` random turns chosen by `source` and returns them. Each
    /// turn is recorded in the undo history.
    pub fn shuffle<S: TurnSource + ?Sized>(&mut self, count: u32, source: &mut S) -> Vec<Turn> {
        let turns = (0..count)
            .map(|_| {
                let turn = source.next_turn(self.size);
                self.do_recorded_turn(turn);
                turn
            })
            .collect_vec();
        log::debug!("shuffled cube with {count} turns");
        turns
    }

    /// Shuffles the cube using a generator derived from `params`.
    pub fn scramble(&mut self, params: &ScrambleParams) -> Vec<Turn> {
        self.shuffle(params.length, &mut params.rng())
    }

    /*
     * HISTORY
     */

    /// Undoes up to `count` turns and returns the number actually undone,
    /// which is less than `count` if the history runs out.
    pub fn undo(&mut self, count: u32) -> u32 {
        let mut undone = 0;
        while undone < count {
            let Some(turn) = self.undo_stack.pop() else {
                break;
            };
            self.do_turn(turn);
            self.redo_stack.push(turn.rev());
            undone += 1;
        }
        log::debug!("undid {undone} of {count} requested turns");
        undone
    }

    /// Redoes up to `count` undone turns and returns the number actually
    /// redone.
    pub fn redo(&mut self, count: u32) -> u32 {
        let mut redone = 0;
        while redone < count {
            let Some(turn) = self.redo_stack.pop() else {
                break;
            };
            self.do_turn(turn);
            self.undo_stack.push(turn.rev());
            redone += 1;
        }
        log::debug!("redid {redone} of {count} requested turns");
        redone
    }

    /// Returns whether there is a turn available to undo.
    pub fn has_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }
    /// Returns whether there is a turn available to redo.
    pub fn has_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
    /// Returns the turns that would be replayed by [`Cube::undo()`], oldest
    /// first. Each one is the inverse of a turn that was done.
    pub fn undo_history(&self) -> &[Turn] {
        &self.undo_stack
    }
    /// Forgets all undo and redo history without changing the cube.
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
