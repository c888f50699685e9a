//! Projection of the cube onto a flat net.
//!
//! ```text
//!     U
//!   L F R B
//!     D
//! ```
//!
//! Each face occupies an `n`×`n` block. The back, down, and right faces are
//! mirrored so that the net reads as if each face were viewed from outside.

use crate::{Canvas, Cube, Face, FaceNet, PerFace};

impl Cube {
    /// Returns the size of the net drawn by [`Cube::draw()`] as `(width,
    /// height)`.
    pub fn canvas_size(&self) -> (u32, u32) {
        (4 * self.size(), 3 * self.size())
    }

    /// Returns the canvas pixel for the sticker on `face` of a cell at `pos`.
    fn canvas_pixel(&self, face: Face, pos: cubemath::Vector3) -> (u32, u32) {
        let n = self.size();
        let hi = self.hi() as u32;
        let x = self.to_canvas(pos.x());
        let y = self.to_canvas(pos.y());
        let z = self.to_canvas(pos.z());
        match face {
            Face::F => (n + x, n + y),
            Face::U => (n + x, z),
            Face::L => (z, n + y),
            Face::B => (3 * n + hi - x, n + y),
            Face::D => (n + x, 2 * n + hi - z),
            Face::R => (2 * n + hi - z, n + y),
        }
    }

    /// Draws every visible sticker onto `canvas`, using `scheme` to pick the
    /// colour for each original face.
    pub fn draw<C: Clone>(&self, canvas: &mut impl Canvas<C>, scheme: &PerFace<C>) {
        for cell in self.cells() {
            for face in self.visible_faces(cell) {
                let Some(colour) = cell.colour(face.view_direction(), scheme) else {
                    log::error!("cell at {} has no sticker facing {face}", cell.pos());
                    continue;
                };
                let (x, y) = self.canvas_pixel(face, cell.pos());
                canvas.set_pixel(x, y, colour.clone());
            }
        }
    }

    /// Returns a new net showing which original face each sticker belongs to.
    pub fn face_net(&self) -> FaceNet<Face> {
        let (width, height) = self.canvas_size();
        let mut net = FaceNet::new(width, height);
        self.draw(&mut net, &PerFace::from_fn(|face| face));
        net
    }
}
