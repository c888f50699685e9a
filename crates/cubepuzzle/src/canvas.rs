use std::fmt;

/// Surface that a [`crate::Cube`] can be drawn onto, one pixel per sticker.
pub trait Canvas<C> {
    /// Sets the pixel at `(x, y)` to `colour`.
    fn set_pixel(&mut self, x: u32, y: u32, colour: C);
}

/// In-memory canvas holding the flattened net of a cube. Pixels that have not
/// been set are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceNet<C> {
    width: u32,
    height: u32,
    pixels: Vec<Option<C>>,
}

impl<C: Clone> FaceNet<C> {
    /// Constructs an empty canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width as usize * height as usize],
        }
    }
}

impl<C> FaceNet<C> {
    /// Returns the width of the canvas.
    pub fn width(&self) -> u32 {
        self.width
    }
    /// Returns the height of the canvas.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Returns the pixel at `(x, y)`, or `None` if it is unset or out of
    /// bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<&C> {
        self.pixels.get(self.index(x, y)?)?.as_ref()
    }

    /// Returns an iterator over the rows of the canvas.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<C>]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }
}

impl<C> Canvas<C> for FaceNet<C> {
    fn set_pixel(&mut self, x: u32, y: u32, colour: C) {
        match self.index(x, y) {
            Some(i) => self.pixels[i] = Some(colour),
            None => log::warn!(
                "pixel ({x}, {y}) is outside {}x{} canvas",
                self.width,
                self.height,
            ),
        }
    }
}

impl<C: fmt::Display> fmt::Display for FaceNet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for pixel in row {
                match pixel {
                    Some(c) => write!(f, "{c}")?,
                    None => write!(f, " ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "image")]
impl Canvas<crate::Rgb> for image::RgbImage {
    fn set_pixel(&mut self, x: u32, y: u32, colour: crate::Rgb) {
        if let Some(pixel) = self.get_pixel_mut_checked(x, y) {
            *pixel = image::Rgb(colour.rgb);
        }
    }
}
