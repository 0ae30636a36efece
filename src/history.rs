use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::Error;

/// Range of field values a renderer should show.
pub const FIELD_RANGE: (f64, f64) = (-1.2, 1.2);

/// Every completed time step of a run, one row of `Ex` and one row of `Hy` per step.
///
/// Rows are copies of the live fields, so the solver continuing to update its
/// state never changes what has been recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    first_step: usize,
    ex: Array2<f64>,
    hy: Array2<f64>,
}

/// A read-only snapshot of both fields after one time step.
#[derive(Copy, Clone, Debug)]
pub struct Frame<'a> {
    /// The 1-based time step the fields were recorded after.
    pub step: usize,
    pub ex: ArrayView1<'a, f64>,
    pub hy: ArrayView1<'a, f64>,
}

/// Axis ranges for drawing frames of a `History`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Spatial range, `[0, npoints)`.
    pub x: (f64, f64),
    /// Field value range.
    pub y: (f64, f64),
}

impl History {
    /// Creates an empty history whose first row will be time step `first_step`.
    pub(crate) fn new(npoints: usize, first_step: usize) -> Self {
        Self {
            first_step,
            ex: Array2::zeros((0, npoints)),
            hy: Array2::zeros((0, npoints)),
        }
    }

    /// Appends copies of the current fields.
    pub(crate) fn push(
        &mut self,
        ex: ArrayView1<f64>,
        hy: ArrayView1<f64>,
    ) -> Result<(), Error> {
        self.ex.push_row(ex)?;
        self.hy.push_row(hy)?;
        Ok(())
    }

    /// The number of recorded time steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.ex.len_of(Axis(0))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of grid nodes in each row.
    #[inline]
    pub fn npoints(&self) -> usize {
        self.ex.len_of(Axis(1))
    }

    /// The time step recorded in the first row.
    #[inline]
    pub fn first_step(&self) -> usize {
        self.first_step
    }

    /// The frame in row `index`, if there is one.
    pub fn frame(&self, index: usize) -> Option<Frame<'_>> {
        if index >= self.len() {
            return None;
        }
        Some(Frame {
            step: self.first_step + index,
            ex: self.ex.row(index),
            hy: self.hy.row(index),
        })
    }

    /// Iterates over all frames from the first. Each call starts over.
    pub fn frames(&self) -> Frames<'_> {
        Frames { history: self, front: 0, back: self.len() }
    }

    /// A cursor for pulling frames one at a time.
    pub fn playback(&self) -> Playback<'_> {
        Playback { history: self, cursor: 0 }
    }

    /// All `Ex` rows, shape `(len, npoints)`.
    #[inline]
    pub fn ex(&self) -> &Array2<f64> {
        &self.ex
    }

    /// All `Hy` rows, shape `(len, npoints)`.
    #[inline]
    pub fn hy(&self) -> &Array2<f64> {
        &self.hy
    }

    /// The value of `Ex` at `node` over time.
    pub fn ex_at(&self, node: usize) -> Option<Array1<f64>> {
        (node < self.npoints()).then(|| self.ex.column(node).to_owned())
    }

    /// Takes the `Ex` and `Hy` rows out of the history.
    pub fn into_arrays(self) -> (Array2<f64>, Array2<f64>) {
        (self.ex, self.hy)
    }

    /// Axis ranges that fit every frame of this history.
    pub fn viewport(&self) -> Viewport {
        Viewport { x: (0.0, self.npoints() as f64), y: FIELD_RANGE }
    }
}

/// Iterator over the frames of a `History`.
pub struct Frames<'a> {
    history: &'a History,
    front: usize,
    back: usize,
}
impl<'a> Iterator for Frames<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let frame = self.history.frame(self.front);
        self.front += 1;
        frame
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}
impl<'a> DoubleEndedIterator for Frames<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.history.frame(self.back)
    }
}
impl<'a> ExactSizeIterator for Frames<'a> {}

/// Hands out the frames of a `History` in order, on request.
///
/// A renderer owns its own timer and calls `next_frame` on every tick; once the
/// frames run out it keeps showing the last one or calls `reset` to loop.
pub struct Playback<'a> {
    history: &'a History,
    cursor: usize,
}
impl<'a> Playback<'a> {
    /// The next frame, or `None` once every frame has been handed out.
    pub fn next_frame(&mut self) -> Option<Frame<'a>> {
        let frame = self.history.frame(self.cursor)?;
        self.cursor += 1;
        Some(frame)
    }

    /// Moves back to the first frame.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// How many frames are left before the end.
    pub fn remaining(&self) -> usize {
        self.history.len() - self.cursor
    }
}
