/// A first order one-way absorbing boundary.
///
/// The boundary node takes the value its neighbour held two steps earlier, which
/// lets a wave travelling at half a cell per step leave the grid without reflecting.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AbsorbingBoundary {
    memory: [f64; 2],
}
impl AbsorbingBoundary {
    /// Records the neighbour's current value and returns the one from two steps ago.
    #[inline]
    pub fn exchange(&mut self, inner: f64) -> f64 {
        let outer = self.memory[0];
        self.memory = [self.memory[1], inner];
        outer
    }

    /// The stored neighbour values, oldest first.
    #[inline]
    pub fn memory(&self) -> [f64; 2] {
        self.memory
    }
}
