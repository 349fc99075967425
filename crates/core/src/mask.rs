//! Per-cell boolean mask flagging which cells a phase touched
//! (destroyed, fallen or filled).

use crate::types::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// All-false mask
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        if coord.x < 0
            || coord.y < 0
            || coord.x as usize >= self.width
            || coord.y as usize >= self.height
        {
            return None;
        }
        Some(coord.y as usize * self.width + coord.x as usize)
    }

    /// False for out-of-range coords
    pub fn get(&self, coord: Coord) -> bool {
        self.index_of(coord).map(|i| self.bits[i]).unwrap_or(false)
    }

    pub fn set(&mut self, coord: Coord) -> bool {
        match self.index_of(coord) {
            Some(i) => {
                self.bits[i] = true;
                true
            }
            None => false,
        }
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, x: usize, y: usize) {
        self.bits[y * self.width + x] = true;
    }

    #[inline(always)]
    pub(crate) fn is_marked(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    /// Number of flagged cells
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn any(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }

    /// Flagged coords in row-major order
    pub fn iter_set(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(move |(i, _)| Coord::new((i % width) as i32, (i / width) as i32))
    }

    /// Height rows of width flags each
    pub fn rows(&self) -> Vec<Vec<bool>> {
        (0..self.height)
            .map(|y| self.bits[y * self.width..(y + 1) * self.width].to_vec())
            .collect()
    }
}
