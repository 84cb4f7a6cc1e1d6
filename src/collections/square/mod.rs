mod coord;

pub use self::coord::Coord;

use std::convert::TryFrom;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

/// A container of elements represented in a square grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Creates a new square with a specified width, filled with the default value
    pub fn with_width(width: usize) -> Square<T>
    where
        T: Clone + Default,
    {
        Self {
            width,
            elements: vec![Default::default(); width.pow(2)],
        }
    }

    /// Returns the width (and height) of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns an iterator over the rows of the square
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width)
    }

    /// Returns one row as a slice
    pub fn row(&self, row: usize) -> &[T] {
        &self.elements[row * self.width..(row + 1) * self.width]
    }
}

impl<T> Deref for Square<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T> Index<usize> for Square<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Square<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

impl<T> Index<Coord> for Square<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[coord.to_index(self.width)]
    }
}

impl<T> IndexMut<Coord> for Square<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let index = coord.to_index(self.width);
        &mut self.elements[index]
    }
}

impl<T> Display for Square<T>
where
    T: Display + Ord,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = match self.elements.iter().max() {
            Some(max) => max.to_string().len(),
            None => return Ok(()),
        };
        for row in self.rows() {
            for element in row {
                write!(f, "{:>1$} ", element, len)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(PartialEq)]
pub struct NonSquareLength(usize);

impl Debug for NonSquareLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The length of elements ({}) is not square", self.0)
    }
}

impl<T> TryFrom<Vec<T>> for Square<T> {
    type Error = NonSquareLength;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        let width = (elements.len() as f32).sqrt() as usize;
        if elements.len() != width.pow(2) {
            return Err(NonSquareLength(elements.len()));
        }
        Ok(Self { width, elements })
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::{Coord, NonSquareLength, Square};

    #[test]
    fn with_width() {
        let square: Square<i32> = Square::with_width(3);
        assert_eq!(9, square.len());
        assert!(square.iter().all(|&v| v == 0));
    }

    #[test]
    fn index_by_coord() {
        let mut square: Square<i32> = Square::with_width(4);
        square[Coord::new(2, 1)] = 7;
        assert_eq!(7, square[6]);
        assert_eq!(7, square.row(1)[2]);
    }

    #[test]
    fn try_from_vec() {
        assert!(Square::try_from(vec![1; 9]).is_ok());
    }

    #[test]
    fn try_from_non_square_vec() {
        assert_eq!(Err(NonSquareLength(8)), Square::try_from(vec![1; 8]));
    }

    #[test]
    fn coord_round_trip() {
        let coord = Coord::from_index(11, 4);
        assert_eq!(Coord::new(3, 2), coord);
        assert_eq!(11, coord.to_index(4));
    }
}
