use std::fmt;
use std::fmt::Formatter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat {
    pub row: u32,
    pub letter: char,
}

impl Seat {
    pub fn new(row: u32, letter: char) -> Seat {
        Seat { row, letter }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designator() {
        assert_eq!(Seat::new(12, 'F').to_string(), "12F");
        assert_eq!(Seat::new(1, 'A').to_string(), "1A");
    }

    #[test]
    fn test_row_major_order() {
        let mut seats = vec![Seat::new(3, 'A'), Seat::new(1, 'C'), Seat::new(1, 'A'), Seat::new(10, 'B')];
        seats.sort();
        assert_eq!(
            seats,
            vec![Seat::new(1, 'A'), Seat::new(1, 'C'), Seat::new(3, 'A'), Seat::new(10, 'B')]
        );
    }
}
