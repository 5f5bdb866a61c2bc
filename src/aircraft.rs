use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Seat letters in cabin order. `I` is skipped to avoid confusion with `1`.
pub const SEAT_LETTERS: &str = "ABCDEFGHJK";

pub type AircraftRef = Arc<Aircraft>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    registration: String,
    model: String,
    num_rows: u32,
    seats_per_row: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeatingPlan {
    pub rows: RangeInclusive<u32>,
    pub letters: &'static str,
}

impl SeatingPlan {
    pub fn contains_row(&self, row: u32) -> bool {
        self.rows.contains(&row)
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    pub fn seat_count(&self) -> usize {
        self.rows.clone().count() * self.letters.len()
    }
}

impl Aircraft {
    pub fn new(
        registration: impl Into<String>,
        model: impl Into<String>,
        num_rows: u32,
        seats_per_row: usize,
    ) -> Aircraft {
        Aircraft {
            registration: registration.into(),
            model: model.into(),
            num_rows,
            seats_per_row,
        }
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    /// Rows are numbered from 1. More than ten seats per row is capped at the
    /// length of [`SEAT_LETTERS`].
    pub fn seating_plan(&self) -> SeatingPlan {
        let width = self.seats_per_row.min(SEAT_LETTERS.len());
        SeatingPlan {
            rows: 1..=self.num_rows,
            letters: &SEAT_LETTERS[..width],
        }
    }
}
