use crate::aircraft::AircraftRef;
use crate::boarding::BoardingCard;
use crate::error::FlightError::{InvalidFormat, InvalidSeat, SeatEmpty, SeatOccupied};
use crate::error::FormatIssue::{InvalidRouteNumber, LowercaseAirlineCode, MissingAirlineCode};
use crate::error::SeatIssue::{BadLetter, BadRowFormat, RowOutOfRange};
use crate::error::{FlightError, FlightResult};
use crate::seat::Seat;
use std::collections::BTreeMap;
use std::num::IntErrorKind;
use tabled::Tabled;
use tracing::debug;

pub const MAX_ROUTE_NUMBER: u32 = 9999;

type SeatingMap = BTreeMap<u32, BTreeMap<char, Option<String>>>;

#[derive(Clone, Debug, PartialEq, Eq, Tabled)]
pub struct PassengerSeat {
    pub passenger: String,
    pub seat: Seat,
}

/// A single flight and its seat map.
///
/// The seat map is sized from the aircraft's seating plan when the flight is
/// created and keeps that shape for the lifetime of the flight.
#[derive(Debug)]
pub struct Flight {
    number: String,
    route_number: u32,
    aircraft: AircraftRef,
    seating: SeatingMap,
}

impl Flight {
    pub fn new(number: impl Into<String>, aircraft: AircraftRef) -> FlightResult<Flight> {
        let number = number.into();
        let route_number = Self::validate_number(&number)?;

        let plan = aircraft.seating_plan();
        let seating = plan
            .rows
            .clone()
            .map(|row| (row, plan.letters.chars().map(|l| (l, None)).collect()))
            .collect::<SeatingMap>();

        Ok(Flight {
            number,
            route_number,
            aircraft,
            seating,
        })
    }

    fn validate_number(number: &str) -> FlightResult<u32> {
        let invalid = |reason| InvalidFormat {
            number: number.to_string(),
            reason,
        };

        let code = number.chars().take(2).collect::<Vec<char>>();
        if code.len() < 2 || !code.iter().all(char::is_ascii_alphabetic) {
            return Err(invalid(MissingAirlineCode));
        }
        if !code.iter().all(char::is_ascii_uppercase) {
            return Err(invalid(LowercaseAirlineCode));
        }

        // both code characters are ASCII, so byte 2 is a char boundary
        let route = &number[2..];
        if route.is_empty() || !route.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(InvalidRouteNumber));
        }
        route
            .parse::<u32>()
            .ok()
            .filter(|n| *n <= MAX_ROUTE_NUMBER)
            .ok_or_else(|| invalid(InvalidRouteNumber))
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn airline(&self) -> &str {
        &self.number[..2]
    }

    pub fn route_number(&self) -> u32 {
        self.route_number
    }

    pub fn aircraft(&self) -> &AircraftRef {
        &self.aircraft
    }

    pub fn aircraft_model(&self) -> &str {
        self.aircraft.model()
    }

    /// Parses a designator such as `12F` into a seat on this aircraft.
    pub fn parse_seat(&self, designator: &str) -> FlightResult<Seat> {
        let plan = self.aircraft.seating_plan();
        let invalid = |reason| InvalidSeat {
            seat: designator.to_string(),
            reason,
        };

        let mut chars = designator.chars();
        let letter = chars
            .next_back()
            .filter(|l| plan.contains_letter(*l))
            .ok_or_else(|| invalid(BadLetter))?;

        let row = chars.as_str().parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => invalid(RowOutOfRange),
            _ => invalid(BadRowFormat),
        })?;

        u32::try_from(row)
            .ok()
            .filter(|r| plan.contains_row(*r))
            .map(|r| Seat::new(r, letter))
            .ok_or_else(|| invalid(RowOutOfRange))
    }

    fn occupant(&self, seat: Seat) -> FlightResult<Option<&str>> {
        self.seating
            .get(&seat.row)
            .and_then(|letters| letters.get(&seat.letter))
            .map(|slot| slot.as_deref())
            .ok_or_else(|| Self::missing(seat))
    }

    fn slot_mut(&mut self, seat: Seat) -> FlightResult<&mut Option<String>> {
        self.seating
            .get_mut(&seat.row)
            .and_then(|letters| letters.get_mut(&seat.letter))
            .ok_or_else(|| Self::missing(seat))
    }

    fn missing(seat: Seat) -> FlightError {
        InvalidSeat {
            seat: seat.to_string(),
            reason: RowOutOfRange,
        }
    }

    /// Returns the passenger sitting in `designator`, if any.
    pub fn passenger_at(&self, designator: &str) -> FlightResult<Option<&str>> {
        let seat = self.parse_seat(designator)?;
        self.occupant(seat)
    }

    pub fn allocate_seat(&mut self, designator: &str, passenger: impl Into<String>) -> FlightResult<()> {
        let seat = self.parse_seat(designator)?;
        if self.occupant(seat)?.is_some() {
            return Err(SeatOccupied {
                seat: seat.to_string(),
            });
        }

        let passenger = passenger.into();
        debug!(flight = %self.number, %seat, %passenger, "seat allocated");
        *self.slot_mut(seat)? = Some(passenger);
        Ok(())
    }

    /// Moves the passenger in `from` to the empty seat `to`.
    ///
    /// Both seats are checked before either is touched.
    pub fn relocate_passenger(&mut self, from: &str, to: &str) -> FlightResult<()> {
        let from_seat = self.parse_seat(from)?;
        let to_seat = self.parse_seat(to)?;

        if self.occupant(from_seat)?.is_none() {
            return Err(SeatEmpty {
                seat: from_seat.to_string(),
            });
        }
        if self.occupant(to_seat)?.is_some() {
            return Err(SeatOccupied {
                seat: to_seat.to_string(),
            });
        }

        let passenger = self.slot_mut(from_seat)?.take();
        debug!(flight = %self.number, from = %from_seat, to = %to_seat, "passenger relocated");
        *self.slot_mut(to_seat)? = passenger;
        Ok(())
    }

    pub fn num_available_seats(&self) -> usize {
        self.seating
            .values()
            .flat_map(|letters| letters.values())
            .filter(|slot| slot.is_none())
            .count()
    }

    /// Occupied seats in row order, then letter order within a row.
    pub fn passenger_seats(&self) -> impl Iterator<Item = PassengerSeat> + Clone + '_ {
        self.seating.iter().flat_map(|(row, letters)| {
            letters.iter().filter_map(move |(letter, slot)| {
                slot.as_ref().map(|passenger| PassengerSeat {
                    passenger: passenger.clone(),
                    seat: Seat::new(*row, *letter),
                })
            })
        })
    }

    /// Calls `card_printer` once per passenger, ordered by passenger name.
    /// Passengers sharing a name are ordered by designator text, so `10A`
    /// comes before `2A`.
    pub fn make_boarding_cards<F>(&self, mut card_printer: F)
    where
        F: FnMut(&BoardingCard<'_>),
    {
        let mut seats = self.passenger_seats().collect::<Vec<PassengerSeat>>();
        seats.sort_by_cached_key(|ps| (ps.passenger.clone(), ps.seat.to_string()));

        for ps in &seats {
            card_printer(&BoardingCard {
                passenger: &ps.passenger,
                seat: ps.seat,
                flight_number: &self.number,
                aircraft_model: self.aircraft_model(),
            });
        }
    }
}
