use crate::aircraft::{Aircraft, AircraftRef};
use crate::boarding::BoardingCard;
use crate::flight::Flight;
use std::sync::Arc;

pub fn airbus() -> AircraftRef {
    Arc::new(Aircraft::new("G-EUPT", "Airbus A319", 22, 6))
}

pub fn empty_flight() -> Flight {
    Flight::new("AA123", airbus()).unwrap()
}

pub fn make_flight() -> Flight {
    let mut f = empty_flight();
    f.allocate_seat("1A", "Kinoshita").unwrap();
    f.allocate_seat("3C", "David").unwrap();
    f.allocate_seat("7D", "Cathy").unwrap();
    f.allocate_seat("8B", "Nuodrtouhh").unwrap();
    f
}

/// Collects `(passenger, seat)` for every card the flight prints.
pub fn collect_cards(flight: &Flight) -> Vec<(String, String)> {
    let mut cards = vec![];
    flight.make_boarding_cards(|card: &BoardingCard<'_>| {
        cards.push((card.passenger.to_string(), card.seat.to_string()))
    });
    cards
}
