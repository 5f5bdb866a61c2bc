use crate::aircraft::Aircraft;
use crate::error::FlightError;
use crate::flight::Flight;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("cannot read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Flight(#[from] FlightError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub seat: String,
    pub passenger: String,
}

/// A flight number, the aircraft flying it and the seats already taken.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub aircraft: Aircraft,
    pub flight: String,
    #[serde(default)]
    pub allocations: Vec<Allocation>,
}

impl Scenario {
    pub fn demo() -> Scenario {
        let allocations = [
            ("1A", "Kinoshita"),
            ("3C", "David"),
            ("7D", "Cathy"),
            ("8B", "Nuodrtouhh"),
        ]
        .into_iter()
        .map(|(seat, passenger)| Allocation {
            seat: seat.to_string(),
            passenger: passenger.to_string(),
        })
        .collect();

        Scenario {
            aircraft: Aircraft::new("Regist", "Airbus", 22, 6),
            flight: "AA123".to_string(),
            allocations,
        }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Scenario, ScenarioError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let scenario = serde_json::from_str::<Scenario>(&data)?;
        info!(
            path = %path.as_ref().display(),
            flight = %scenario.flight,
            allocations = scenario.allocations.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Builds the flight and applies the allocations in file order. The first
    /// allocation that fails aborts the whole scenario.
    pub fn into_flight(self) -> Result<Flight, ScenarioError> {
        let mut flight = Flight::new(self.flight, Arc::new(self.aircraft))?;
        for a in self.allocations {
            flight.allocate_seat(&a.seat, a.passenger)?;
        }
        Ok(flight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlightError::SeatOccupied;

    #[test]
    fn test_demo_flight() {
        let flight = Scenario::demo().into_flight().unwrap();
        assert_eq!(flight.number(), "AA123");
        assert_eq!(flight.aircraft_model(), "Airbus");
        assert_eq!(flight.num_available_seats(), 128);
    }

    #[test]
    fn test_parse_scenario_json() {
        let json = r#"{
            "aircraft": {"registration": "G-EUAH", "model": "Airbus A319", "num_rows": 22, "seats_per_row": 6},
            "flight": "BA758",
            "allocations": [
                {"seat": "12A", "passenger": "Guido"},
                {"seat": "15F", "passenger": "Bjarne"}
            ]
        }"#;
        let scenario = serde_json::from_str::<Scenario>(json).unwrap();
        let flight = scenario.into_flight().unwrap();

        assert_eq!(flight.airline(), "BA");
        assert_eq!(flight.route_number(), 758);
        assert_eq!(flight.passenger_at("15F").unwrap(), Some("Bjarne"));
        assert_eq!(flight.num_available_seats(), 130);
    }

    #[test]
    fn test_allocations_default_to_empty() {
        let json = r#"{
            "aircraft": {"registration": "G-EUAH", "model": "Airbus A319", "num_rows": 2, "seats_per_row": 2},
            "flight": "BA1"
        }"#;
        let flight = serde_json::from_str::<Scenario>(json).unwrap().into_flight().unwrap();
        assert_eq!(flight.num_available_seats(), 4);
    }

    #[test]
    fn test_conflicting_allocations_fail() {
        let mut scenario = Scenario::demo();
        scenario.allocations.push(Allocation {
            seat: "3C".to_string(),
            passenger: "Larry".to_string(),
        });

        let err = scenario.into_flight().err().unwrap();
        assert!(matches!(err, ScenarioError::Flight(SeatOccupied { ref seat }) if seat == "3C"));
    }

    #[test]
    fn test_missing_file() {
        let err = Scenario::load_from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }

    #[test]
    fn test_shipped_default_matches_demo() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/default.json");
        assert_eq!(Scenario::load_from_file(path).unwrap(), Scenario::demo());
    }
}
