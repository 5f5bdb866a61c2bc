#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatIssue {
    #[error("missing airline code")]
    MissingAirlineCode,
    #[error("airline code must be uppercase")]
    LowercaseAirlineCode,
    #[error("invalid route number")]
    InvalidRouteNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SeatIssue {
    #[error("bad letter")]
    BadLetter,
    #[error("bad row format")]
    BadRowFormat,
    #[error("row out of range")]
    RowOutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlightError {
    #[error("invalid flight number '{number}': {reason}")]
    InvalidFormat { number: String, reason: FormatIssue },
    #[error("invalid seat '{seat}': {reason}")]
    InvalidSeat { seat: String, reason: SeatIssue },
    #[error("seat {seat} already occupied")]
    SeatOccupied { seat: String },
    #[error("seat {seat} is empty: nothing to relocate")]
    SeatEmpty { seat: String },
}

pub type FlightResult<T> = Result<T, FlightError>;
