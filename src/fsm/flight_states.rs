use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    InFlight,
    Landed,
    Crashed,
}

impl FlightStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FlightStatus::InFlight)
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlightStatus::InFlight => write!(f, "In Flight"),
            FlightStatus::Landed => write!(f, "Landed"),
            FlightStatus::Crashed => write!(f, "Crashed"),
        }
    }
}
