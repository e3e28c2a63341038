use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum SimulationError {
    UnsupportedScenario(usize),
    InvalidTimestep(f64),
    DegeneratePosition,
    FuelOutOfRange(f64),
    IoError(io::Error),
    CsvError(csv::Error),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UnsupportedScenario(index) => {
                write!(f, "Scenario {} is not populated", index)
            }
            SimulationError::InvalidTimestep(dt) => write!(f, "Invalid timestep {} s", dt),
            SimulationError::DegeneratePosition => {
                write!(f, "Lander position coincides with the planet centre")
            }
            SimulationError::FuelOutOfRange(fuel) => {
                write!(f, "Fuel fraction {} is outside [0, 1]", fuel)
            }
            SimulationError::IoError(e) => write!(f, "I/O error: {}", e),
            SimulationError::CsvError(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl Error for SimulationError {}

impl From<io::Error> for SimulationError {
    fn from(err: io::Error) -> Self {
        SimulationError::IoError(err)
    }
}

impl From<csv::Error> for SimulationError {
    fn from(err: csv::Error) -> Self {
        SimulationError::CsvError(err)
    }
}
