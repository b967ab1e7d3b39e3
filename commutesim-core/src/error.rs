use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No route found between the requested points")]
    NoRouteFound,
    #[error("Travel plan stayed below {min_points} distinct points after {attempts} attempts")]
    DegeneratePlan { attempts: usize, min_points: usize },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
