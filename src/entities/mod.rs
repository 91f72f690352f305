mod location;
mod prediction;
mod trip;

pub use location::{parse_degrees, Coordinates};
pub use prediction::{
    PredictionForm, PredictionRequest, PredictionResult, PredictionState, NO_VEHICLE_MESSAGE,
    PREDICTION_FAILED_MESSAGE,
};
pub use trip::{Scalar, Shipments, Trip, TripsEnvelope};
