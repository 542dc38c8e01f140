// Domain layer: the car value, operation outcomes and ports. No external dependencies.

pub mod model;
pub mod ports;
