// Domain layer: value types and ports. No dependencies beyond std.

pub mod model;
pub mod ports;
