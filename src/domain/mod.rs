// Domain layer: operation model and ports. No dependencies beyond std/serde/async-trait.

pub mod model;
pub mod ports;
