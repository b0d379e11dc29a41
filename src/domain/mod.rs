// Domain layer: the enrollment record and the storage port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
