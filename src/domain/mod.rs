// Domain layer: value types and the article rule capability. Only std/serde.

pub mod model;
pub mod ports;
