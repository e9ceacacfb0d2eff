// Domain layer: listing records, group keys, and the ports the pipeline is built against.

pub mod model;
pub mod ports;
