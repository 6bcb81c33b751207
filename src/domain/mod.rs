// Domain layer: order record, status levels and ports. No I/O here.

pub mod model;
pub mod ports;
