// Domain layer: temperature types and the ports the host implements.

pub mod model;
pub mod ports;
