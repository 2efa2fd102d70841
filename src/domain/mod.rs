// Domain layer: plan and result models plus the ports (interfaces) the engine talks to.

pub mod model;
pub mod ports;
