// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std and the trait plumbing.

pub mod model;
pub mod ports;
