mod authorization;
mod catalog;
mod geo;
mod presenter;
mod probe;
mod screen;
mod services;

pub use authorization::*;
pub use catalog::*;
pub use geo::*;
pub use presenter::*;
pub use probe::*;
pub use screen::*;
pub use services::*;
