mod controller;
mod stream;
pub mod validation;

pub use controller::ControllerContract;
pub use stream::StreamContract;
