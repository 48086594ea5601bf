mod controller;
mod stream;

pub use controller::CascadeControllerContract;
pub use stream::CascadeStreamContract;
