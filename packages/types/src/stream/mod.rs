mod msg;
mod status;

pub use msg::*;
pub use status::*;
