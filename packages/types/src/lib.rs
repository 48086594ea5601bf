pub mod controller;
pub mod stream;
