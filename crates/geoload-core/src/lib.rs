pub mod config;
pub mod logging;

pub mod decode;
pub mod error;
pub mod feature;
pub mod loader;
pub mod source;
pub mod view;
