pub mod entities;
pub mod keywords;
pub mod language;
pub mod parser;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
