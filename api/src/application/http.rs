pub mod crop_doctor;
pub mod health;
pub mod prediction;
pub mod server;
