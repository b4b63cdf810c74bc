pub mod common;
pub mod crop_doctor;
pub mod prediction;
