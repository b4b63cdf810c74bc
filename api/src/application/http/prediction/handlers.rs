pub mod get_measurement_fields;
pub mod predict;
pub mod validate_measurements;
