use std::collections::BTreeMap;

use krishiarogya_core::domain::prediction::entities::MeasurementFieldSpec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MeasurementFieldsResponse {
    pub data: Vec<MeasurementFieldSpec>,
}

/// Measurement form as the browser sends it: any JSON object, values may be
/// missing, numbers or numeric strings.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(value_type = Object)]
pub struct MeasurementForm(pub Map<String, Value>);

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidateMeasurementsResponse {
    pub valid: bool,
    /// Message per invalid field key
    pub errors: BTreeMap<String, String>,
}
