use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Soil and weather readings sent to the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MeasurementInput {
    #[serde(rename = "N")]
    #[schema(example = 90)]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    #[schema(example = 42)]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    #[schema(example = 43)]
    pub potassium: f64,
    #[schema(example = 20.8)]
    pub temperature: f64,
    #[schema(example = 82.0)]
    pub humidity: f64,
    #[schema(example = 6.5)]
    pub ph: f64,
    #[schema(example = 202.9)]
    pub rainfall: f64,
}

/// Result relayed from the prediction service without inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    pub crop: String,
    #[schema(value_type = f64)]
    pub confidence: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeasurementField {
    Nitrogen,
    Phosphorus,
    Potassium,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
}

impl MeasurementField {
    pub const ALL: [MeasurementField; 7] = [
        MeasurementField::Nitrogen,
        MeasurementField::Phosphorus,
        MeasurementField::Potassium,
        MeasurementField::Temperature,
        MeasurementField::Humidity,
        MeasurementField::Ph,
        MeasurementField::Rainfall,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MeasurementField::Nitrogen => "N",
            MeasurementField::Phosphorus => "P",
            MeasurementField::Potassium => "K",
            MeasurementField::Temperature => "temperature",
            MeasurementField::Humidity => "humidity",
            MeasurementField::Ph => "ph",
            MeasurementField::Rainfall => "rainfall",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeasurementField::Nitrogen => "Nitrogen (N)",
            MeasurementField::Phosphorus => "Phosphorus (P)",
            MeasurementField::Potassium => "Potassium (K)",
            MeasurementField::Temperature => "Temperature",
            MeasurementField::Humidity => "Humidity",
            MeasurementField::Ph => "pH Level",
            MeasurementField::Rainfall => "Rainfall",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MeasurementField::Nitrogen
            | MeasurementField::Phosphorus
            | MeasurementField::Potassium => "mg/kg",
            MeasurementField::Temperature => "°C",
            MeasurementField::Humidity => "%",
            MeasurementField::Ph => "",
            MeasurementField::Rainfall => "mm",
        }
    }

    /// Inclusive `(min, max)`.
    pub fn range(&self) -> (f64, f64) {
        match self {
            MeasurementField::Nitrogen => (0.0, 140.0),
            MeasurementField::Phosphorus => (0.0, 145.0),
            MeasurementField::Potassium => (0.0, 205.0),
            MeasurementField::Temperature => (8.0, 43.0),
            MeasurementField::Humidity => (0.0, 100.0),
            MeasurementField::Ph => (3.5, 9.5),
            MeasurementField::Rainfall => (20.0, 250.0),
        }
    }

    /// Validates one raw form value. Numbers and numeric strings are accepted.
    pub fn validate(&self, raw: Option<&Value>) -> Result<f64, String> {
        let value = match raw {
            None | Some(Value::Null) => return Err(format!("{} is required", self.label())),
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err(format!("{} is required", self.label()));
            }
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        let value = value
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("{} must be a valid number", self.label()))?;

        let (min, max) = self.range();
        if value < min {
            return Err(format!("{} must be at least {}", self.label(), min));
        }
        if value > max {
            return Err(format!("{} cannot exceed {}", self.label(), max));
        }

        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MeasurementFieldSpec {
    pub key: String,
    pub label: String,
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub required: bool,
}

impl From<MeasurementField> for MeasurementFieldSpec {
    fn from(field: MeasurementField) -> Self {
        let (min, max) = field.range();
        Self {
            key: field.key().to_string(),
            label: field.label().to_string(),
            unit: field.unit().to_string(),
            min,
            max,
            required: true,
        }
    }
}

pub fn measurement_field_specs() -> Vec<MeasurementFieldSpec> {
    MeasurementField::ALL
        .into_iter()
        .map(MeasurementFieldSpec::from)
        .collect()
}

/// Returns one message per invalid field, keyed by field key. Empty means
/// the form may be submitted.
pub fn validate_measurements(form: &serde_json::Map<String, Value>) -> BTreeMap<String, String> {
    MeasurementField::ALL
        .iter()
        .filter_map(|field| {
            field
                .validate(form.get(field.key()))
                .err()
                .map(|message| (field.key().to_string(), message))
        })
        .collect()
}
