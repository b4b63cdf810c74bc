pub mod http_prediction_client;

pub use http_prediction_client::HttpPredictionClient;
