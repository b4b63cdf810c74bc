use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    crop_doctor::{entities::CropDiagnosis, value_objects::DiagnoseCropInput},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Chat completion client for the hosted language model
#[cfg_attr(test, mockall::automock)]
pub trait ChatClient: Send + Sync {
    /// Sends the conversation and returns the assistant reply text.
    ///
    /// Upstream 401 and 429 answers are reported as
    /// [`CoreError::InvalidApiKey`] and [`CoreError::RateLimited`].
    fn complete(
        &self,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for crop disease diagnosis
pub trait CropDoctorService: Send + Sync {
    fn diagnose_crop(
        &self,
        input: DiagnoseCropInput,
    ) -> impl Future<Output = Result<CropDiagnosis, CoreError>> + Send;
}
