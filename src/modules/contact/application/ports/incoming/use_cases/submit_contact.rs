use async_trait::async_trait;

use crate::shared::content::MissingFields;

#[derive(Debug, Clone, Default)]
pub struct SubmitContactCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    MissingFields(#[from] MissingFields),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, command: SubmitContactCommand) -> Result<(), SubmitContactError>;
}
