use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::modules::contact::application::domain::entities::{is_valid_phone, ContactMessage};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactCommand, SubmitContactError, SubmitContactUseCase,
};
use crate::modules::email::application::address::is_deliverable_address;
use crate::modules::email::application::ports::outgoing::{EmailSender, OutgoingEmail};
use crate::shared::content::RequiredFields;

/// Where contact messages are delivered.
#[derive(Clone)]
pub struct ContactInbox {
    pub sender: Arc<dyn EmailSender + Send + Sync>,
    pub address: String,
}

impl fmt::Debug for ContactInbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactInbox")
            .field("sender", &"<dyn EmailSender>")
            .field("address", &self.address)
            .finish()
    }
}

/// Without an inbox, submissions are only logged.
#[derive(Debug, Clone)]
pub struct SubmitContactService {
    inbox: Option<ContactInbox>,
}

impl SubmitContactService {
    pub fn new(inbox: Option<ContactInbox>) -> Self {
        Self { inbox }
    }

    fn validate(command: SubmitContactCommand) -> Result<ContactMessage, SubmitContactError> {
        let mut required = RequiredFields::new();
        let name = required.text("name", command.name);
        let email = required.text("email", command.email);
        let phone = required.text("phone", command.phone);
        let message = required.text("message", command.message);
        required.finish()?;

        if !is_deliverable_address(&email) {
            return Err(SubmitContactError::InvalidEmail);
        }

        if !is_valid_phone(&phone) {
            return Err(SubmitContactError::InvalidPhone);
        }

        Ok(ContactMessage {
            name,
            email,
            phone,
            message,
        })
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, command: SubmitContactCommand) -> Result<(), SubmitContactError> {
        let contact = Self::validate(command)?;

        let Some(inbox) = &self.inbox else {
            info!(
                name = %contact.name,
                email = %contact.email,
                "Contact form submitted (no inbox configured)"
            );
            return Ok(());
        };

        inbox
            .sender
            .send_email(OutgoingEmail {
                to: inbox.address.clone(),
                reply_to: Some(contact.email.clone()),
                subject: contact.subject(),
                body: contact.body(),
            })
            .await
            .map_err(|e| SubmitContactError::DeliveryFailed(e.to_string()))?;

        info!(email = %contact.email, "Contact form forwarded");
        Ok(())
    }
}
