use serde::Serialize;

use crate::host::Notifier;

pub const CONFIRMATION: &str = "Message envoyé ! Je vous répondrai bientôt 🚀";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// The contact form's inputs, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What was in the form when it was sent.
pub type Submission = ContactForm;

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Sends the message, which for now means logging it locally, confirms
    /// it to the reader and clears the form.
    pub fn submit(&mut self, notifier: &impl Notifier) -> Submission {
        let submission = std::mem::take(self);
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("Contact form submitted: {json}"),
            Err(error) => log::info!("Contact form submitted: {submission:?} ({error})"),
        }
        notifier.notify(CONFIRMATION);
        submission
    }
}
