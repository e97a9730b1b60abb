use validator::Validate;

use crate::{ContactError, Draft};

/// Validates a [`Draft`] and derives the `mailto:` URI that hands the
/// pre-filled message to the user's mail client.
pub struct Composer {
    recipient: String,
}

impl Composer {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    /// The mail subject, before percent-encoding.
    pub fn subject(&self, draft: &Draft) -> String {
        format!(
            "Survey Inquiry from {} {}",
            draft.first_name, draft.last_name
        )
    }

    /// The mail body, before percent-encoding.
    pub fn body(&self, draft: &Draft) -> String {
        format!(
            "Phone: {}\nSurvey Type: {}\n\nMessage:\n{}",
            draft.phone, draft.survey_type, draft.message
        )
    }

    /// Requires `firstName`, `email`, and `message` to be non-empty; the
    /// draft is left untouched either way. Delivery of the resulting URI is
    /// entirely up to the user's mail client.
    pub fn submit(&self, draft: &Draft) -> Result<String, ContactError> {
        draft
            .validate()
            .map_err(|_| ContactError::MissingRequiredFields)?;

        let subject = self.subject(draft);
        let body = self.body(draft);

        Ok(format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }
}
