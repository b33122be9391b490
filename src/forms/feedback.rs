// src/forms/feedback.rs  -  Complaints & inquiries
use super::{is_valid_email, Submission, ValidationError};
use crate::dom::Document;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub feedback_type:  String,
    pub product_ref:    String,
    pub details:        String,
    pub feedback_name:  String,
    pub feedback_email: String,
    pub feedback_phone: String,
}

impl Submission for FeedbackRequest {
    const LABEL: &'static str = "Feedback/Inquiry";
    const SUCCESS_KEY: &'static str = "alertSuccessFeedback";
    const MISSING_KEY: &'static str = "alertMissingFeedback";

    fn read(doc: &Document) -> Self {
        Self {
            feedback_type:  doc.field("feedbackType"),
            product_ref:    doc.field("productReference"),
            details:        doc.field("details"),
            feedback_name:  doc.field("feedbackName"),
            feedback_email: doc.field("feedbackEmail"),
            feedback_phone: doc.field("feedbackPhone"),
        }
    }

    // Phone is optional here and not pattern-checked.
    fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.feedback_type, &self.details, &self.feedback_name, &self.feedback_email];
        if required.iter().any(|f| f.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.feedback_email) {
            return Err(ValidationError::Email);
        }
        Ok(())
    }
}
