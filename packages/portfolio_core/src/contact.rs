//! Contact-form payload and submit state machine.
//!
//! The one fallible external operation in the application is the form POST.
//! The state transitions live here so they can be tested without HTTP: a
//! successful submission clears every field, a failed one leaves them
//! untouched, and either banner is dismissed after a fixed timeout.

use serde::Serialize;

/// How long the success or error banner stays on screen, in seconds.
pub const BANNER_TIMEOUT_SECS: u64 = 5;

/// The structured payload POSTed to the form relay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "projectType")]
    pub project_type: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            project_type: "general".to_string(),
        }
    }
}

impl ContactForm {
    /// All required fields filled in. The project type always has a value.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Reset every field, including the project type, to its initial value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Submission lifecycle of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// Fold the relay result back into the form.
///
/// Success clears every field; failure leaves them untouched so the user can
/// retry without retyping.
pub fn apply_submit_result(form: &mut ContactForm, succeeded: bool) -> SubmitStatus {
    if succeeded {
        form.clear();
        SubmitStatus::Succeeded
    } else {
        SubmitStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Bot project".to_string(),
            message: "Let's automate something.".to_string(),
            project_type: "bot".to_string(),
        }
    }

    #[test]
    fn success_clears_all_fields() {
        let mut form = filled_form();
        let status = apply_submit_result(&mut form, true);
        assert_eq!(status, SubmitStatus::Succeeded);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn failure_leaves_fields_untouched() {
        let mut form = filled_form();
        let status = apply_submit_result(&mut form, false);
        assert_eq!(status, SubmitStatus::Failed);
        assert_eq!(form, filled_form());
    }

    #[test]
    fn completeness_requires_every_field() {
        let mut form = filled_form();
        assert!(form.is_complete());
        form.email = "   ".to_string();
        assert!(!form.is_complete());
    }

    #[test]
    fn default_project_type_is_general() {
        assert_eq!(ContactForm::default().project_type, "general");
    }

    #[test]
    fn payload_serializes_with_relay_field_names() {
        let json = serde_json::to_string(&filled_form()).unwrap();
        assert!(json.contains("\"projectType\":\"bot\""));
        assert!(json.contains("\"email\":\"ada@example.com\""));
    }
}
