//! Contact details captured on the lead step

use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Simple `local@domain.tld` shape
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Name, phone and an optional email. Held in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadContact {
    pub name: String,
    pub phone: String,
    /// Empty means not provided
    pub email: String,
}

impl LeadContact {
    /// Email, if one was entered
    pub fn email(&self) -> Option<&str> {
        let trimmed = self.email.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Check the email shape. An absent email passes.
    pub fn validate_email(&self) -> Result<(), ValidationError> {
        match self.email() {
            Some(email) if !is_valid_email(email) => Err(ValidationError::InvalidEmail),
            _ => Ok(()),
        }
    }

    /// Required-field check performed by the lead form before submitting
    pub fn validate_required(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_with_email(email: &str) -> LeadContact {
        LeadContact {
            name: "Ada Lovelace".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn test_missing_email_is_accepted() {
        assert_eq!(lead_with_email("").validate_email(), Ok(()));
        assert_eq!(lead_with_email("   ").validate_email(), Ok(()));
        assert_eq!(lead_with_email("   ").email(), None);
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        assert_eq!(
            lead_with_email("not-an-email").validate_email(),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_required_fields() {
        let mut lead = lead_with_email("");
        assert_eq!(lead.validate_required(), Ok(()));

        lead.phone = " ".to_string();
        assert_eq!(lead.validate_required(), Err(ValidationError::MissingPhone));

        lead.name.clear();
        assert_eq!(lead.validate_required(), Err(ValidationError::MissingName));
    }
}
