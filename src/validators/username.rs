use super::ValidationError;

/// Length rules for admin usernames. Lengths count characters of the
/// trimmed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsernamePolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for UsernamePolicy {
    /// Present and at most 64 characters.
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 64,
        }
    }
}

impl UsernamePolicy {
    /// Rules the admin login page enforces before submitting.
    #[must_use]
    pub fn login_form() -> Self {
        Self {
            min_length: 3,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn min(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    /// # Errors
    ///
    /// Returns the first rule the username breaks.
    pub fn validate(&self, username: &str) -> Result<(), ValidationError> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::UsernameEmpty);
        }

        let len = trimmed.chars().count();
        if len < self.min_length {
            return Err(ValidationError::UsernameTooShort(self.min_length));
        }
        if len > self.max_length {
            return Err(ValidationError::UsernameTooLong(self.max_length));
        }

        Ok(())
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    UsernamePolicy::default().validate(username)
}
