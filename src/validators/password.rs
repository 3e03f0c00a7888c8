use super::ValidationError;

/// Length rules for admin passwords.
///
/// ```
/// use jobboard_admin::validators::PasswordPolicy;
///
/// let form = PasswordPolicy::login_form();
/// assert!(form.validate("secret1").is_ok());
/// assert!(form.validate("12345").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    /// Caps the input handed to Argon2.
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 128,
        }
    }
}

impl PasswordPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules the admin login page enforces before submitting.
    #[must_use]
    pub fn login_form() -> Self {
        Self {
            min_length: 6,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn min(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    #[must_use]
    pub fn max(mut self, len: usize) -> Self {
        self.max_length = len;
        self
    }

    /// # Errors
    ///
    /// Returns the first rule the password breaks. Passwords are not trimmed.
    pub fn validate(&self, password: &str) -> Result<(), ValidationError> {
        if password.is_empty() {
            return Err(ValidationError::PasswordEmpty);
        }

        let len = password.chars().count();
        if len < self.min_length {
            return Err(ValidationError::PasswordTooShort(self.min_length));
        }
        if len > self.max_length {
            return Err(ValidationError::PasswordTooLong(self.max_length));
        }

        Ok(())
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    PasswordPolicy::default().validate(password)
}
