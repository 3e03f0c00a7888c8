use crate::ValidationError;

/// Display language of the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Mr,
}

impl Language {
    /// The code persisted under the language storage key.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Mr => "mr",
        }
    }

    /// Unknown codes yield `None`; callers fall back to English.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "mr" => Some(Language::Mr),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Mr,
            Language::Mr => Language::En,
        }
    }
}

/// Every fixed string the controller puts on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    UsernameRequired,
    PasswordRequired,
    UsernameTooShort,
    UsernameTooLong,
    PasswordTooShort,
    PasswordTooLong,
    InvalidCredentials,
    ConnectionError,
    Success,
    SignIn,
}

impl Message {
    pub fn text(self, language: Language) -> &'static str {
        match (self, language) {
            (Message::UsernameRequired, Language::En) => "Please enter your username",
            (Message::UsernameRequired, Language::Mr) => "कृपया आपले वापरकर्तानाव प्रविष्ट करा",
            (Message::PasswordRequired, Language::En) => "Please enter your password",
            (Message::PasswordRequired, Language::Mr) => "कृपया आपला पासवर्ड प्रविष्ट करा",
            (Message::UsernameTooShort, Language::En) => {
                "Username must be at least 3 characters long"
            }
            (Message::UsernameTooShort, Language::Mr) => "वापरकर्तानाव किमान 3 अक्षरांचे असावे",
            (Message::UsernameTooLong, Language::En) => "Username is too long",
            (Message::UsernameTooLong, Language::Mr) => "वापरकर्तानाव खूप मोठे आहे",
            (Message::PasswordTooShort, Language::En) => {
                "Password must be at least 6 characters long"
            }
            (Message::PasswordTooShort, Language::Mr) => "पासवर्ड किमान 6 अक्षरांचा असावा",
            (Message::PasswordTooLong, Language::En) => "Password is too long",
            (Message::PasswordTooLong, Language::Mr) => "पासवर्ड खूप मोठा आहे",
            (Message::InvalidCredentials, Language::En) => "Invalid username or password",
            (Message::InvalidCredentials, Language::Mr) => "अवैध वापरकर्तानाव किंवा पासवर्ड",
            (Message::ConnectionError, Language::En) => {
                "Connection error. Please check your network and try again."
            }
            (Message::ConnectionError, Language::Mr) => {
                "कनेक्शन त्रुटी. कृपया आपले नेटवर्क तपासा आणि पुन्हा प्रयत्न करा."
            }
            (Message::Success, Language::En) => "Success!",
            (Message::Success, Language::Mr) => "यशस्वी!",
            (Message::SignIn, Language::En) => "Sign In",
            (Message::SignIn, Language::Mr) => "साइन इन करा",
        }
    }
}

impl From<&ValidationError> for Message {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::UsernameEmpty => Message::UsernameRequired,
            ValidationError::UsernameTooShort(_) => Message::UsernameTooShort,
            ValidationError::UsernameTooLong(_) => Message::UsernameTooLong,
            ValidationError::PasswordEmpty => Message::PasswordRequired,
            ValidationError::PasswordTooShort(_) => Message::PasswordTooShort,
            ValidationError::PasswordTooLong(_) => Message::PasswordTooLong,
        }
    }
}
