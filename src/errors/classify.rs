//! Failure classification and user-facing message translation.
//!
//! # Responsibilities
//! - Map a raw failure onto one of a fixed set of categories
//! - Produce the localized message shown to the end user
//!
//! # Design Decisions
//! - Classification is an ordered rule table with first-match-wins semantics;
//!   specific patterns (e.g. "Invalid login credentials") sit above vaguer
//!   ones ("JWT", "Network") that would otherwise mask them
//! - Pattern texts for backend-produced errors are the wire contract and are
//!   matched verbatim
//! - Always returns a non-empty string, never fails, regardless of input

use std::fmt;

/// Category of a classified failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Could not reach the server at all (fetch/transport failure).
    ConnectionFailed,
    /// Wrong login or password.
    InvalidCredentials,
    /// Account exists but the email is not confirmed yet.
    EmailNotConfirmed,
    /// Phone-based signup is disabled in the deployment's auth settings.
    PhoneSignupsDisabled,
    /// Signup with an email that is already registered.
    AlreadyRegistered,
    /// Password below the minimum length.
    PasswordTooShort,
    /// Malformed email address.
    InvalidEmail,
    /// Access-token failure; the session needs to be re-established.
    SessionExpired,
    /// Generic network-layer failure.
    NetworkFailure,
    /// The client itself is missing its backend configuration.
    MissingConfiguration,
    /// Anything not recognized above.
    Other,
}

/// Ordered classification rules. Evaluation stops at the first pattern list
/// with a match, so order is load-bearing.
const RULES: &[(&[&str], ErrorCategory)] = &[
    (&["Failed to fetch", "fetch"], ErrorCategory::ConnectionFailed),
    (&["Invalid login credentials"], ErrorCategory::InvalidCredentials),
    (&["Email not confirmed"], ErrorCategory::EmailNotConfirmed),
    (&["Phone signups are disabled"], ErrorCategory::PhoneSignupsDisabled),
    (&["User already registered"], ErrorCategory::AlreadyRegistered),
    (&["Password should be at least"], ErrorCategory::PasswordTooShort),
    (&["Invalid email"], ErrorCategory::InvalidEmail),
    (&["JWT"], ErrorCategory::SessionExpired),
    (&["Network"], ErrorCategory::NetworkFailure),
    (&["Missing backend configuration"], ErrorCategory::MissingConfiguration),
];

/// Message returned when no error value is available at all.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Произошла неизвестная ошибка";

impl ErrorCategory {
    /// Classify a raw error description.
    pub fn classify(message: &str) -> Self {
        for (patterns, category) in RULES {
            if patterns.iter().any(|p| message.contains(p)) {
                return *category;
            }
        }
        ErrorCategory::Other
    }

    /// The fixed localized message for this category.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorCategory::ConnectionFailed => {
                "Ошибка подключения к серверу. Проверьте интернет-соединение и попробуйте ещё раз."
            }
            ErrorCategory::InvalidCredentials => "Неверный email/телефон или пароль",
            ErrorCategory::EmailNotConfirmed => {
                "Email не подтвержден. Проверьте почту и подтвердите регистрацию."
            }
            ErrorCategory::PhoneSignupsDisabled => {
                "Регистрация по телефону отключена на сервере. Включите Phone Auth в настройках аутентификации."
            }
            ErrorCategory::AlreadyRegistered => "Пользователь с таким email уже зарегистрирован",
            ErrorCategory::PasswordTooShort => "Пароль должен содержать минимум 6 символов",
            ErrorCategory::InvalidEmail => "Некорректный email адрес",
            ErrorCategory::SessionExpired => "Ошибка авторизации. Попробуйте войти заново.",
            ErrorCategory::NetworkFailure => "Ошибка сети. Проверьте подключение к интернету.",
            ErrorCategory::MissingConfiguration => {
                "Ошибка конфигурации. Обратитесь к администратору."
            }
            ErrorCategory::Other => {
                "Произошла ошибка. Попробуйте ещё раз или обратитесь в поддержку."
            }
        }
    }
}

/// Translate any displayable failure into its localized user message.
pub fn translate<E: fmt::Display + ?Sized>(error: &E) -> &'static str {
    ErrorCategory::classify(&error.to_string()).user_message()
}

/// Translate an optional failure; an absent error yields the generic
/// unknown-error message.
pub fn translate_opt<E: fmt::Display>(error: Option<&E>) -> &'static str {
    match error {
        Some(error) => translate(error),
        None => UNKNOWN_ERROR_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClientError;

    #[test]
    fn every_category_is_reachable() {
        let cases = [
            ("Failed to fetch", ErrorCategory::ConnectionFailed),
            ("Invalid login credentials", ErrorCategory::InvalidCredentials),
            ("Email not confirmed", ErrorCategory::EmailNotConfirmed),
            ("Phone signups are disabled", ErrorCategory::PhoneSignupsDisabled),
            ("User already registered", ErrorCategory::AlreadyRegistered),
            ("Password should be at least 6 characters", ErrorCategory::PasswordTooShort),
            ("Invalid email or phone", ErrorCategory::InvalidEmail),
            ("invalid JWT: unable to parse", ErrorCategory::SessionExpired),
            ("Network request failed", ErrorCategory::NetworkFailure),
            ("Missing backend configuration: BASE_URL is not set", ErrorCategory::MissingConfiguration),
            ("something else entirely", ErrorCategory::Other),
        ];

        for (message, expected) in cases {
            assert_eq!(ErrorCategory::classify(message), expected, "message: {message}");
        }
    }

    #[test]
    fn specific_rule_wins_over_jwt() {
        // "Invalid login credentials" is checked before the JWT rule.
        assert_eq!(
            ErrorCategory::classify("Invalid login credentials due to JWT"),
            ErrorCategory::InvalidCredentials
        );
    }

    #[test]
    fn fetch_failure_wins_over_generic_network() {
        assert_eq!(
            ErrorCategory::classify("Failed to fetch: Network unreachable"),
            ErrorCategory::ConnectionFailed
        );
    }

    #[test]
    fn absent_error_translates_to_unknown() {
        assert_eq!(translate_opt::<ClientError>(None), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn unrecognized_exhaustion_wrapper_hits_the_fallback() {
        // The generic wrapper text an exhausted retry produces for opaque
        // failures matches no rule.
        assert_eq!(
            translate("Operation failed after retries"),
            ErrorCategory::Other.user_message()
        );
    }

    #[test]
    fn translation_is_never_empty() {
        let categories = [
            ErrorCategory::ConnectionFailed,
            ErrorCategory::InvalidCredentials,
            ErrorCategory::EmailNotConfirmed,
            ErrorCategory::PhoneSignupsDisabled,
            ErrorCategory::AlreadyRegistered,
            ErrorCategory::PasswordTooShort,
            ErrorCategory::InvalidEmail,
            ErrorCategory::SessionExpired,
            ErrorCategory::NetworkFailure,
            ErrorCategory::MissingConfiguration,
            ErrorCategory::Other,
        ];
        for category in categories {
            assert!(!category.user_message().is_empty());
        }
        assert!(!UNKNOWN_ERROR_MESSAGE.is_empty());
    }

    #[test]
    fn client_errors_classify_through_display() {
        let error = ClientError::MissingConfiguration("ANON_KEY is not set");
        assert_eq!(translate(&error), ErrorCategory::MissingConfiguration.user_message());
    }
}
