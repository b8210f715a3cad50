/// Validation utilities for user input

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result` so validators chain with `?`.
    pub fn into_result(self) -> crate::core::error::Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

/// Validate username (login only checks presence, the backend owns the rules)
pub fn validate_username(username: &str) -> ValidationResult {
    if username.trim().is_empty() {
        return ValidationResult::err("Username is required");
    }

    ValidationResult::ok()
}

/// Validate password presence
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    ValidationResult::ok()
}

/// Validate a currency code.
///
/// Accepts the native `XRP`, three-character standard codes and 40-hex
/// non-standard codes. `field` names the input in the error message.
pub fn validate_currency_code(code: &str, field: &str) -> ValidationResult {
    let code = code.trim();
    if code.is_empty() {
        return ValidationResult::err(format!("{} currency is required", field));
    }

    let is_standard = code.len() == 3 && code.chars().all(|c| c.is_ascii_alphanumeric());
    let is_hex = code.len() == 40 && code.chars().all(|c| c.is_ascii_hexdigit());
    if !is_standard && !is_hex {
        return ValidationResult::err(format!("{} currency '{}' is not a valid currency code", field, code));
    }

    ValidationResult::ok()
}

/// Validate an amount: must parse as a finite number greater than zero.
pub fn validate_amount(amount: &str, field: &str) -> ValidationResult {
    let amount = amount.trim();
    if amount.is_empty() {
        return ValidationResult::err(format!("{} amount is required", field));
    }

    match amount.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => ValidationResult::ok(),
        Ok(_) => ValidationResult::err(format!("{} amount must be greater than 0", field)),
        Err(_) => ValidationResult::err(format!("{} amount must be a number", field)),
    }
}

/// Validate a classic ledger address: `r` followed by base58 characters,
/// 25 to 35 characters in total.
pub fn validate_destination(address: &str) -> ValidationResult {
    let address = address.trim();
    if address.is_empty() {
        return ValidationResult::err("Destination is required");
    }

    let base58 = |c: char| c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l');
    if !address.starts_with('r') || !(25..=35).contains(&address.len()) || !address.chars().all(base58) {
        return ValidationResult::err(format!("Destination '{}' is not a valid address", address));
    }

    ValidationResult::ok()
}
