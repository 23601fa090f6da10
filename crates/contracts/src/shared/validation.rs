use thiserror::Error;

/// Client-side form validation failure. Rendered verbatim in a toast, so the
/// messages read as instructions to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter {0}.")]
    Missing(&'static str),
    #[error("{field} must be {expected}.")]
    Invalid {
        field: &'static str,
        expected: &'static str,
    },
}

pub fn require(label: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Missing(label))
    } else {
        Ok(())
    }
}

/// Empty is accepted; anything else must parse as a non-negative number.
pub fn optional_amount(label: &'static str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    match value.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.is_finite() => Ok(()),
        _ => Err(ValidationError::Invalid {
            field: label,
            expected: "a non-negative number",
        }),
    }
}

pub fn positive_quantity(label: &'static str, value: &str) -> Result<(), ValidationError> {
    require(label, value)?;
    match value.trim().parse::<u64>() {
        Ok(v) if v > 0 => Ok(()),
        _ => Err(ValidationError::Invalid {
            field: label,
            expected: "a whole number greater than zero",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_whitespace() {
        assert_eq!(
            require("a subject", "   "),
            Err(ValidationError::Missing("a subject"))
        );
        assert!(require("a subject", "x").is_ok());
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::Missing("a product name").to_string(),
            "Please enter a product name."
        );
        assert_eq!(
            ValidationError::Invalid { field: "Quantity", expected: "positive" }.to_string(),
            "Quantity must be positive."
        );
    }

    #[test]
    fn amounts_and_quantities() {
        assert!(optional_amount("Price", "").is_ok());
        assert!(optional_amount("Price", "12.50").is_ok());
        assert!(optional_amount("Price", "-1").is_err());
        assert!(optional_amount("Price", "abc").is_err());
        assert!(positive_quantity("Quantity", "3").is_ok());
        assert!(positive_quantity("Quantity", "0").is_err());
        assert!(positive_quantity("Quantity", "2.5").is_err());
        assert_eq!(
            positive_quantity("Quantity", ""),
            Err(ValidationError::Missing("Quantity"))
        );
    }
}
