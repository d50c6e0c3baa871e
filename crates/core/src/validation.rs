//! Validation of raw transaction form input.
//!
//! Runs before any network call. Failing input never reaches the API client.

use crate::transaction::NewTransaction;
use thiserror::Error;

/// Errors produced while validating form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields")]
    MissingFields,

    #[error("Amount must be a positive number")]
    InvalidAmount,
}

/// Validate the three form fields and build the request body.
///
/// No field may be empty. Sender and recipient are passed through as typed.
/// The amount, ignoring surrounding whitespace, must parse as a finite number
/// strictly greater than zero.
pub fn validate_transaction_input(
    sender: &str,
    recipient: &str,
    amount: &str,
) -> Result<NewTransaction, ValidationError> {
    if sender.is_empty() || recipient.is_empty() || amount.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let amount = parse_positive_amount(amount.trim())?;
    Ok(NewTransaction::new(sender, recipient, amount))
}

fn parse_positive_amount(amount: &str) -> Result<f64, ValidationError> {
    match amount.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidAmount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let tx = validate_transaction_input("alice", "bob", "12.5").unwrap();

        assert_eq!(tx.sender, "alice");
        assert_eq!(tx.recipient, "bob");
        assert_eq!(tx.amount, 12.5);
    }

    #[test]
    fn test_parties_kept_as_typed() {
        let tx = validate_transaction_input("  alice ", "bob\n", " 1 ").unwrap();

        assert_eq!(tx.sender, "  alice ");
        assert_eq!(tx.recipient, "bob\n");
        assert_eq!(tx.amount, 1.0);
    }

    #[test]
    fn test_whitespace_party_is_not_empty() {
        let tx = validate_transaction_input(" ", "bob", "1").unwrap();

        assert_eq!(tx.sender, " ");
        assert_eq!(
            validate_transaction_input("alice", "bob", "   "),
            Err(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn test_any_empty_field_rejected() {
        assert_eq!(
            validate_transaction_input("", "bob", "1"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_transaction_input("alice", "", "1"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_transaction_input("alice", "bob", ""),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        for amount in ["0", "-1", "-0.01", "0.0"] {
            assert_eq!(
                validate_transaction_input("alice", "bob", amount),
                Err(ValidationError::InvalidAmount),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        for amount in ["abc", "1,5", "NaN", "inf", "12abc"] {
            assert_eq!(
                validate_transaction_input("alice", "bob", amount),
                Err(ValidationError::InvalidAmount),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill all fields"
        );
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "Amount must be a positive number"
        );
    }
}
