//! Input validation helpers
//!
//! Centralized field constraints for the pedido handlers. Error details are
//! surfaced verbatim to the caller, so the messages are user-facing text.

use crate::utils::AppError;

// ── Field limits ────────────────────────────────────────────────────

/// Item names
pub const MAX_ITEM_LEN: usize = 200;

// ── Wire messages ───────────────────────────────────────────────────

/// Detail returned whenever a non-positive quantity is submitted
pub const MSG_QUANTIDADE_INVALIDA: &str = "A quantidade deve ser maior que zero";

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a quantity is strictly positive.
pub fn validate_quantidade(quantidade: i32) -> Result<(), AppError> {
    if quantidade <= 0 {
        return Err(AppError::validation(MSG_QUANTIDADE_INVALIDA));
    }
    Ok(())
}

/// Validate that a required text field is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!(
            "O campo {field} não pode ser vazio"
        )));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "O campo {field} é muito longo ({} caracteres, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantidade() {
        assert!(validate_quantidade(1).is_ok());
        assert!(validate_quantidade(0).is_err());
        assert!(validate_quantidade(-3).is_err());
    }

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("Pizza", "item", MAX_ITEM_LEN).is_ok());
        assert!(validate_required_text("", "item", MAX_ITEM_LEN).is_err());
        assert!(validate_required_text("   ", "item", MAX_ITEM_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(MAX_ITEM_LEN + 1), "item", MAX_ITEM_LEN).is_err());
    }
}
