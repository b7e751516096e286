//! Input validation for the quote form.
//!
//! Every error maps to a fixed Portuguese message shown to the user as the
//! plain-text body of a 400 response. Checks short-circuit; only the first
//! failure is reported.

use thiserror::Error;

/// Client-input validation errors. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingRequiredField,
    #[error("O valor total deve ser um número válido.")]
    InvalidNumber,
    #[error("O valor total deve ser maior que zero.")]
    NonPositiveValue,
    #[error("Por favor, insira um CPF (11 dígitos) ou CNPJ (14 dígitos) válido.")]
    InvalidTaxId,
}

/// Trim a submitted field and treat the empty result as absent. HTML forms
/// send empty strings for untouched inputs, so the two cases are the same.
pub fn normalize(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse the total value and require it to be strictly positive.
/// NaN fails the positivity check along with zero and negatives.
pub fn parse_valor_total(raw: &str) -> Result<f64, ValidationError> {
    let valor: f64 = raw.parse().map_err(|_| ValidationError::InvalidNumber)?;
    if valor > 0.0 {
        Ok(valor)
    } else {
        Err(ValidationError::NonPositiveValue)
    }
}

/// Validate a CPF/CNPJ: after stripping non-digit characters, exactly 11
/// or 14 digits must remain. Punctuation and digit content are free-form.
pub fn validate_cpf_cnpj(raw: &str) -> Result<(), ValidationError> {
    let digits = raw.chars().filter(|c| c.is_ascii_digit()).count();
    if digits == 11 || digits == 14 {
        Ok(())
    } else {
        Err(ValidationError::InvalidTaxId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_treats_blank_as_absent() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("".to_string())), None);
        assert_eq!(normalize(Some("   ".to_string())), None);
        assert_eq!(
            normalize(Some("  Maria  ".to_string())),
            Some("Maria".to_string())
        );
    }

    #[test]
    fn parse_valor_total_accepts_positive_numbers() {
        assert_eq!(parse_valor_total("1000"), Ok(1000.0));
        assert_eq!(parse_valor_total("0.01"), Ok(0.01));
    }

    #[test]
    fn parse_valor_total_rejects_non_numbers() {
        assert_eq!(parse_valor_total("abc"), Err(ValidationError::InvalidNumber));
        assert_eq!(
            parse_valor_total("10,50"),
            Err(ValidationError::InvalidNumber)
        );
    }

    #[test]
    fn parse_valor_total_rejects_non_positive() {
        assert_eq!(parse_valor_total("0"), Err(ValidationError::NonPositiveValue));
        assert_eq!(
            parse_valor_total("-10"),
            Err(ValidationError::NonPositiveValue)
        );
        assert_eq!(
            parse_valor_total("NaN"),
            Err(ValidationError::NonPositiveValue)
        );
    }

    #[test]
    fn cpf_with_punctuation_passes() {
        assert!(validate_cpf_cnpj("123.456.789-01").is_ok());
        assert!(validate_cpf_cnpj("12345678901").is_ok());
    }

    #[test]
    fn cnpj_with_punctuation_passes() {
        assert!(validate_cpf_cnpj("12.345.678/0001-90").is_ok());
        assert!(validate_cpf_cnpj("12345678000190").is_ok());
    }

    #[test]
    fn wrong_digit_counts_fail() {
        assert_eq!(validate_cpf_cnpj("123"), Err(ValidationError::InvalidTaxId));
        assert_eq!(
            validate_cpf_cnpj("123456789012"),
            Err(ValidationError::InvalidTaxId)
        );
        assert_eq!(
            validate_cpf_cnpj("123456789012345"),
            Err(ValidationError::InvalidTaxId)
        );
    }

    #[test]
    fn messages_match_the_form_contract() {
        assert_eq!(
            ValidationError::InvalidNumber.to_string(),
            "O valor total deve ser um número válido."
        );
        assert!(ValidationError::InvalidTaxId.to_string().contains("CPF"));
    }
}
