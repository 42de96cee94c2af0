use crate::MfError;

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, MfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: f64, what: &'static str) -> Result<f64, MfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(MfError::InvalidArg { what })
    }
}

/// Finite and not below zero.
pub fn ensure_non_negative(v: f64, what: &'static str) -> Result<f64, MfError> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(MfError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(1e-9, "diameter").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "diameter"),
            Err(MfError::InvalidArg { what: "diameter" })
        ));
        assert!(ensure_positive(-1.0, "diameter").is_err());
        assert!(matches!(
            ensure_positive(f64::INFINITY, "diameter"),
            Err(MfError::NonFinite { .. })
        ));
    }

    #[test]
    fn ensure_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative(0.0, "roughness").unwrap(), 0.0);
        assert!(ensure_non_negative(-1e-12, "roughness").is_err());
    }
}
