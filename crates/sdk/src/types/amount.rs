//! Credit amounts
//!
//! The daemon expects every amount as a JSON float. Call-sites accept floats,
//! integers and numeric strings and coerce them through [`IntoAmount`].

use crate::error::{LbryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount of LBRY credits, always serialized as a float
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(LbryError::Validation(format!(
                "amount must be a finite number, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversion into an [`Amount`]
pub trait IntoAmount {
    fn into_amount(self) -> Result<Amount>;
}

impl IntoAmount for Amount {
    fn into_amount(self) -> Result<Amount> {
        Ok(self)
    }
}

impl IntoAmount for f64 {
    fn into_amount(self) -> Result<Amount> {
        Amount::new(self)
    }
}

impl IntoAmount for f32 {
    fn into_amount(self) -> Result<Amount> {
        Amount::new(f64::from(self))
    }
}

macro_rules! int_into_amount {
    ($($t:ty),*) => {
        $(
            impl IntoAmount for $t {
                fn into_amount(self) -> Result<Amount> {
                    Amount::new(self as f64)
                }
            }
        )*
    };
}

int_into_amount!(i32, i64, u32, u64);

impl IntoAmount for &str {
    fn into_amount(self) -> Result<Amount> {
        let value: f64 = self.trim().parse().map_err(|_| {
            LbryError::Validation(format!("amount must be numeric, got {:?}", self))
        })?;
        Amount::new(value)
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<Amount> {
        self.as_str().into_amount()
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> Result<Amount> {
        self.as_str().into_amount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integers_serialize_as_floats() {
        let amount = 1i32.into_amount().unwrap();
        let value = serde_json::to_value(amount).unwrap();
        assert_eq!(value, json!(1.0));
        assert!(value.is_f64());
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!("5".into_amount().unwrap().as_f64(), 5.0);
        assert_eq!(" 0.25 ".into_amount().unwrap().as_f64(), 0.25);
        assert_eq!(String::from("3").into_amount().unwrap().as_f64(), 3.0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            "five".into_amount(),
            Err(LbryError::Validation(_))
        ));
        assert!("inf".into_amount().is_err());
        assert!(f64::NAN.into_amount().is_err());
    }
}
