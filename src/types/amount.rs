use crate::types::errors::AmountError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// A non-negative transaction magnitude.
///
/// The sign of a transaction lives in its `TransactionType`, never in the amount,
/// so every constructor takes the absolute value of its input.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);
    pub const MAX: Amount = Amount(Decimal::MAX);

    pub fn new(value: Decimal) -> Self {
        Amount(value.abs())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Rounds a value to cents, half away from zero.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the longest prefix of `value` that reads as a decimal number,
/// after skipping leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Returns an empty string when no digits are found.
pub fn numeric_prefix(value: &str) -> &str {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    &value[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.width$}", round_to_cents(self.0), width = DISPLAY_DECIMAL_PLACES as usize)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::Empty);
        }

        if numeric_prefix(value).len() != value.len() {
            return Err(AmountError::InvalidFormat(value.to_string()));
        }

        let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(index) => (&unsigned[..index], Some(&unsigned[index + 1..])),
            None => (unsigned, None),
        };

        //NOTE: "5." and ".5" are accepted here but rust_decimal wants digits on both sides of the point
        let mantissa = mantissa.strip_suffix('.').unwrap_or(mantissa);
        let mantissa = if mantissa.starts_with('.') {
            format!("0{mantissa}")
        } else {
            mantissa.to_string()
        };

        let decimal = match exponent {
            Some(exponent) => Decimal::from_scientific(&format!("{mantissa}e{exponent}")),
            None => Decimal::from_str(&mantissa),
        }
        .map_err(|error| AmountError::OutOfRange(format!("{value} ({error})")))?;

        Ok(Amount::new(decimal))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;

        if value.is_sign_negative() && !value.is_zero() {
            return Err(de::Error::custom(AmountError::Negative(value.to_string())));
        }

        Ok(Amount(value))
    }
}
