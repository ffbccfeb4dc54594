//! Provides a display-oriented type for USD values quoted by the price source.

use std::fmt;

/// A USD value, kept as the raw quoted float.
///
/// The quoted price is carried through unrounded; rounding happens only when
/// a string is produced for display. Two decimals is the default rendering,
/// conversion results use three.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UsdAmount(f64);

impl UsdAmount {
    /// Creates a new `UsdAmount` from a raw value, typically an API quote.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw, unrounded value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Formats the amount with the dollar symbol (e.g., "$25.34").
    pub fn to_string_with_symbol(&self) -> String {
        format!("${}", self)
    }

    /// Formats the amount to three decimal places (e.g., "25.000").
    ///
    /// Used for conversion results, where the extra digit matters for
    /// low-priced coins.
    pub fn display_precise(&self) -> String {
        format!("{:.3}", self.0)
    }

    /// Formats the amount with thousands separators (e.g., "65,432.11").
    pub fn display_grouped(&self) -> String {
        let plain = format!("{:.2}", self.0);
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        let (sign, digits) = match int_part.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", int_part),
        };

        let mut grouped = String::new();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// The default `Display` formats to two decimal places (e.g., "25.34").
impl fmt::Display for UsdAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
