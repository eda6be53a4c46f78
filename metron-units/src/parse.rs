//! Unit and quantity string parsing - "in", "12.5 ft"
//!
//! Parsing is always scoped to one category: `parse_unit::<LengthUnit>("kg")`
//! is an `InvalidUnit` error, not a weight.

use metron_core::{MeasurementError, Result};
use crate::{Quantity, UnitCapability};

/// Parse a unit of category `U` by name, symbol or alias (case-insensitive)
pub fn parse_unit<U: UnitCapability>(s: &str) -> Result<U> {
    let s = s.trim();

    U::all()
        .iter()
        .copied()
        .find(|unit| {
            unit.name().eq_ignore_ascii_case(s)
                || unit.symbol().eq_ignore_ascii_case(s)
                || unit.aliases().iter().any(|alias| alias.eq_ignore_ascii_case(s))
        })
        .ok_or_else(|| MeasurementError::invalid_unit(U::CATEGORY, s))
}

/// Parse a quantity string like "5 ft" or "100kg"
pub fn parse_quantity<U: UnitCapability>(s: &str) -> Result<Quantity<U>> {
    let s = s.trim();

    // Find where the number ends and unit begins
    let mut split_pos = 0;
    let mut prev = None;

    for (i, c) in s.char_indices() {
        let numeric = c.is_ascii_digit()
            || c == '.'
            || ((c == '-' || c == '+') && matches!(prev, None | Some('e') | Some('E')))
            || ((c == 'e' || c == 'E') && matches!(prev, Some(p) if p.is_ascii_digit()) && starts_exponent(&s[i + 1..]));
        if !numeric {
            break;
        }
        split_pos = i + c.len_utf8();
        prev = Some(c);
    }

    let num_str = &s[..split_pos];
    let unit_str = s[split_pos..].trim();

    let value: f64 = num_str
        .parse()
        .map_err(|_| MeasurementError::invalid_value(f64::NAN))?;

    Quantity::new(value, parse_unit(unit_str)?)
}

/// True when the text after an 'e' continues as an exponent
fn starts_exponent(rest: &str) -> bool {
    let rest = rest.strip_prefix(['+', '-']).unwrap_or(rest);
    rest.starts_with(|c: char| c.is_ascii_digit())
}
