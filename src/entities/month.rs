//! The fixed set of month columns.
//!
//! Month labels are the Spanish month names, matching the column headers of
//! every category sheet. The set and its order never change; January is
//! index 0.

use crate::errors::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Month {
    Enero,
    Febrero,
    Marzo,
    Abril,
    Mayo,
    Junio,
    Julio,
    Agosto,
    Septiembre,
    Octubre,
    Noviembre,
    Diciembre,
}

impl Month {
    /// All twelve months, January first.
    pub const ALL: [Self; 12] = [
        Self::Enero,
        Self::Febrero,
        Self::Marzo,
        Self::Abril,
        Self::Mayo,
        Self::Junio,
        Self::Julio,
        Self::Agosto,
        Self::Septiembre,
        Self::Octubre,
        Self::Noviembre,
        Self::Diciembre,
    ];

    /// The column label as it appears in stored headers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enero => "Enero",
            Self::Febrero => "Febrero",
            Self::Marzo => "Marzo",
            Self::Abril => "Abril",
            Self::Mayo => "Mayo",
            Self::Junio => "Junio",
            Self::Julio => "Julio",
            Self::Agosto => "Agosto",
            Self::Septiembre => "Septiembre",
            Self::Octubre => "Octubre",
            Self::Noviembre => "Noviembre",
            Self::Diciembre => "Diciembre",
        }
    }

    /// Zero-based position in the year (and in the month columns).
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// Parses a month label, ignoring case and surrounding whitespace.
    pub fn from_label(input: &str) -> Result<Self> {
        let wanted = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.label().to_lowercase() == wanted)
            .ok_or_else(|| Error::UnknownMonth {
                input: input.trim().to_string(),
            })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(Month::from_label("Marzo").unwrap(), Month::Marzo);
        assert_eq!(Month::from_label("  marzo ").unwrap(), Month::Marzo);
        assert_eq!(Month::from_label("DICIEMBRE").unwrap(), Month::Diciembre);
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(matches!(
            Month::from_label("March"),
            Err(Error::UnknownMonth { .. })
        ));
    }

    #[test]
    fn indexes_follow_calendar_order() {
        assert_eq!(Month::Enero.index(), 0);
        assert_eq!(Month::Diciembre.index(), 11);
        for (i, month) in Month::ALL.into_iter().enumerate() {
            assert_eq!(month.index(), i);
        }
    }
}
