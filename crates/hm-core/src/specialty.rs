//! The fixed set of medical specialties a professional can hold.
//!
//! The set is closed: there is no way to register a specialty outside these
//! eight.  Labels are stored accent-free, exactly as they are used as keys
//! in the specialty index, so alphabetical listing follows the label text
//! and not the declaration order below.

use std::str::FromStr;

use crate::CoreError;

/// A professional's specialty.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Specialty {
    ClinicoGeral,
    Cardiologia,
    Pediatria,
    Ortopedia,
    Neurologia,
    Dermatologia,
    Psiquiatria,
    Ginecologia,
}

impl Specialty {
    /// Every specialty, in menu order (1-based menu number = position + 1).
    pub const ALL: [Specialty; 8] = [
        Specialty::ClinicoGeral,
        Specialty::Cardiologia,
        Specialty::Pediatria,
        Specialty::Ortopedia,
        Specialty::Neurologia,
        Specialty::Dermatologia,
        Specialty::Psiquiatria,
        Specialty::Ginecologia,
    ];

    /// Label used for display and as the specialty index key.
    pub fn as_str(self) -> &'static str {
        match self {
            Specialty::ClinicoGeral => "Clinico Geral",
            Specialty::Cardiologia  => "Cardiologia",
            Specialty::Pediatria    => "Pediatria",
            Specialty::Ortopedia    => "Ortopedia",
            Specialty::Neurologia   => "Neurologia",
            Specialty::Dermatologia => "Dermatologia",
            Specialty::Psiquiatria  => "Psiquiatria",
            Specialty::Ginecologia  => "Ginecologia",
        }
    }

    /// Look up a specialty by its 1-based menu number.
    pub fn from_menu_number(n: usize) -> Option<Specialty> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl FromStr for Specialty {
    type Err = CoreError;

    /// Accepts the label (case-insensitive, surrounding whitespace ignored)
    /// or the menu number `1..=8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return Self::from_menu_number(n)
                .ok_or_else(|| CoreError::UnknownSpecialty(s.to_owned()));
        }
        Self::ALL
            .into_iter()
            .find(|sp| sp.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownSpecialty(s.to_owned()))
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
