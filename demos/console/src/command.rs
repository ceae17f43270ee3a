//! Line-oriented command grammar.
//!
//! ```text
//! locality "<name>" <yes|no>
//! road <origin-id> <destination-id>
//! hospital <start-id>
//! professional "<name>" "<specialty>|<1-8>" <crm> <x> <y>
//! by-name
//! by-specialty
//! nearby <x> <y> [radius]
//! specialties | help | quit
//! ```
//!
//! Arguments containing spaces are wrapped in double quotes.  Blank lines and
//! lines starting with `#` are ignored.

use std::str::FromStr;

use thiserror::Error;

use hm_core::{Coord, LicenseNumber, LocalityId, Specialty};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddLocality { name: String, has_hospital: bool },
    AddRoad { from: LocalityId, to: LocalityId },
    NearestHospital { start: LocalityId },
    RegisterProfessional {
        name:      String,
        specialty: Specialty,
        license:   LicenseNumber,
        position:  Coord,
    },
    ListByName,
    ListBySpecialty,
    Nearby { center: Coord, radius: Option<f64> },
    Specialties,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error("unknown command {0:?} (try `help`)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid {what}: {value:?}")]
    InvalidValue { what: &'static str, value: String },

    #[error(transparent)]
    Specialty(#[from] hm_core::CoreError),
}

pub const HELP: &str = "\
commands:
  locality \"<name>\" <yes|no>                      register a locality (hospital?)
  road <origin-id> <destination-id>                register a one-way road
  hospital <start-id>                              nearest reachable hospital
  professional \"<name>\" <specialty> <crm> <x> <y>  register a professional
  by-name                                          list professionals by name
  by-specialty                                     list professionals by specialty
  nearby <x> <y> [radius]                          professionals within radius
  specialties                                      list the accepted specialties
  help                                             this text
  quit                                             release memory and exit";

/// Parse one input line.  `Ok(None)` for blank and comment lines.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let tokens = tokenize(line)?;
    let Some((head, args)) = tokens.split_first() else {
        return Ok(None);
    };
    if head.starts_with('#') {
        return Ok(None);
    }

    let cmd = match (head.to_ascii_lowercase().as_str(), args) {
        ("locality", [name, hospital]) => Command::AddLocality {
            name:         name.clone(),
            has_hospital: parse_flag(hospital)?,
        },
        ("locality", _) => return Err(ParseError::Usage("locality \"<name>\" <yes|no>")),

        ("road", [from, to]) => Command::AddRoad {
            from: LocalityId(number("locality id", from)?),
            to:   LocalityId(number("locality id", to)?),
        },
        ("road", _) => return Err(ParseError::Usage("road <origin-id> <destination-id>")),

        ("hospital", [start]) => Command::NearestHospital {
            start: LocalityId(number("locality id", start)?),
        },
        ("hospital", _) => return Err(ParseError::Usage("hospital <start-id>")),

        ("professional", [name, specialty, crm, x, y]) => Command::RegisterProfessional {
            name:      name.clone(),
            specialty: specialty.parse()?,
            license:   LicenseNumber(number("CRM", crm)?),
            position:  Coord::new(number("x coordinate", x)?, number("y coordinate", y)?),
        },
        ("professional", _) => {
            return Err(ParseError::Usage("professional \"<name>\" <specialty> <crm> <x> <y>"));
        }

        ("by-name", []) => Command::ListByName,
        ("by-specialty", []) => Command::ListBySpecialty,

        ("nearby", [x, y]) => Command::Nearby {
            center: Coord::new(number("x coordinate", x)?, number("y coordinate", y)?),
            radius: None,
        },
        ("nearby", [x, y, r]) => Command::Nearby {
            center: Coord::new(number("x coordinate", x)?, number("y coordinate", y)?),
            radius: Some(radius(r)?),
        },
        ("nearby", _) => return Err(ParseError::Usage("nearby <x> <y> [radius]")),

        ("specialties", []) => Command::Specialties,
        ("help", _) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,

        (other, _) => return Err(ParseError::UnknownCommand(other.to_owned())),
    };
    Ok(Some(cmd))
}

/// Split on whitespace, honouring double-quoted segments.
pub fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut cur));
                    has_token = false;
                }
            }
            c => {
                cur.push(c);
                has_token = true;
            }
        }
    }
    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    if has_token {
        tokens.push(cur);
    }
    Ok(tokens)
}

fn number<T: FromStr>(what: &'static str, value: &str) -> Result<T, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidValue { what, value: value.to_owned() })
}

fn radius(value: &str) -> Result<f64, ParseError> {
    let r: f64 = number("radius", value)?;
    if r.is_finite() && r >= 0.0 {
        Ok(r)
    } else {
        Err(ParseError::InvalidValue { what: "radius", value: value.to_owned() })
    }
}

/// Hospital flag: `yes`/`sim`/`1`/`true` or `no`/`nao`/`2`/`false`.
fn parse_flag(value: &str) -> Result<bool, ParseError> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "y" | "sim" | "s" | "1" | "true"  => Ok(true),
        "no" | "n" | "nao" | "2" | "false"        => Ok(false),
        _ => Err(ParseError::InvalidValue { what: "hospital flag", value: value.to_owned() }),
    }
}
