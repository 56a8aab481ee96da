use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a glaze is safe for surfaces that touch food.
///
/// `Unknown` is a real answer ("not tested yet") and is kept distinct from `No`.
/// Over JSON and in storage it travels as a nullable boolean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Foodsafe {
    Yes,
    No,
    #[default]
    Unknown,
}

impl From<Option<bool>> for Foodsafe {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }
}

impl From<Foodsafe> for Option<bool> {
    fn from(value: Foodsafe) -> Self {
        match value {
            Foodsafe::Yes => Some(true),
            Foodsafe::No => Some(false),
            Foodsafe::Unknown => None,
        }
    }
}

impl fmt::Display for Foodsafe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}
