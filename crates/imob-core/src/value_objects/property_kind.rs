//! Property classification - the closed set of unit categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit category of a property record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    Casa,
    Apartamento,
    Kitnet,
    Loja,
    Sala,
    Terreno,
}

impl PropertyKind {
    /// Wire label for this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Casa => "casa",
            Self::Apartamento => "apartamento",
            Self::Kitnet => "kitnet",
            Self::Loja => "loja",
            Self::Sala => "sala",
            Self::Terreno => "terreno",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a property kind label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property kind: {0}")]
pub struct ParsePropertyKindError(pub String);

impl std::str::FromStr for PropertyKind {
    type Err = ParsePropertyKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casa" => Ok(Self::Casa),
            "apartamento" => Ok(Self::Apartamento),
            "kitnet" => Ok(Self::Kitnet),
            "loja" => Ok(Self::Loja),
            "sala" => Ok(Self::Sala),
            "terreno" => Ok(Self::Terreno),
            other => Err(ParsePropertyKindError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_case_insensitive() {
        assert_eq!("Casa".parse::<PropertyKind>().unwrap(), PropertyKind::Casa);
        assert_eq!(
            "APARTAMENTO".parse::<PropertyKind>().unwrap(),
            PropertyKind::Apartamento
        );
        assert_eq!(" kitnet ".parse::<PropertyKind>().unwrap(), PropertyKind::Kitnet);
    }

    #[test]
    fn test_parse_kind_rejects_unknown() {
        assert!("mansão".parse::<PropertyKind>().is_err());
        assert!("".parse::<PropertyKind>().is_err());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(PropertyKind::Sala.as_str(), "sala");
        assert_eq!(PropertyKind::Terreno.to_string(), "terreno");
    }
}
