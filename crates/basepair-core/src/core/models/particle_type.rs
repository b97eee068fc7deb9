use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A symbolic label attached to a particle, such as one of the four RNA bases.
///
/// Labels are single characters. The set of labels that are meaningful for a
/// simulation is declared in a [`TypeRegistry`](super::registry::TypeRegistry);
/// the label itself carries no color or bonding behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct ParticleType(char);

impl ParticleType {
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    pub const fn symbol(self) -> char {
        self.0
    }
}

/// The four RNA nucleotide bases.
pub mod nucleotide {
    use super::ParticleType;

    pub const A: ParticleType = ParticleType::new('A');
    pub const U: ParticleType = ParticleType::new('U');
    pub const G: ParticleType = ParticleType::new('G');
    pub const C: ParticleType = ParticleType::new('C');

    pub const ALL: [ParticleType; 4] = [A, U, G, C];
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid particle type '{0}': expected a single non-whitespace symbol")]
pub struct ParseParticleTypeError(pub String);

impl FromStr for ParticleType {
    type Err = ParseParticleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Ok(Self(symbol)),
            _ => Err(ParseParticleTypeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for ParticleType {
    type Error = ParseParticleTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<char> for ParticleType {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a strand such as `"AAGACUUC"` into one particle type per symbol.
///
/// Whitespace between symbols is ignored, so `"A U G C"` is equivalent to `"AUGC"`.
pub fn parse_strand(strand: &str) -> Vec<ParticleType> {
    strand
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(ParticleType)
        .collect()
}
