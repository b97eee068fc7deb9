use crate::core::error::ConfigError;
use crate::core::models::particle_type::{ParticleType, nucleotide};
use crate::core::models::registry::TypeRegistry;
use std::collections::HashMap;

pub const DEFAULT_REPEL_STRENGTH: f64 = -1e-5;

pub const GC_BOND_STRENGTH: f64 = 1e-4;
pub const AU_BOND_STRENGTH: f64 = 1e-6;
pub const GU_BOND_STRENGTH: f64 = 1e-7;

#[inline]
fn pair_key(a: ParticleType, b: ParticleType) -> (ParticleType, ParticleType) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Signed bond strengths for unordered pairs of particle types.
///
/// Positive strengths attract, negative strengths repel. Lookups are symmetric
/// and pairs that were never declared fall back to [`repel_default`], which is
/// always negative. Same-type pairs may only be declared with a negative
/// strength.
///
/// [`repel_default`]: BondStrengthTable::repel_default
#[derive(Debug, Clone, PartialEq)]
pub struct BondStrengthTable {
    strengths: HashMap<(ParticleType, ParticleType), f64>,
    repel_default: f64,
}

impl Default for BondStrengthTable {
    fn default() -> Self {
        Self {
            strengths: HashMap::new(),
            repel_default: DEFAULT_REPEL_STRENGTH,
        }
    }
}

impl BondStrengthTable {
    pub fn new(repel_default: f64) -> Result<Self, ConfigError> {
        if !repel_default.is_finite() || repel_default >= 0.0 {
            return Err(ConfigError::PositiveRepelDefault(repel_default));
        }
        Ok(Self {
            strengths: HashMap::new(),
            repel_default,
        })
    }

    /// Watson-Crick and wobble pairing for the four RNA bases.
    ///
    /// All ten unordered pairs are declared: G-C, A-U and G-U attract with
    /// decreasing strength; every other pair, same-type pairs included, repels.
    pub fn nucleotides() -> Self {
        use nucleotide::{A, C, G, U};

        let mut table = Self::default();
        let declared = [
            (G, C, GC_BOND_STRENGTH),
            (A, U, AU_BOND_STRENGTH),
            (G, U, GU_BOND_STRENGTH),
            (A, A, DEFAULT_REPEL_STRENGTH),
            (U, U, DEFAULT_REPEL_STRENGTH),
            (G, G, DEFAULT_REPEL_STRENGTH),
            (C, C, DEFAULT_REPEL_STRENGTH),
            (A, G, DEFAULT_REPEL_STRENGTH),
            (A, C, DEFAULT_REPEL_STRENGTH),
            (U, C, DEFAULT_REPEL_STRENGTH),
        ];
        for (a, b, strength) in declared {
            table.strengths.insert(pair_key(a, b), strength);
        }
        table
    }

    /// Declares the strength of the pair `{a, b}`, returning the previous value.
    pub fn set(
        &mut self,
        a: ParticleType,
        b: ParticleType,
        strength: f64,
    ) -> Result<Option<f64>, ConfigError> {
        if !strength.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: "bond strength",
                value: strength,
            });
        }
        if a == b && strength >= 0.0 {
            return Err(ConfigError::SameTypeAttraction(a, strength));
        }
        Ok(self.strengths.insert(pair_key(a, b), strength))
    }

    pub fn with(
        mut self,
        a: ParticleType,
        b: ParticleType,
        strength: f64,
    ) -> Result<Self, ConfigError> {
        self.set(a, b, strength)?;
        Ok(self)
    }

    /// The declared strength of `{a, b}`, if any.
    pub fn get(&self, a: ParticleType, b: ParticleType) -> Option<f64> {
        self.strengths.get(&pair_key(a, b)).copied()
    }

    /// The effective strength of `{a, b}`: the declared value or the default repulsion.
    #[inline]
    pub fn strength(&self, a: ParticleType, b: ParticleType) -> f64 {
        self.get(a, b).unwrap_or(self.repel_default)
    }

    pub fn repel_default(&self) -> f64 {
        self.repel_default
    }

    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (ParticleType, ParticleType, f64)> + '_ {
        self.strengths.iter().map(|(&(a, b), &s)| (a, b, s))
    }

    /// Pairs of declared types that have no explicit strength in this table.
    pub fn missing_pairs(&self, registry: &TypeRegistry) -> Vec<(ParticleType, ParticleType)> {
        registry
            .unordered_pairs()
            .filter(|&(a, b)| self.get(a, b).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucleotide::{A, C, G, U};

    #[test]
    fn nucleotides_declares_all_ten_pairs() {
        let table = BondStrengthTable::nucleotides();
        assert_eq!(table.len(), 10);
        assert!(table.missing_pairs(&TypeRegistry::nucleotides()).is_empty());
    }

    #[test]
    fn nucleotides_orders_pairing_strengths() {
        let table = BondStrengthTable::nucleotides();
        assert_eq!(table.strength(G, C), GC_BOND_STRENGTH);
        assert_eq!(table.strength(U, A), AU_BOND_STRENGTH);
        assert_eq!(table.strength(U, G), GU_BOND_STRENGTH);
        assert!(table.strength(G, C) > table.strength(A, U));
        assert!(table.strength(A, U) > table.strength(G, U));
    }

    #[test]
    fn same_type_pairs_repel() {
        let table = BondStrengthTable::nucleotides();
        for t in nucleotide::ALL {
            assert!(table.strength(t, t) < 0.0);
        }
    }

    #[test]
    fn lookup_is_symmetric() {
        let table = BondStrengthTable::default()
            .with(ParticleType::new('X'), ParticleType::new('Y'), 0.5)
            .unwrap();
        assert_eq!(
            table.get(ParticleType::new('X'), ParticleType::new('Y')),
            table.get(ParticleType::new('Y'), ParticleType::new('X'))
        );
    }

    #[test]
    fn undeclared_pairs_fall_back_to_repel_default() {
        let table = BondStrengthTable::new(-2e-5).unwrap();
        assert_eq!(table.get(A, C), None);
        assert_eq!(table.strength(A, C), -2e-5);
    }

    #[test]
    fn new_rejects_non_negative_default() {
        assert_eq!(
            BondStrengthTable::new(0.0),
            Err(ConfigError::PositiveRepelDefault(0.0))
        );
        assert!(BondStrengthTable::new(1e-5).is_err());
        assert!(BondStrengthTable::new(f64::NAN).is_err());
    }

    #[test]
    fn set_rejects_attractive_same_type_pair() {
        let mut table = BondStrengthTable::default();
        assert_eq!(
            table.set(G, G, 1e-4),
            Err(ConfigError::SameTypeAttraction(G, 1e-4))
        );
        assert!(table.is_empty());
        assert_eq!(table.set(G, G, -1e-4), Ok(None));
    }

    #[test]
    fn set_rejects_non_finite_strength() {
        let mut table = BondStrengthTable::default();
        assert!(table.set(A, U, f64::INFINITY).is_err());
    }

    #[test]
    fn set_returns_previous_value() {
        let mut table = BondStrengthTable::default();
        table.set(G, C, 1.0).unwrap();
        assert_eq!(table.set(C, G, 2.0), Ok(Some(1.0)));
        assert_eq!(table.strength(G, C), 2.0);
    }

    #[test]
    fn missing_pairs_lists_undeclared_combinations() {
        let table = BondStrengthTable::default().with(G, C, 1e-4).unwrap();
        let missing = table.missing_pairs(&TypeRegistry::nucleotides());
        assert_eq!(missing.len(), 9);
        assert!(!missing.contains(&(G, C)));
        assert!(missing.contains(&(A, A)));
    }
}
