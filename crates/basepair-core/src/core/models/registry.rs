use super::color::Color;
use super::particle_type::{ParticleType, nucleotide};
use crate::core::error::ConfigError;
use itertools::Itertools;
use std::collections::HashMap;

/// The closed set of particle types a simulation knows about.
///
/// Types are kept in declaration order. Each declared type may carry a display
/// color and a keyboard binding; colors must be present for every declared type
/// before a chain can be built (see [`TypeRegistry::validate_palette`]), while
/// key bindings are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeRegistry {
    declared: Vec<ParticleType>,
    colors: HashMap<ParticleType, Color>,
    keys: HashMap<char, ParticleType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four RNA bases with the palette and key bindings of the nucleotide demos.
    pub fn nucleotides() -> Self {
        let mut registry = Self::new();
        let palette = [
            (nucleotide::A, Color::rgb(242, 196, 89)),
            (nucleotide::U, Color::rgb(9, 132, 189)),
            (nucleotide::G, Color::rgb(189, 9, 102)),
            (nucleotide::C, Color::rgb(9, 189, 90)),
        ];
        for (particle_type, color) in palette {
            registry.declare_with_color(particle_type, color);
            registry
                .keys
                .insert(particle_type.symbol().to_ascii_lowercase(), particle_type);
        }
        registry
    }

    /// Declares a type without a color. Returns `false` if it was already declared.
    pub fn declare(&mut self, particle_type: ParticleType) -> bool {
        if self.is_declared(particle_type) {
            return false;
        }
        self.declared.push(particle_type);
        true
    }

    /// Declares a type (if needed) and sets its display color.
    pub fn declare_with_color(&mut self, particle_type: ParticleType, color: Color) {
        self.declare(particle_type);
        self.colors.insert(particle_type, color);
    }

    pub fn set_color(
        &mut self,
        particle_type: ParticleType,
        color: Color,
    ) -> Result<(), ConfigError> {
        if !self.is_declared(particle_type) {
            return Err(ConfigError::UndeclaredType(particle_type));
        }
        self.colors.insert(particle_type, color);
        Ok(())
    }

    /// Binds a key to a declared type. Keys are matched case-insensitively.
    pub fn bind_key(&mut self, key: char, particle_type: ParticleType) -> Result<(), ConfigError> {
        if !self.is_declared(particle_type) {
            return Err(ConfigError::UndeclaredType(particle_type));
        }
        let key = key.to_ascii_lowercase();
        match self.keys.get(&key) {
            Some(&bound_to) if bound_to != particle_type => {
                Err(ConfigError::KeyAlreadyBound { key, bound_to })
            }
            _ => {
                self.keys.insert(key, particle_type);
                Ok(())
            }
        }
    }

    pub fn is_declared(&self, particle_type: ParticleType) -> bool {
        self.declared.contains(&particle_type)
    }

    pub fn types(&self) -> &[ParticleType] {
        &self.declared
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    pub fn color(&self, particle_type: ParticleType) -> Option<Color> {
        self.colors.get(&particle_type).copied()
    }

    pub fn type_for_key(&self, key: char) -> Option<ParticleType> {
        self.keys.get(&key.to_ascii_lowercase()).copied()
    }

    pub fn key_for(&self, particle_type: ParticleType) -> Option<char> {
        self.keys
            .iter()
            .find(|&(_, &bound)| bound == particle_type)
            .map(|(&key, _)| key)
    }

    /// Checks that every declared type has a display color.
    ///
    /// Reports the first uncolored type in declaration order.
    pub fn validate_palette(&self) -> Result<(), ConfigError> {
        match self
            .declared
            .iter()
            .find(|particle_type| !self.colors.contains_key(particle_type))
        {
            Some(&missing) => Err(ConfigError::MissingColor(missing)),
            None => Ok(()),
        }
    }

    /// Every unordered pair of declared types, same-type pairs included.
    ///
    /// For `n` declared types this yields `n * (n + 1) / 2` pairs.
    pub fn unordered_pairs(&self) -> impl Iterator<Item = (ParticleType, ParticleType)> + '_ {
        self.declared
            .iter()
            .copied()
            .combinations_with_replacement(2)
            .map(|pair| (pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nucleotides_declares_four_colored_bases_in_order() {
        let registry = TypeRegistry::nucleotides();
        assert_eq!(registry.types(), &nucleotide::ALL);
        assert_eq!(registry.color(nucleotide::G), Some(Color::rgb(189, 9, 102)));
        assert!(registry.validate_palette().is_ok());
    }

    #[test]
    fn nucleotides_binds_lowercase_keys() {
        let registry = TypeRegistry::nucleotides();
        assert_eq!(registry.type_for_key('a'), Some(nucleotide::A));
        assert_eq!(registry.type_for_key('U'), Some(nucleotide::U));
        assert_eq!(registry.type_for_key('x'), None);
        assert_eq!(registry.key_for(nucleotide::C), Some('c'));
    }

    #[test]
    fn declare_is_idempotent() {
        let mut registry = TypeRegistry::new();
        assert!(registry.declare(ParticleType::new('X')));
        assert!(!registry.declare(ParticleType::new('X')));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn validate_palette_reports_first_uncolored_type() {
        let mut registry = TypeRegistry::new();
        registry.declare_with_color(ParticleType::new('X'), Color::BLACK);
        registry.declare(ParticleType::new('Y'));
        registry.declare(ParticleType::new('Z'));
        assert_eq!(
            registry.validate_palette(),
            Err(ConfigError::MissingColor(ParticleType::new('Y')))
        );
    }

    #[test]
    fn set_color_rejects_undeclared_type() {
        let mut registry = TypeRegistry::new();
        assert_eq!(
            registry.set_color(ParticleType::new('Q'), Color::WHITE),
            Err(ConfigError::UndeclaredType(ParticleType::new('Q')))
        );
    }

    #[test]
    fn bind_key_rejects_conflicting_binding() {
        let mut registry = TypeRegistry::nucleotides();
        let result = registry.bind_key('A', nucleotide::G);
        assert_eq!(
            result,
            Err(ConfigError::KeyAlreadyBound {
                key: 'a',
                bound_to: nucleotide::A
            })
        );
        assert!(registry.bind_key('a', nucleotide::A).is_ok());
    }

    #[test]
    fn unordered_pairs_covers_every_pair_once() {
        let registry = TypeRegistry::nucleotides();
        let pairs: Vec<_> = registry.unordered_pairs().collect();
        assert_eq!(pairs.len(), 10);
        assert!(pairs.contains(&(nucleotide::A, nucleotide::A)));
        assert!(pairs.contains(&(nucleotide::G, nucleotide::C)));
        assert!(!pairs.contains(&(nucleotide::C, nucleotide::G)));
    }
}
