use super::table::{BondStrengthTable, DEFAULT_REPEL_STRENGTH};
use crate::core::error::ConfigError;
use crate::core::models::color::Color;
use crate::core::models::particle_type::ParticleType;
use crate::core::models::registry::TypeRegistry;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TypeParam {
    pub symbol: ParticleType,
    pub color: Option<Color>,
    pub key: Option<char>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BondPairParam {
    pub a: ParticleType,
    pub b: ParticleType,
    pub strength: f64,
}

fn default_repel_strength() -> f64 {
    DEFAULT_REPEL_STRENGTH
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BondParams {
    #[serde(default = "default_repel_strength")]
    pub repel_default: f64,
    #[serde(default)]
    pub pairs: Vec<BondPairParam>,
}

impl Default for BondParams {
    fn default() -> Self {
        Self {
            repel_default: DEFAULT_REPEL_STRENGTH,
            pairs: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ParameterFile {
    #[serde(default)]
    types: Vec<TypeParam>,
    #[serde(default)]
    bonds: BondParams,
}

/// The declared particle types and their pairwise bond strengths.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub registry: TypeRegistry,
    pub bonds: BondStrengthTable,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid parameters in '{path}': {source}")]
    Config { path: String, source: ConfigError },
}

impl Default for Parameters {
    fn default() -> Self {
        Self::nucleotides()
    }
}

impl Parameters {
    pub fn nucleotides() -> Self {
        Self {
            registry: TypeRegistry::nucleotides(),
            bonds: BondStrengthTable::nucleotides(),
        }
    }

    /// Loads types and bond strengths from a TOML parameter file.
    ///
    /// ```toml
    /// [[types]]
    /// symbol = "G"
    /// color = "rgb(189, 9, 102)"
    /// key = "g"
    ///
    /// [bonds]
    /// repel_default = -1e-5
    ///
    /// [[bonds.pairs]]
    /// a = "G"
    /// b = "C"
    /// strength = 1e-4
    /// ```
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let display = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: display.clone(),
            source: e,
        })?;
        Self::parse(&content, &display)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ParamLoadError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> Result<Self, ParamLoadError> {
        let file: ParameterFile = toml::from_str(content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string(),
            source: e,
        })?;
        Self::from_file(file).map_err(|e| ParamLoadError::Config {
            path: path.to_string(),
            source: e,
        })
    }

    fn from_file(file: ParameterFile) -> Result<Self, ConfigError> {
        let mut registry = TypeRegistry::new();
        for param in &file.types {
            registry.declare(param.symbol);
            if let Some(color) = param.color {
                registry.set_color(param.symbol, color)?;
            }
            if let Some(key) = param.key {
                registry.bind_key(key, param.symbol)?;
            }
        }

        let mut bonds = BondStrengthTable::new(file.bonds.repel_default)?;
        for pair in &file.bonds.pairs {
            bonds.set(pair.a, pair.b, pair.strength)?;
        }

        Ok(Self { registry, bonds })
    }

    /// Reads `a,b,strength` records from a CSV file into `table`.
    ///
    /// Every record is validated before `table` is touched, so on error the
    /// table is left as it was. Returns the number of pairs read.
    pub fn load_bond_csv(
        path: &Path,
        table: &mut BondStrengthTable,
    ) -> Result<usize, ParamLoadError> {
        let display = path.to_string_lossy().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| ParamLoadError::Csv {
                path: display.clone(),
                source: e,
            })?;

        let mut staged = table.clone();
        let mut count = 0;
        for result in reader.deserialize::<BondPairParam>() {
            let record = result.map_err(|e| ParamLoadError::Csv {
                path: display.clone(),
                source: e,
            })?;
            staged
                .set(record.a, record.b, record.strength)
                .map_err(|e| ParamLoadError::Config {
                    path: display.clone(),
                    source: e,
                })?;
            count += 1;
        }
        *table = staged;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::particle_type::nucleotide::{A, C, G, U};
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    const NUCLEOTIDE_TOML: &str = r##"
        [[types]]
        symbol = "A"
        color = "rgb(242, 196, 89)"
        key = "a"

        [[types]]
        symbol = "U"
        color = "blue"
        key = "u"

        [[types]]
        symbol = "G"
        color = "#BD0966"

        [[types]]
        symbol = "C"

        [bonds]
        repel_default = -2e-5

        [[bonds.pairs]]
        a = "G"
        b = "C"
        strength = 1e-4

        [[bonds.pairs]]
        a = "U"
        b = "A"
        strength = 1e-6
    "##;

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("params.toml");
        let mut file = File::create(&file_path).unwrap();
        write!(file, "{NUCLEOTIDE_TOML}").unwrap();

        let params = Parameters::load(&file_path).unwrap();
        assert_eq!(params.registry.types(), &[A, U, G, C]);
        assert_eq!(params.registry.color(A), Some(Color::rgb(242, 196, 89)));
        assert_eq!(params.registry.color(U), Some(Color::rgb(9, 132, 189)));
        assert_eq!(params.registry.color(G), Some(Color::rgb(189, 9, 102)));
        assert_eq!(params.registry.color(C), None);
        assert_eq!(params.registry.type_for_key('A'), Some(A));
        assert_eq!(params.registry.type_for_key('g'), None);
        assert_eq!(params.bonds.repel_default(), -2e-5);
        assert_eq!(params.bonds.strength(C, G), 1e-4);
        assert_eq!(params.bonds.strength(A, U), 1e-6);
        assert_eq!(params.bonds.strength(A, A), -2e-5);
    }

    #[test]
    fn empty_document_yields_empty_registry_with_default_repulsion() {
        let params = Parameters::from_toml_str("").unwrap();
        assert!(params.registry.is_empty());
        assert!(params.bonds.is_empty());
        assert_eq!(params.bonds.repel_default(), DEFAULT_REPEL_STRENGTH);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = Parameters::load(&dir.path().join("non_existent.toml"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.toml");
        fs::write(&file_path, "this is not toml").unwrap();
        let result = Parameters::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn from_toml_str_rejects_unknown_fields_and_bad_values() {
        let unknown = "[[types]]\nsymbol = \"A\"\nshape = \"circle\"";
        assert!(matches!(
            Parameters::from_toml_str(unknown),
            Err(ParamLoadError::Toml { .. })
        ));

        let bad_symbol = "[[types]]\nsymbol = \"AU\"";
        assert!(matches!(
            Parameters::from_toml_str(bad_symbol),
            Err(ParamLoadError::Toml { .. })
        ));

        let bad_color = "[[types]]\nsymbol = \"A\"\ncolor = \"rgb(300, 0, 0)\"";
        assert!(matches!(
            Parameters::from_toml_str(bad_color),
            Err(ParamLoadError::Toml { .. })
        ));
    }

    #[test]
    fn from_toml_str_rejects_attractive_same_type_pair() {
        let content = r#"
            [[bonds.pairs]]
            a = "G"
            b = "G"
            strength = 1e-4
        "#;
        let result = Parameters::from_toml_str(content);
        assert!(matches!(
            result,
            Err(ParamLoadError::Config {
                source: ConfigError::SameTypeAttraction(..),
                ..
            })
        ));
    }

    #[test]
    fn from_toml_str_rejects_positive_repel_default() {
        let result = Parameters::from_toml_str("[bonds]\nrepel_default = 1e-5");
        assert!(matches!(
            result,
            Err(ParamLoadError::Config {
                source: ConfigError::PositiveRepelDefault(_),
                ..
            })
        ));
    }

    #[test]
    fn load_bond_csv_succeeds_with_valid_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bonds.csv");
        fs::write(&file_path, "a,b,strength\nG, C, 1e-4\nA,U,1e-6\nG,U,1e-7\n").unwrap();

        let mut table = BondStrengthTable::default();
        let count = Parameters::load_bond_csv(&file_path, &mut table).unwrap();
        assert_eq!(count, 3);
        assert_eq!(table.strength(C, G), 1e-4);
        assert_eq!(table.strength(U, G), 1e-7);
    }

    #[test]
    fn load_bond_csv_fails_for_malformed_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.csv");
        fs::write(&file_path, "a,b,strength\nG,C,strong").unwrap();
        let mut table = BondStrengthTable::default();
        let result = Parameters::load_bond_csv(&file_path, &mut table);
        assert!(matches!(result, Err(ParamLoadError::Csv { .. })));
    }

    #[test]
    fn load_bond_csv_leaves_table_untouched_on_bad_record() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bonds.csv");
        fs::write(&file_path, "a,b,strength\nG,C,5.0\nA,A,1.0\n").unwrap();

        let mut table = BondStrengthTable::nucleotides();
        let before = table.clone();
        let result = Parameters::load_bond_csv(&file_path, &mut table);
        assert!(matches!(
            result,
            Err(ParamLoadError::Config {
                source: ConfigError::SameTypeAttraction(..),
                ..
            })
        ));
        assert_eq!(table, before);
        assert_eq!(table.strength(G, C), 1e-4);
    }

    #[test]
    fn load_bond_csv_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let mut table = BondStrengthTable::default();
        let result = Parameters::load_bond_csv(&dir.path().join("absent.csv"), &mut table);
        assert!(matches!(result, Err(ParamLoadError::Csv { .. })));
    }

    #[test]
    fn nucleotides_is_the_default() {
        let params = Parameters::default();
        assert_eq!(params.registry.len(), 4);
        assert_eq!(params.bonds.len(), 10);
    }
}
