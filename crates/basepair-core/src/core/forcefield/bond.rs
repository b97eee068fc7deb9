use super::table::BondStrengthTable;
use crate::core::models::particle_type::ParticleType;
use nalgebra::{Point2, Vector2};

/// The view of a body that a pairwise force needs: its type tag and position.
///
/// Bodies that are not particles (walls, props) carry no type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondSite {
    pub particle_type: Option<ParticleType>,
    pub position: Point2<f64>,
}

impl BondSite {
    pub fn new(particle_type: ParticleType, position: Point2<f64>) -> Self {
        Self {
            particle_type: Some(particle_type),
            position,
        }
    }

    pub fn untyped(position: Point2<f64>) -> Self {
        Self {
            particle_type: None,
            position,
        }
    }
}

/// Pairwise bonding force between typed particles.
///
/// For a pair `(a, b)` the force is `(a.position - b.position) * s`, where `s`
/// is the table strength of the two types. The result acts on `b`: a positive
/// strength pulls `b` towards `a`, a negative one pushes it away. Magnitude grows
/// linearly with separation.
///
/// Evaluation is pure, and `force(a, b) == -force(b, a)` for every pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PairBondModel {
    table: BondStrengthTable,
}

impl PairBondModel {
    pub fn new(table: BondStrengthTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &BondStrengthTable {
        &self.table
    }

    #[inline]
    pub fn strength(&self, a: ParticleType, b: ParticleType) -> f64 {
        self.table.strength(a, b)
    }

    /// Force exerted on `b` by `a`. Zero if either site is untyped.
    #[inline]
    pub fn force(&self, a: &BondSite, b: &BondSite) -> Vector2<f64> {
        match (a.particle_type, b.particle_type) {
            (Some(type_a), Some(type_b)) => {
                (a.position - b.position) * self.table.strength(type_a, type_b)
            }
            _ => Vector2::zeros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::table::{DEFAULT_REPEL_STRENGTH, GC_BOND_STRENGTH};
    use crate::core::models::particle_type::nucleotide::{self, A, C, G, U};

    const TOLERANCE: f64 = 1e-15;

    fn site(t: ParticleType, x: f64, y: f64) -> BondSite {
        BondSite::new(t, Point2::new(x, y))
    }

    fn assert_vec_eq(actual: Vector2<f64>, expected: Vector2<f64>) {
        assert!(
            (actual - expected).norm() < TOLERANCE,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn gc_pair_attracts_along_separation() {
        let model = PairBondModel::new(BondStrengthTable::nucleotides());
        let g = site(G, 0.0, 0.0);
        let c = site(C, 10.0, 0.0);
        assert_vec_eq(model.force(&g, &c), Vector2::new(-1e-3, 0.0));
        assert_vec_eq(model.force(&c, &g), Vector2::new(1e-3, 0.0));
    }

    #[test]
    fn swapped_pairs_give_equal_and_opposite_forces() {
        let model = PairBondModel::new(BondStrengthTable::nucleotides());
        for &x in &nucleotide::ALL {
            for &y in &nucleotide::ALL {
                let a = site(x, 3.0, -7.5);
                let b = site(y, -12.0, 4.25);
                let forward = model.force(&a, &b);
                let backward = model.force(&b, &a);
                assert_vec_eq(forward, -backward);
                assert!((forward.norm() - backward.norm()).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn undeclared_pairs_use_default_repulsion() {
        let model = PairBondModel::default();
        let a = site(A, 1.0, 2.0);
        let b = site(U, 4.0, -2.0);
        let expected = (a.position - b.position) * DEFAULT_REPEL_STRENGTH;
        assert_vec_eq(model.force(&a, &b), expected);
    }

    #[test]
    fn same_type_pair_pushes_apart() {
        let model = PairBondModel::new(BondStrengthTable::nucleotides());
        let a = site(G, 0.0, 0.0);
        let b = site(G, 5.0, 0.0);
        // Force on b points away from a.
        assert!(model.force(&a, &b).x > 0.0);
    }

    #[test]
    fn force_scales_linearly_with_separation() {
        let model = PairBondModel::new(BondStrengthTable::nucleotides());
        let near = model.force(&site(G, 0.0, 0.0), &site(C, 10.0, 0.0));
        let far = model.force(&site(G, 0.0, 0.0), &site(C, 20.0, 0.0));
        assert_vec_eq(far, near * 2.0);
        assert_eq!(model.strength(C, G), GC_BOND_STRENGTH);
    }

    #[test]
    fn untyped_sites_feel_no_bond_force() {
        let model = PairBondModel::new(BondStrengthTable::nucleotides());
        let wall = BondSite::untyped(Point2::new(400.0, 0.0));
        let g = site(G, 0.0, 0.0);
        assert_eq!(model.force(&wall, &g), Vector2::zeros());
        assert_eq!(model.force(&g, &wall), Vector2::zeros());
    }

    #[test]
    fn coincident_sites_produce_zero_force() {
        let model = PairBondModel::new(BondStrengthTable::nucleotides());
        let a = site(A, 1.0, 1.0);
        let b = site(U, 1.0, 1.0);
        assert_eq!(model.force(&a, &b), Vector2::zeros());
    }
}
