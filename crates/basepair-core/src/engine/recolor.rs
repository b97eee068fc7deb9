use super::config::ChainConfig;
use super::error::EngineError;
use super::host::HostEngine;
use super::input::InputEvent;
use crate::core::error::ConfigError;
use crate::core::models::chain::Chain;
use crate::core::models::color::Color;
use rand::Rng;
use tracing::debug;

/// The four-color palette of the plain circle chain, in cycling order.
pub const CHAIN_PALETTE: [Color; 4] = [
    Color::rgb(242, 196, 89),
    Color::rgb(189, 9, 102),
    Color::rgb(9, 189, 90),
    Color::rgb(9, 132, 189),
];

/// How a clicked particle picks its next display color.
#[derive(Debug, Clone, PartialEq)]
pub enum RecolorMode {
    /// Step through a fixed palette. A color outside the palette restarts at
    /// its first entry.
    Cycle(Vec<Color>),
    /// Draw a uniformly random color on every click.
    Random,
}

impl Default for RecolorMode {
    fn default() -> Self {
        RecolorMode::Cycle(CHAIN_PALETTE.to_vec())
    }
}

impl RecolorMode {
    pub fn cycle(palette: Vec<Color>) -> Result<Self, ConfigError> {
        if palette.is_empty() {
            return Err(ConfigError::MissingParameter("palette"));
        }
        Ok(RecolorMode::Cycle(palette))
    }

    pub fn next_color<R: Rng + ?Sized>(&self, current: Color, rng: &mut R) -> Color {
        match self {
            RecolorMode::Cycle(palette) => {
                let next = palette
                    .iter()
                    .position(|&c| c == current)
                    .map_or(0, |i| (i + 1) % palette.len());
                palette.get(next).copied().unwrap_or(current)
            }
            RecolorMode::Random => Color::random(rng),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recolored {
    pub index: usize,
    pub from: Color,
    pub to: Color,
}

/// Click-to-recolor over a chain: a pointer press inside a particle paints its
/// fill and outline with the next color. Types and constraints are untouched.
#[derive(Debug, Clone)]
pub struct ClickRecolor {
    mode: RecolorMode,
    line_width: f64,
}

impl ClickRecolor {
    pub fn new(mode: RecolorMode, config: &ChainConfig) -> Self {
        Self {
            mode,
            line_width: config.line_width,
        }
    }

    pub fn mode(&self) -> &RecolorMode {
        &self.mode
    }

    /// Recolors the first particle whose hit region contains the pointer.
    ///
    /// Returns `None` for non-pointer events and for presses outside every particle.
    pub fn handle<H: HostEngine + ?Sized, R: Rng + ?Sized>(
        &self,
        event: &InputEvent,
        chain: &mut Chain,
        host: &mut H,
        rng: &mut R,
    ) -> Result<Option<Recolored>, EngineError> {
        let InputEvent::PointerDown { position } = *event else {
            return Ok(None);
        };
        let Some(index) = chain
            .particles()
            .iter()
            .position(|p| host.point_in_bounds(p.body, &position))
        else {
            return Ok(None);
        };
        let Some(particle) = chain.particle_mut(index) else {
            return Ok(None);
        };

        let from = particle.color;
        let to = self.mode.next_color(from, rng);
        host.set_fill(particle.body, to)?;
        host.set_outline(particle.body, to, self.line_width)?;
        particle.color = to;

        debug!(index, from = %from.to_hex(), to = %to.to_hex(), "Recolored particle.");
        Ok(Some(Recolored { index, from, to }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::particle_type::ParticleType;
    use crate::core::models::particle_type::nucleotide::{A, G};
    use crate::core::models::registry::TypeRegistry;
    use crate::engine::chain::ParticleChain;
    use crate::engine::world::MemoryWorld;
    use nalgebra::Point2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn chain_of(world: &mut MemoryWorld, types: &[ParticleType]) -> Chain {
        let registry = TypeRegistry::nucleotides();
        let config = ChainConfig::default();
        let chain = ParticleChain::new(&registry, &config)
            .build(world, types)
            .unwrap();
        for (i, particle) in chain.particles().iter().enumerate() {
            world
                .set_position(particle.body, Point2::new(100.0 * i as f64, 100.0))
                .unwrap();
        }
        chain
    }

    #[test]
    fn cycle_steps_through_palette_and_wraps() {
        let mode = RecolorMode::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut color = CHAIN_PALETTE[0];
        for expected in [1, 2, 3, 0] {
            color = mode.next_color(color, &mut rng);
            assert_eq!(color, CHAIN_PALETTE[expected]);
        }
    }

    #[test]
    fn cycle_restarts_for_color_outside_palette() {
        let mode = RecolorMode::cycle(vec![Color::WHITE, Color::BLACK]).unwrap();
        let next = mode.next_color(Color::rgb(1, 2, 3), &mut StdRng::seed_from_u64(0));
        assert_eq!(next, Color::WHITE);
    }

    #[test]
    fn cycle_rejects_empty_palette() {
        assert_eq!(
            RecolorMode::cycle(Vec::new()),
            Err(ConfigError::MissingParameter("palette"))
        );
    }

    #[test]
    fn random_mode_draws_from_rng() {
        let next = RecolorMode::Random.next_color(Color::BLACK, &mut StdRng::seed_from_u64(9));
        assert_eq!(next, Color::random(&mut StdRng::seed_from_u64(9)));
    }

    #[test]
    fn click_inside_particle_paints_fill_and_outline() {
        let mut world = MemoryWorld::new();
        let mut chain = chain_of(&mut world, &[A, G]);
        let recolor = ClickRecolor::new(RecolorMode::default(), &ChainConfig::default());

        let result = recolor
            .handle(
                &InputEvent::pointer_down(100.0, 110.0),
                &mut chain,
                &mut world,
                &mut StdRng::seed_from_u64(0),
            )
            .unwrap();

        // G starts red, which cycles to green.
        let green = CHAIN_PALETTE[2];
        assert_eq!(
            result,
            Some(Recolored {
                index: 1,
                from: CHAIN_PALETTE[1],
                to: green
            })
        );
        let render = world.body(chain.particles()[1].body).unwrap().render;
        assert_eq!(render.fill, Some(green));
        assert_eq!(render.stroke, green);
        assert_eq!(render.line_width, 6.0);
        assert_eq!(chain.particles()[1].color(), green);
        assert_eq!(chain.sequence(), "AG");
        assert_eq!(chain.particles()[0].color(), CHAIN_PALETTE[0]);
    }

    #[test]
    fn click_outside_and_other_events_change_nothing() {
        let mut world = MemoryWorld::new();
        let mut chain = chain_of(&mut world, &[A, G]);
        let before = chain.clone();
        let recolor = ClickRecolor::new(RecolorMode::Random, &ChainConfig::default());
        let mut rng = StdRng::seed_from_u64(0);

        let outside = recolor
            .handle(&InputEvent::pointer_down(600.0, 500.0), &mut chain, &mut world, &mut rng)
            .unwrap();
        let key = recolor
            .handle(&InputEvent::KeyDown { key: 'a' }, &mut chain, &mut world, &mut rng)
            .unwrap();

        assert_eq!(outside, None);
        assert_eq!(key, None);
        assert_eq!(chain, before);
    }
}
