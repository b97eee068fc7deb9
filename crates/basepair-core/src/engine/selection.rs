use super::chain::ParticleChain;
use super::error::EngineError;
use super::host::HostEngine;
use super::input::InputEvent;
use crate::core::models::chain::Chain;
use crate::core::models::particle_type::ParticleType;
use nalgebra::Point2;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected {
        index: usize,
    },
}

/// State of the type-selection controls (buttons or key hints) shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSurface {
    pub enabled: bool,
    /// The type most recently applied to the current selection.
    pub highlighted: Option<ParticleType>,
}

/// What a single [`SelectionController::handle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected {
        index: usize,
        previous: Option<usize>,
    },
    Deselected {
        previous: usize,
    },
    Reassigned {
        index: usize,
        from: ParticleType,
        to: ParticleType,
    },
    /// The event was valid in the current state but changed nothing.
    Unchanged,
    /// The event has no meaning in the current state (e.g. a key press while idle).
    Ignored,
}

/// Pointer and keyboard driven selection over a chain.
///
/// A pointer press inside a particle selects it; a press outside every particle
/// clears the selection. While a particle is selected, a bound key or a type
/// control retypes it. When regions overlap the earliest particle in chain order
/// wins.
pub struct SelectionController<'a> {
    particles: ParticleChain<'a>,
    state: SelectionState,
    surface: InputSurface,
}

impl<'a> SelectionController<'a> {
    pub fn new(particles: ParticleChain<'a>) -> Self {
        Self {
            particles,
            state: SelectionState::Idle,
            surface: InputSurface::default(),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn surface(&self) -> InputSurface {
        self.surface
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Selected { index } => Some(index),
        }
    }

    pub fn handle<H: HostEngine + ?Sized>(
        &mut self,
        event: &InputEvent,
        chain: &mut Chain,
        host: &mut H,
    ) -> Result<SelectionOutcome, EngineError> {
        match *event {
            InputEvent::PointerDown { position } => self.pointer_down(&position, chain, host),
            InputEvent::KeyDown { key } => match self.particles.registry().type_for_key(key) {
                Some(particle_type) => self.apply_type(particle_type, chain, host),
                None => Ok(SelectionOutcome::Ignored),
            },
            InputEvent::ControlActivated { particle_type } => {
                self.apply_type(particle_type, chain, host)
            }
        }
    }

    fn pointer_down<H: HostEngine + ?Sized>(
        &mut self,
        position: &Point2<f64>,
        chain: &mut Chain,
        host: &mut H,
    ) -> Result<SelectionOutcome, EngineError> {
        let hit = chain
            .particles()
            .iter()
            .position(|p| host.point_in_bounds(p.body, position));

        match (self.state, hit) {
            (SelectionState::Idle, None) => Ok(SelectionOutcome::Unchanged),
            (SelectionState::Selected { index }, Some(hit)) if hit == index => {
                Ok(SelectionOutcome::Unchanged)
            }
            (state, Some(hit)) => {
                let previous = match state {
                    SelectionState::Selected { index } => {
                        self.unmark(index, chain, host)?;
                        self.state = SelectionState::Idle;
                        self.surface = InputSurface::default();
                        Some(index)
                    }
                    SelectionState::Idle => None,
                };
                self.mark(hit, chain, host)?;
                self.state = SelectionState::Selected { index: hit };
                self.surface = InputSurface {
                    enabled: true,
                    highlighted: None,
                };
                debug!(index = hit, ?previous, "Particle selected.");
                Ok(SelectionOutcome::Selected {
                    index: hit,
                    previous,
                })
            }
            (SelectionState::Selected { index }, None) => {
                self.unmark(index, chain, host)?;
                self.state = SelectionState::Idle;
                self.surface = InputSurface::default();
                debug!(previous = index, "Selection cleared.");
                Ok(SelectionOutcome::Deselected { previous: index })
            }
        }
    }

    fn apply_type<H: HostEngine + ?Sized>(
        &mut self,
        particle_type: ParticleType,
        chain: &mut Chain,
        host: &mut H,
    ) -> Result<SelectionOutcome, EngineError> {
        let SelectionState::Selected { index } = self.state else {
            return Ok(SelectionOutcome::Ignored);
        };
        let from = chain
            .particle(index)
            .map(|p| p.particle_type())
            .unwrap_or(particle_type);
        self.particles.reassign(host, chain, index, particle_type)?;
        self.surface.highlighted = Some(particle_type);
        Ok(SelectionOutcome::Reassigned {
            index,
            from,
            to: particle_type,
        })
    }

    fn mark<H: HostEngine + ?Sized>(
        &self,
        index: usize,
        chain: &mut Chain,
        host: &mut H,
    ) -> Result<(), EngineError> {
        let config = self.particles.config();
        if let Some(particle) = chain.particle_mut(index) {
            host.set_outline(
                particle.body,
                config.selected_outline,
                config.selected_line_width,
            )?;
            particle.selected = true;
        }
        Ok(())
    }

    fn unmark<H: HostEngine + ?Sized>(
        &self,
        index: usize,
        chain: &mut Chain,
        host: &mut H,
    ) -> Result<(), EngineError> {
        let config = self.particles.config();
        if let Some(particle) = chain.particle_mut(index) {
            host.set_outline(particle.body, config.outline, config.line_width)?;
            particle.selected = false;
        }
        Ok(())
    }
}
