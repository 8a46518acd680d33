//! Decorative particle background.
//!
//! A fixed-size field of slow-drifting dots behind the home page hero. The
//! model is plain Rust so the drift is testable; the component renders it as
//! SVG and advances it on an interval that starts on mount and is cleared on
//! unmount.

use leptos::prelude::*;
use std::time::Duration;

/// Logical field size; the SVG scales to the viewport.
pub const FIELD_WIDTH: f32 = 1200.0;
pub const FIELD_HEIGHT: f32 = 600.0;

const PARTICLE_COUNT: usize = 48;
const FRAME_MILLIS: u64 = 50;

/// One drifting dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

/// The whole field of particles.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seed a field deterministically from an LCG.
    pub fn seeded(width: f32, height: f32, count: usize, seed: u32) -> Self {
        let mut state = seed.max(1);
        let mut next = move || {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            // Map the high bits into [0, 1); the low bits cycle too fast.
            (state >> 8) as f32 / (1u32 << 24) as f32
        };

        let particles = (0..count)
            .map(|_| Particle {
                x: next() * width,
                y: next() * height,
                vx: (next() - 0.5) * 1.6,
                vy: (next() - 0.5) * 1.6,
                radius: 1.0 + next() * 2.5,
            })
            .collect();

        Self {
            width,
            height,
            particles,
        }
    }

    /// Advance every particle one frame, wrapping at the field edges.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 {
                p.x += self.width;
            } else if p.x > self.width {
                p.x -= self.width;
            }
            if p.y < 0.0 {
                p.y += self.height;
            } else if p.y > self.height {
                p.y -= self.height;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// The animated backdrop. The interval starts in an effect (so it only runs
/// in the browser) and is cleared on unmount; navigating away stops the loop.
#[component]
pub fn ParticleBackground() -> impl IntoView {
    let field = RwSignal::new(ParticleField::seeded(
        FIELD_WIDTH,
        FIELD_HEIGHT,
        PARTICLE_COUNT,
        0x0F0_110,
    ));

    Effect::new(move |_| {
        let handle = set_interval_with_handle(
            move || field.update(|f| f.step()),
            Duration::from_millis(FRAME_MILLIS),
        )
        .ok();
        on_cleanup(move || {
            if let Some(handle) = handle {
                handle.clear();
            }
        });
    });

    view! {
        <svg
            class="particle-field"
            viewBox=format!("0 0 {} {}", FIELD_WIDTH as u32, FIELD_HEIGHT as u32)
            preserveAspectRatio="xMidYMid slice"
            aria-hidden="true"
        >
            {move || {
                field
                    .get()
                    .particles()
                    .iter()
                    .map(|p| {
                        view! {
                            <circle
                                cx=format!("{:.1}", p.x)
                                cy=format!("{:.1}", p.y)
                                r=format!("{:.1}", p.radius)
                            />
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeding_is_deterministic() {
        let a = ParticleField::seeded(100.0, 100.0, 10, 7);
        let b = ParticleField::seeded(100.0, 100.0, 10, 7);
        assert_eq!(a, b);

        let c = ParticleField::seeded(100.0, 100.0, 10, 8);
        assert_ne!(a, c);
    }

    #[test]
    fn test_particles_stay_in_field() {
        let mut field = ParticleField::seeded(50.0, 30.0, 20, 42);
        for _ in 0..1000 {
            field.step();
        }
        for p in field.particles() {
            assert!((0.0..=50.0).contains(&p.x), "x out of field: {}", p.x);
            assert!((0.0..=30.0).contains(&p.y), "y out of field: {}", p.y);
        }
    }

    #[test]
    fn test_step_moves_particles() {
        let mut field = ParticleField::seeded(100.0, 100.0, 5, 3);
        let before = field.particles().to_vec();
        field.step();
        assert_ne!(before, field.particles());
    }
}
