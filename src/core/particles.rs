//! Particle field behind the hero section
//!
//! Pure simulation state; drawing happens on a canvas in the UI layer. The
//! random source is injected so the field can be stepped deterministically.

/// Brand colours particles are drawn in
pub const PARTICLE_COLORS: [&str; 4] = ["#6B46C1", "#9D174D", "#059669", "#22D3EE"];

/// Colour of the lines joining nearby particles
pub const LINK_COLOR: &str = "#6B46C1";

/// Pairs closer than this are joined by a line
pub const LINK_DISTANCE: f64 = 100.0;

/// Pointer attraction radius
pub const ATTRACT_RADIUS: f64 = 150.0;

const ATTRACT_STRENGTH: f64 = 0.0001;
const DAMPING: f64 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Filled dot
    Data,
    /// Small dot with a ring
    Neural,
    /// Square
    Spark,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: &'static str,
    pub kind: ParticleKind,
}

/// Field parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOptions {
    pub density: usize,
    pub speed: f64,
    pub interactive: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            density: 50,
            speed: 0.5,
            interactive: true,
        }
    }
}

/// A line to draw between two particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
    options: FieldOptions,
    pointer: Option<(f64, f64)>,
}

impl ParticleField {
    /// Scatter `options.density` particles over a `width` x `height` area.
    /// `rng` must return values in `[0, 1)`.
    pub fn new(
        width: f64,
        height: f64,
        options: FieldOptions,
        mut rng: impl FnMut() -> f64,
    ) -> Self {
        let particles = (0..options.density)
            .map(|_| spawn(width, height, options.speed, &mut rng))
            .collect();
        Self {
            width,
            height,
            particles,
            options,
            pointer: None,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Pointer position in canvas coordinates, `None` when it left the area
    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        self.pointer = pointer;
    }

    /// Advance one animation frame
    pub fn step(&mut self) {
        let pointer = if self.options.interactive {
            self.pointer
        } else {
            None
        };

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if let Some((mx, my)) = pointer {
                let dx = mx - p.x;
                let dy = my - p.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < ATTRACT_RADIUS {
                    let force = (ATTRACT_RADIUS - distance) / ATTRACT_RADIUS;
                    p.vx += dx * force * ATTRACT_STRENGTH;
                    p.vy += dy * force * ATTRACT_STRENGTH;
                }
            }

            if p.x < 0.0 {
                p.x = self.width;
            } else if p.x > self.width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = self.height;
            } else if p.y > self.height {
                p.y = 0.0;
            }

            p.vx *= DAMPING;
            p.vy *= DAMPING;
        }
    }

    /// Lines between every pair closer than [`LINK_DISTANCE`], fading with distance
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < LINK_DISTANCE {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        alpha: (LINK_DISTANCE - distance) / LINK_DISTANCE * 0.1,
                    });
                }
            }
        }
        links
    }
}

fn spawn(width: f64, height: f64, speed: f64, rng: &mut impl FnMut() -> f64) -> Particle {
    let kinds = [ParticleKind::Data, ParticleKind::Neural, ParticleKind::Spark];
    Particle {
        x: rng() * width,
        y: rng() * height,
        vx: (rng() - 0.5) * speed,
        vy: (rng() - 0.5) * speed,
        size: rng() * 3.0 + 1.0,
        opacity: rng() * 0.5 + 0.2,
        color: PARTICLE_COLORS[pick(rng(), PARTICLE_COLORS.len())],
        kind: kinds[pick(rng(), kinds.len())],
    }
}

fn pick(r: f64, len: usize) -> usize {
    ((r * len as f64) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed list of values in `[0, 1)`
    fn sequence(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 2.0,
            opacity: 0.5,
            color: PARTICLE_COLORS[0],
            kind: ParticleKind::Data,
        }
    }

    fn field_with(particles: Vec<Particle>, interactive: bool) -> ParticleField {
        let mut field = ParticleField::new(
            400.0,
            300.0,
            FieldOptions {
                density: 0,
                speed: 0.5,
                interactive,
            },
            sequence(&[0.5]),
        );
        field.particles = particles;
        field
    }

    #[test]
    fn test_spawn_within_bounds() {
        let field = ParticleField::new(
            800.0,
            600.0,
            FieldOptions::default(),
            sequence(&[0.0, 0.25, 0.5, 0.75, 0.999]),
        );

        assert_eq!(field.particles.len(), 50);
        for p in &field.particles {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
            assert!((1.0..4.0).contains(&p.size));
            assert!((0.2..0.7).contains(&p.opacity));
            assert!(PARTICLE_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn test_step_moves_and_damps() {
        let mut field = field_with(
            vec![Particle {
                vx: 1.0,
                vy: -2.0,
                ..still(100.0, 100.0)
            }],
            false,
        );
        field.step();

        let p = &field.particles[0];
        assert_eq!((p.x, p.y), (101.0, 98.0));
        assert!((p.vx - 0.99).abs() < 1e-12);
        assert!((p.vy + 1.98).abs() < 1e-12);
    }

    #[test]
    fn test_step_wraps_edges() {
        let mut field = field_with(
            vec![
                Particle {
                    vx: -2.0,
                    ..still(1.0, 50.0)
                },
                Particle {
                    vy: 3.0,
                    ..still(50.0, 299.0)
                },
            ],
            false,
        );
        field.step();

        assert_eq!(field.particles[0].x, 400.0);
        assert_eq!(field.particles[1].y, 0.0);
    }

    #[test]
    fn test_pointer_attracts_only_when_interactive() {
        let mut passive = field_with(vec![still(100.0, 100.0)], false);
        passive.set_pointer(Some((150.0, 100.0)));
        passive.step();
        assert_eq!(passive.particles[0].vx, 0.0);

        let mut active = field_with(vec![still(100.0, 100.0)], true);
        active.set_pointer(Some((150.0, 100.0)));
        active.step();
        assert!(active.particles[0].vx > 0.0);
        assert_eq!(active.particles[0].vy, 0.0);

        let mut far = field_with(vec![still(100.0, 100.0)], true);
        far.set_pointer(Some((390.0, 100.0)));
        far.step();
        assert_eq!(far.particles[0].vx, 0.0);
    }

    #[test]
    fn test_links_between_close_pairs() {
        let field = field_with(
            vec![still(0.0, 0.0), still(50.0, 0.0), still(300.0, 0.0)],
            false,
        );
        let links = field.links();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, (0.0, 0.0));
        assert_eq!(links[0].to, (50.0, 0.0));
        assert!((links[0].alpha - 0.05).abs() < 1e-12);
    }
}
