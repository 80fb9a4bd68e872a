//! Particle field: generation, expiry and teardown for one decorative instance.
//!
//! A field advances in simulated time. Each call to [`ParticleField::advance`]
//! replays, in chronological order, every generator tick and every expiry that
//! fell due since the previous call. Expiries due at the same instant as a
//! tick are processed first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use nightsky_foundation::{
    Color, FieldRng, Interval, ParticleId, Result, Timestamp, Units, Vec2, Viewport,
};
use nightsky_storage::{Depth, LiveSet, Particle, ParticleStore, StoreStats};

use crate::config::{Distribution, Emission, FieldConfig, Lifetime};
use crate::frame::{Frame, Sprite};
use crate::proximity::{Link, ProximityGraph};

/// What a single advance did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    /// Generator ticks that elapsed.
    pub ticks: u64,
    /// Particles created.
    pub spawned: usize,
    /// Particles removed by expiry.
    pub expired: usize,
}

impl AdvanceReport {
    /// Returns true if the live set changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.spawned > 0 || self.expired > 0
    }
}

/// Lifetime counters of a field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStats {
    /// Field name.
    pub name: String,
    /// Storage counters.
    pub store: StoreStats,
    /// Generator ticks elapsed.
    pub ticks: u64,
    /// Generation attempts skipped by chance or by the live cap.
    pub skipped: u64,
    /// Largest live count observed.
    pub peak_live: usize,
    /// Whether the field has been torn down.
    pub torn_down: bool,
}

/// One decorative particle instance.
#[derive(Clone, Debug)]
pub struct ParticleField {
    config: FieldConfig,
    store: ParticleStore,
    rng: FieldRng,
    viewport: Viewport,
    pointer: Option<Vec2>,
    now: Timestamp,
    next_tick: Option<Timestamp>,
    ticks: u64,
    skipped: u64,
    peak_live: usize,
    torn_down: bool,
}

impl ParticleField {
    /// Mounts a field at `now`.
    ///
    /// Burst fields create all their particles immediately; interval fields
    /// schedule their first tick one period after mount.
    ///
    /// # Errors
    /// Returns an error if the configuration fails validation.
    pub fn mount(config: FieldConfig, seed: u64, viewport: Viewport, now: Timestamp) -> Result<Self> {
        config.validate()?;

        let next_tick = match config.emission {
            Emission::Interval { every_ms, .. } => Some(now.after(every_ms)),
            Emission::Pointer | Emission::Burst { .. } => None,
        };
        let rng = FieldRng::for_label(seed, &config.name);

        let mut field = Self {
            config,
            store: ParticleStore::new(),
            rng,
            viewport,
            pointer: None,
            now,
            next_tick,
            ticks: 0,
            skipped: 0,
            peak_live: 0,
            torn_down: false,
        };

        if let Emission::Burst { count } = field.config.emission {
            for _ in 0..count {
                field.try_spawn(now);
            }
        }

        debug!(
            field = %field.config.name,
            %now,
            live = field.store.len(),
            "field mounted"
        );
        Ok(field)
    }

    /// Advances simulated time to `now`.
    ///
    /// Time never runs backwards: an earlier `now` is ignored. After teardown
    /// this is a no-op.
    pub fn advance(&mut self, now: Timestamp) -> AdvanceReport {
        let mut report = AdvanceReport::default();
        if self.torn_down || now < self.now {
            return report;
        }

        loop {
            let expiry = self.store.next_expiry().filter(|at| *at <= now);
            let tick = self.next_tick.filter(|at| *at <= now);

            match (expiry, tick) {
                (Some(at), Some(tick_at)) if at <= tick_at => {
                    report.expired += self.store.expire_due(at).len();
                }
                (Some(at), None) => {
                    report.expired += self.store.expire_due(at).len();
                }
                (_, Some(tick_at)) => {
                    report.ticks += 1;
                    if self.tick(tick_at) {
                        report.spawned += 1;
                    }
                }
                (None, None) => break,
            }
        }

        self.now = now;
        report
    }

    /// Feeds a pointer sample taken at `now`.
    ///
    /// Advances to `now` first. Pointer-driven fields spawn one particle at
    /// the sample; other fields only remember it. Returns the new particle's id.
    pub fn pointer_moved(&mut self, position: Vec2, now: Timestamp) -> Option<ParticleId> {
        if self.torn_down || !position.is_finite() {
            return None;
        }
        self.advance(now);
        self.pointer = Some(position);

        match self.config.emission {
            Emission::Pointer => self.try_spawn(self.now),
            Emission::Interval { .. } | Emission::Burst { .. } => None,
        }
    }

    /// Updates the viewport used for percent-to-pixel conversion.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Removes a particle before its expiry. Absent ids are a no-op.
    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        self.store.remove(id)
    }

    /// Stops the generator, cancels every pending expiry and empties the live
    /// set. Later calls to [`advance`](Self::advance) and
    /// [`pointer_moved`](Self::pointer_moved) do nothing.
    ///
    /// Returns the number of particles discarded; a second teardown returns 0.
    pub fn teardown(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        self.torn_down = true;
        self.next_tick = None;
        let discarded = self.store.clear();
        debug!(field = %self.config.name, discarded, "field torn down");
        discarded
    }

    /// Returns true once [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The field's notion of the current time.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// The live set.
    #[must_use]
    pub fn live(&self) -> &LiveSet {
        self.store.live()
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if nothing is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Changes whenever the live membership changes.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.store.live().version()
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> FieldStats {
        FieldStats {
            name: self.config.name.clone(),
            store: self.store.stats(),
            ticks: self.ticks,
            skipped: self.skipped,
            peak_live: self.peak_live,
            torn_down: self.torn_down,
        }
    }

    /// Proximity links between live particles, if the field has a threshold.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let Some(threshold) = self.config.proximity else {
            return Vec::new();
        };
        let Ok(graph) = ProximityGraph::new(threshold) else {
            return Vec::new();
        };
        graph.links(
            self.store
                .live()
                .iter()
                .map(|p| (p.id, self.viewport.to_pixels(p.position, p.units))),
        )
    }

    /// Renders the live set at the field's current time.
    ///
    /// `parallax` is added to the pixel position of near-layer particles.
    #[must_use]
    pub fn frame(&self, parallax: Vec2) -> Frame {
        let sprites = self
            .store
            .live()
            .iter()
            .map(|p| {
                let mut position = self.viewport.to_pixels(p.position, p.units);
                if p.depth == Depth::Near {
                    position = position + parallax;
                }
                let opacity = if self.config.fade {
                    p.fading_opacity(self.now)
                } else {
                    p.opacity
                };
                Sprite {
                    id: p.id,
                    position,
                    size: p.size,
                    opacity,
                    color: p.color,
                    length: p.length,
                    depth: p.depth,
                    animation_ms: p.animation_ms,
                    delay_ms: p.delay_ms,
                }
            })
            .collect();

        Frame {
            field: self.config.name.clone(),
            at: self.now,
            version: self.version(),
            sprites,
            links: self.links(),
        }
    }

    /// Runs one generator tick at `at`. Returns true if a particle was created.
    fn tick(&mut self, at: Timestamp) -> bool {
        self.ticks += 1;
        let (every_ms, chance) = match self.config.emission {
            Emission::Interval { every_ms, chance } => (every_ms, chance),
            Emission::Pointer | Emission::Burst { .. } => {
                self.next_tick = None;
                return false;
            }
        };
        self.next_tick = Some(at.after(every_ms));

        if !self.rng.chance(chance) {
            self.skipped += 1;
            return false;
        }
        self.try_spawn(at).is_some()
    }

    /// Creates one particle born at `at`, unless the live cap is reached.
    fn try_spawn(&mut self, at: Timestamp) -> Option<ParticleId> {
        if self
            .config
            .max_live
            .is_some_and(|cap| self.store.len() >= cap)
        {
            self.skipped += 1;
            return None;
        }

        let particle = self.build_particle(at);
        let id = particle.id;
        if !self.store.insert(particle) {
            return None;
        }
        self.peak_live = self.peak_live.max(self.store.len());
        Some(id)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn build_particle(&mut self, at: Timestamp) -> Particle {
        let id = self.store.allocate_id();
        let config = &self.config;
        let rng = &mut self.rng;

        let depth = match &config.depth {
            Some(mix) if rng.chance(mix.near_chance) => Depth::Near,
            _ => Depth::Far,
        };

        let (position, units) = match &config.distribution {
            Distribution::Region { x, y } => (Vec2::new(rng.sample(x), rng.sample(y)), Units::Percent),
            Distribution::Pointer { jitter } => {
                let anchor = self.pointer.unwrap_or_else(|| self.viewport.center());
                let spread = Interval::new(-jitter, *jitter).unwrap_or_else(|_| Interval::fixed(0.0));
                let offset = Vec2::new(rng.sample(&spread), rng.sample(&spread));
                (anchor + offset, Units::Pixels)
            }
        };

        let (size_bonus, animation_bonus) = match (&config.depth, depth) {
            (Some(mix), Depth::Near) => (mix.near_size_bonus, mix.near_animation_bonus_ms),
            _ => (0.0, 0.0),
        };

        let mut particle = Particle::new(id, position, units, at);
        particle.depth = depth;
        particle.size = (rng.sample(&config.size) + size_bonus).max(0.0);
        particle.opacity = rng.sample(&config.opacity).clamp(0.0, 1.0);
        particle.color = rng.pick(&config.palette).copied().unwrap_or(Color::WHITE);
        particle.animation_ms = (rng.sample(&config.animation_ms) + animation_bonus).max(0.0).round() as u64;
        particle.delay_ms = rng.sample(&config.delay_ms).max(0.0).round() as u64;
        particle.length = config.length.as_ref().map(|range| rng.sample(range));

        match &config.lifetime {
            Lifetime::Permanent => particle,
            Lifetime::Timed(range) => {
                let lifetime = rng.sample(range).max(0.0).round() as u64;
                if config.animate_over_lifetime {
                    particle.animation_ms = lifetime;
                }
                particle.with_lifetime(lifetime)
            }
        }
    }
}
