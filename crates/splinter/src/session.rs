//! # Shatter Session
//!
//! The per-interaction orchestrator:
//!
//! ```text
//! Idle -> Sampling -> Building -> Animating -> Settling -> Idle
//! ```
//!
//! One session, one cycle in flight. A click received while the session is
//! not idle is ignored by an explicit state guard (the displayed image has
//! no click target during a cycle anyway, but the guard makes the exclusion
//! a checked invariant rather than a structural accident).
//!
//! Every failure path leaves the session in its prior stable state: a
//! surface allocation failure mid-build rolls back to `Idle` with the
//! original image intact; a snapshot failure turns the click into a no-op.

use std::cell::Cell;
use std::rc::Rc;

use rand::Rng;

use splinter_geometry::{sample_vertices, triangulate, Bounds, IndexList, Vec2};
use splinter_surface::{build_fragment, Fragment, Pixel, PixelSurface};
use splinter_timeline::{Timeline, TransformState};

use crate::choreography::choreograph;
use crate::config::{ResetMode, ShatterConfig};
use crate::error::{SessionError, SessionResult};
use crate::input::{relative_impact, ImageBox, PointerClick};
use crate::snapshot::{SceneView, SnapshotService};

/// The session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Image displayed, clickable.
    Idle,
    /// Impact recorded, vertex set and index list being produced.
    Sampling,
    /// Fragments being built, one per triangle.
    Building,
    /// Group timeline running; fragments are live.
    Animating,
    /// Fragments being torn down and state cleared.
    Settling,
}

/// Counters accumulated across the session's lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    /// Completed shatter cycles.
    pub cycles_completed: u64,
    /// Fragments built across all cycles.
    pub fragments_built: u64,
    /// Clicks ignored because a cycle was in flight or missed the image.
    pub clicks_ignored: u64,
}

/// The one active shatter session.
///
/// Owns the image roster, the current cycle's geometry and fragments, and
/// the running timeline. Driven cooperatively: the host forwards clicks to
/// [`handle_click`](Self::handle_click) and clocks the animation with
/// [`update`](Self::update).
pub struct ShatterSession<R: Rng> {
    config: ShatterConfig,
    state: SessionState,
    images: Vec<PixelSurface>,
    image_index: usize,
    source: PixelSurface,
    background: Pixel,
    vertices: Vec<Vec2>,
    indices: IndexList,
    fragments: Vec<Fragment>,
    transforms: Vec<TransformState>,
    impact: Vec2,
    timeline: Option<Timeline>,
    finished: Rc<Cell<bool>>,
    snapshot: Option<Box<dyn SnapshotService>>,
    rng: R,
    stats: SessionStats,
}

impl<R: Rng> ShatterSession<R> {
    /// Creates a session over an image roster.
    ///
    /// The first roster entry becomes the displayed image.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoImage`] when the roster is empty (setup error,
    /// nothing is mounted), [`SessionError::InvalidConfig`] when the
    /// configuration fails validation.
    pub fn new(config: ShatterConfig, images: Vec<PixelSurface>, rng: R) -> SessionResult<Self> {
        config.validate()?;
        let source = images.first().cloned().ok_or(SessionError::NoImage)?;

        Ok(Self {
            config,
            state: SessionState::Idle,
            images,
            image_index: 0,
            source,
            background: Pixel::CLEAR,
            vertices: Vec::new(),
            indices: Vec::new(),
            fragments: Vec::new(),
            transforms: Vec::new(),
            impact: Vec2::ZERO,
            timeline: None,
            finished: Rc::new(Cell::new(false)),
            snapshot: None,
            rng,
            stats: SessionStats::default(),
        })
    }

    /// Attaches the snapshot service used by [`ResetMode::Snapshot`].
    #[must_use]
    pub fn with_snapshot_service(mut self, service: Box<dyn SnapshotService>) -> Self {
        self.snapshot = Some(service);
        self
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Lifetime counters.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Live fragments of the in-flight cycle. Empty while idle.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Live transforms, parallel to [`fragments`](Self::fragments).
    #[must_use]
    pub fn transforms(&self) -> &[TransformState] {
        &self.transforms
    }

    /// Vertex set of the in-flight cycle. Empty while idle.
    #[must_use]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Index list of the in-flight cycle. Empty while idle.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The current source image.
    #[must_use]
    pub const fn source_image(&self) -> &PixelSurface {
        &self.source
    }

    /// Impact point of the most recent cycle.
    #[must_use]
    pub const fn impact(&self) -> Vec2 {
        self.impact
    }

    /// Extent of the current source image.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        #[allow(clippy::cast_precision_loss)]
        Bounds::new(self.source.width() as f32, self.source.height() as f32)
    }

    /// The compositable view of the session: the whole image while idle,
    /// the live fragments during a cycle.
    #[must_use]
    pub fn scene(&self) -> SceneView<'_> {
        SceneView {
            bounds: self.bounds(),
            background: self.background,
            image: (self.state == SessionState::Idle).then_some(&self.source),
            fragments: &self.fragments,
        }
    }

    /// Handles a pointer click, running sampling, triangulation, fragment
    /// building and choreography when the session is idle.
    ///
    /// Returns `Ok(true)` when a cycle started, `Ok(false)` when the click
    /// was ignored (cycle in flight, click outside the image, or snapshot
    /// capture failure).
    ///
    /// # Errors
    ///
    /// Propagates geometry and surface errors; in both cases the session
    /// has already rolled back to `Idle` with the original image intact.
    pub fn handle_click(
        &mut self,
        click: PointerClick,
        image_box: ImageBox,
    ) -> SessionResult<bool> {
        if self.state != SessionState::Idle {
            self.stats.clicks_ignored += 1;
            tracing::debug!(state = ?self.state, "click ignored: cycle in flight");
            return Ok(false);
        }

        let Some(impact) = relative_impact(click, image_box) else {
            self.stats.clicks_ignored += 1;
            return Ok(false);
        };
        // The displayed box and the backing image share dimensions in the
        // reference deployment; scale anyway in case a host letterboxes.
        let bounds = self.bounds();
        let impact = Vec2::new(
            impact.x * bounds.width / image_box.width.max(1.0),
            impact.y * bounds.height / image_box.height.max(1.0),
        );

        if self.config.reset == ResetMode::Snapshot && !self.refresh_source_from_snapshot() {
            self.stats.clicks_ignored += 1;
            return Ok(false);
        }

        self.impact = impact;
        self.state = SessionState::Sampling;
        tracing::debug!(x = impact.x, y = impact.y, "sampling around impact");

        let bounds = self.bounds();
        self.vertices = sample_vertices(
            impact,
            &self.config.rings,
            bounds,
            self.config.jitter_factor,
            &mut self.rng,
        );
        self.indices = match triangulate(&self.vertices) {
            Ok(indices) => indices,
            Err(e) => {
                self.rollback_to_idle();
                return Err(e.into());
            }
        };

        self.state = SessionState::Building;
        let triangle_count = self.indices.len() / 3;
        let mut fragments = Vec::with_capacity(triangle_count);
        for triple in self.indices.chunks_exact(3) {
            let (v0, v1, v2) = (
                self.vertices[triple[0]],
                self.vertices[triple[1]],
                self.vertices[triple[2]],
            );
            match build_fragment(v0, v1, v2, &self.source) {
                Ok(fragment) => fragments.push(fragment),
                Err(e) => {
                    // Fatal for this cycle: drop the partial set, restore
                    // the idle image, surface the error.
                    tracing::warn!(error = %e, "fragment build failed, aborting cycle");
                    self.rollback_to_idle();
                    return Err(e.into());
                }
            }
        }
        self.fragments = fragments;
        self.stats.fragments_built += self.fragments.len() as u64;
        tracing::info!(count = self.fragments.len(), "fragments built");

        // All centroids exist now; only then is any schedule computed.
        self.state = SessionState::Animating;
        let (mut timeline, transforms) = choreograph(
            &self.fragments,
            self.indices.len(),
            impact,
            &self.config,
            &mut self.rng,
        );
        self.finished.set(false);
        let finished = Rc::clone(&self.finished);
        timeline.set_on_complete(Box::new(move || finished.set(true)));
        self.transforms = transforms;
        self.timeline = Some(timeline);

        Ok(true)
    }

    /// Advances the running animation by `dt` seconds.
    ///
    /// Returns true when this call completed the cycle (the session has
    /// settled back to idle). No-op outside `Animating`.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.state != SessionState::Animating {
            return false;
        }
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.advance(dt, &mut self.transforms);
        }
        if self.finished.get() {
            self.settle();
            return true;
        }
        false
    }

    /// Captures a fresh source image via the snapshot service.
    ///
    /// Returns false when capture fails (logged, click becomes a no-op) or
    /// when no service is attached.
    fn refresh_source_from_snapshot(&mut self) -> bool {
        let Some(service) = self.snapshot.as_mut() else {
            tracing::warn!("snapshot reset configured but no service attached");
            return false;
        };

        let scene = SceneView {
            bounds: Bounds::new(
                self.source.width() as f32,
                self.source.height() as f32,
            ),
            background: self.background,
            image: Some(&self.source),
            fragments: &self.fragments,
        };
        match service.capture(&scene) {
            Ok(shot) => {
                self.source = shot;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "snapshot capture failed, ignoring click");
                false
            }
        }
    }

    /// Tears down the finished cycle and returns to idle.
    fn settle(&mut self) {
        self.state = SessionState::Settling;

        self.fragments.clear();
        self.vertices.clear();
        self.indices.clear();
        self.transforms.clear();
        self.timeline = None;
        self.finished.set(false);

        if self.config.reset == ResetMode::Advance && self.images.len() > 1 {
            self.image_index = (self.image_index + 1) % self.images.len();
            self.source = self.images[self.image_index].clone();
        }

        self.stats.cycles_completed += 1;
        self.state = SessionState::Idle;
        tracing::info!(cycle = self.stats.cycles_completed, "shatter cycle settled");
    }

    /// Restores the idle state after a mid-cycle failure.
    fn rollback_to_idle(&mut self) {
        self.fragments.clear();
        self.vertices.clear();
        self.indices.clear();
        self.transforms.clear();
        self.timeline = None;
        self.finished.set(false);
        self.state = SessionState::Idle;
    }
}
