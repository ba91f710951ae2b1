//! Group timelines with start offsets and nesting.
//!
//! A `Timeline` holds tweens and nested timelines, each inserted at a start
//! offset. Its duration is the maximum of `offset + child duration`. It is
//! advanced cooperatively by the host (`advance(dt)`) and fires its
//! completion callback exactly once, the tick its end is reached - including
//! a timeline with no children at all.

use crate::tween::{TransformState, Tween};

/// Completion hook invoked exactly once when a timeline finishes.
pub type CompletionFn = Box<dyn FnOnce()>;

/// One scheduled entry of a timeline.
enum Node {
    /// A leaf tween.
    Tween(Tween),
    /// A nested group.
    Group(Timeline),
}

/// A scheduled child: a node plus its start offset within the parent.
struct Child {
    offset: f32,
    node: Node,
}

/// A group of tweens and nested groups sharing one clock.
#[derive(Default)]
pub struct Timeline {
    children: Vec<Child>,
    elapsed: f32,
    completed: bool,
    on_complete: Option<CompletionFn>,
}

impl Timeline {
    /// Creates an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tween at `offset` seconds from the timeline start.
    pub fn add_tween(&mut self, tween: Tween, offset: f32) {
        self.children.push(Child {
            offset: offset.max(0.0),
            node: Node::Tween(tween),
        });
    }

    /// Inserts a nested timeline at `offset` seconds from the start.
    pub fn add_group(&mut self, group: Timeline, offset: f32) {
        self.children.push(Child {
            offset: offset.max(0.0),
            node: Node::Group(group),
        });
    }

    /// Sets the completion hook. Replaces any previous hook.
    pub fn set_on_complete(&mut self, hook: CompletionFn) {
        self.on_complete = Some(hook);
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the timeline has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total duration: the maximum of `offset + child duration`.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.children
            .iter()
            .map(|c| {
                c.offset
                    + match &c.node {
                        Node::Tween(t) => t.duration,
                        Node::Group(g) => g.duration(),
                    }
            })
            .fold(0.0, f32::max)
    }

    /// Returns true once the timeline has run to its end.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed
    }

    /// Advances the timeline clock by `dt` seconds and applies every active
    /// tween to `targets`.
    ///
    /// Returns true when the timeline is complete. The completion hook runs
    /// on the first advance that reaches the end, exactly once.
    pub fn advance(&mut self, dt: f32, targets: &mut [TransformState]) -> bool {
        self.elapsed += dt.max(0.0);
        let time = self.elapsed;
        self.apply_at(time, targets);
        self.completed
    }

    /// Samples the timeline at an absolute local time.
    ///
    /// Nested timelines are sampled with their parent-relative clock, so a
    /// group never owns a drifting clock of its own.
    fn apply_at(&mut self, time: f32, targets: &mut [TransformState]) {
        for child in &mut self.children {
            let local = time - child.offset;
            match &mut child.node {
                Node::Tween(tween) => tween.sample(local, targets),
                Node::Group(group) => group.apply_at(local, targets),
            }
        }

        if !self.completed && time >= self.duration() {
            self.completed = true;
            if let Some(hook) = self.on_complete.take() {
                tracing::debug!(children = self.children.len(), "timeline complete");
                hook();
            }
        }
    }
}
