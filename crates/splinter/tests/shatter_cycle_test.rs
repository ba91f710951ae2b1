//! # Shatter Cycle Integration Tests
//!
//! Drives the whole pipeline the way a host would: clicks in, frame ticks,
//! settling out.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use splinter::{
    DirectionMode, ImageBox, PointerClick, ResetMode, SceneView, SessionState, ShatterConfig,
    ShatterSession, SnapshotError, SnapshotResult, SnapshotService, SoftwareCompositor,
};
use splinter_geometry::{sample_vertices, triangulate, Bounds, RingSpec, Vec2};
use splinter_surface::{build_fragment, Pixel, PixelSurface};

const FRAME: f32 = 0.016;

fn test_image(w: u32, h: u32, fill: Pixel) -> PixelSurface {
    let mut image = PixelSurface::try_new(w, h).unwrap();
    image.fill(fill);
    image
}

fn small_config() -> ShatterConfig {
    ShatterConfig {
        rings: vec![RingSpec::new(10.0, 3)],
        ..ShatterConfig::default()
    }
}

fn run_to_idle(session: &mut ShatterSession<ChaCha8Rng>) {
    for _ in 0..2_000 {
        if session.update(FRAME) {
            return;
        }
    }
    panic!("cycle never settled");
}

/// Scenario from the pipeline contract: impact (50,50) on a 100x100 image
/// with one ring {r:10, c:3}.
#[test]
fn test_end_to_end_small_scenario() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let bounds = Bounds::new(100.0, 100.0);
    let rings = [RingSpec::new(10.0, 3)];
    let image = test_image(100, 100, Pixel::rgba(50, 60, 70, 255));

    let vertices = sample_vertices(Vec2::new(50.0, 50.0), &rings, bounds, 0.25, &mut rng);
    assert_eq!(vertices.len(), 4);
    assert_eq!(vertices[0], Vec2::new(50.0, 50.0));
    for v in &vertices {
        assert!(bounds.contains(*v));
    }

    let indices = triangulate(&vertices).unwrap();
    assert!(indices.len() >= 3);
    assert_eq!(indices.len() % 3, 0);

    let mut fragments = Vec::new();
    for triple in indices.chunks_exact(3) {
        let fragment = build_fragment(
            vertices[triple[0]],
            vertices[triple[1]],
            vertices[triple[2]],
            &image,
        )
        .unwrap();
        assert!(fragment.bounds.w * fragment.bounds.h > 0.0);
        fragments.push(fragment);
    }
    assert_eq!(fragments.len(), indices.len() / 3);
}

#[test]
fn test_two_cycles_with_reattach() {
    let image = test_image(100, 100, Pixel::rgba(10, 10, 10, 255));
    let mut session = ShatterSession::new(
        small_config(),
        vec![image.clone()],
        ChaCha8Rng::seed_from_u64(11),
    )
    .unwrap();
    let image_box = ImageBox::at_origin(100.0, 100.0);

    assert!(session
        .handle_click(PointerClick::new(30.0, 40.0), image_box)
        .unwrap());
    run_to_idle(&mut session);

    // Same image re-attached, collections empty, ready for the next click.
    assert_eq!(session.source_image(), &image);
    assert!(session.fragments().is_empty());

    assert!(session
        .handle_click(PointerClick::new(70.0, 60.0), image_box)
        .unwrap());
    run_to_idle(&mut session);
    assert_eq!(session.stats().cycles_completed, 2);
}

#[test]
fn test_advance_mode_rotates_roster() {
    let first = test_image(100, 100, Pixel::rgba(1, 0, 0, 255));
    let second = test_image(100, 100, Pixel::rgba(2, 0, 0, 255));
    let config = ShatterConfig {
        reset: ResetMode::Advance,
        ..small_config()
    };
    let mut session = ShatterSession::new(
        config,
        vec![first.clone(), second.clone()],
        ChaCha8Rng::seed_from_u64(5),
    )
    .unwrap();
    let image_box = ImageBox::at_origin(100.0, 100.0);

    assert_eq!(session.source_image(), &first);
    session
        .handle_click(PointerClick::new(50.0, 50.0), image_box)
        .unwrap();
    run_to_idle(&mut session);
    assert_eq!(session.source_image(), &second);

    session
        .handle_click(PointerClick::new(50.0, 50.0), image_box)
        .unwrap();
    run_to_idle(&mut session);
    assert_eq!(session.source_image(), &first);
}

#[test]
fn test_snapshot_mode_uses_captured_view() {
    let config = ShatterConfig {
        reset: ResetMode::Snapshot,
        ..small_config()
    };
    let image = test_image(100, 100, Pixel::rgba(40, 40, 40, 255));
    let mut session = ShatterSession::new(config, vec![image], ChaCha8Rng::seed_from_u64(9))
        .unwrap()
        .with_snapshot_service(Box::new(SoftwareCompositor));
    let image_box = ImageBox::at_origin(100.0, 100.0);

    let started = session
        .handle_click(PointerClick::new(50.0, 50.0), image_box)
        .unwrap();
    assert!(started);
    assert_eq!(session.state(), SessionState::Animating);

    // The captured view keeps the image content.
    assert_eq!(
        session.source_image().get(10, 10),
        Some(Pixel::rgba(40, 40, 40, 255))
    );

    run_to_idle(&mut session);
    assert_eq!(session.state(), SessionState::Idle);
}

/// A snapshot service whose fetch always fails, as when image sources are
/// unreachable.
struct UnreachableHost;

impl SnapshotService for UnreachableHost {
    fn capture(&mut self, _scene: &SceneView<'_>) -> SnapshotResult<PixelSurface> {
        Err(SnapshotError::Fetch("host unreachable".into()))
    }
}

#[test]
fn test_snapshot_failure_turns_click_into_noop() {
    let config = ShatterConfig {
        reset: ResetMode::Snapshot,
        ..small_config()
    };
    let image = test_image(100, 100, Pixel::rgba(40, 40, 40, 255));
    let mut session = ShatterSession::new(config, vec![image.clone()], ChaCha8Rng::seed_from_u64(9))
        .unwrap()
        .with_snapshot_service(Box::new(UnreachableHost));

    let started = session
        .handle_click(
            PointerClick::new(50.0, 50.0),
            ImageBox::at_origin(100.0, 100.0),
        )
        .unwrap();

    // Reported and ignored: no cycle, prior stable state intact.
    assert!(!started);
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.source_image(), &image);
    assert_eq!(session.stats().clicks_ignored, 1);
}

#[test]
fn test_out_mode_translates_in_mode_recedes() {
    let image_box = ImageBox::at_origin(100.0, 100.0);

    // Out: fragments pick up positional offsets.
    let mut out_session = ShatterSession::new(
        small_config(),
        vec![test_image(100, 100, Pixel::rgba(7, 7, 7, 255))],
        ChaCha8Rng::seed_from_u64(21),
    )
    .unwrap();
    out_session
        .handle_click(PointerClick::new(50.0, 50.0), image_box)
        .unwrap();
    for _ in 0..45 {
        out_session.update(FRAME);
    }
    assert!(out_session
        .transforms()
        .iter()
        .any(|t| t.translate_x != 0.0 || t.translate_y != 0.0));

    // In: fragments sink in place, no positional offset ever.
    let config = ShatterConfig {
        direction: DirectionMode::In,
        ..small_config()
    };
    let mut in_session = ShatterSession::new(
        config,
        vec![test_image(100, 100, Pixel::rgba(7, 7, 7, 255))],
        ChaCha8Rng::seed_from_u64(21),
    )
    .unwrap();
    in_session
        .handle_click(PointerClick::new(50.0, 50.0), image_box)
        .unwrap();
    for _ in 0..45 {
        in_session.update(FRAME);
    }
    assert!(in_session.transforms().iter().any(|t| t.depth < 0.0));
    assert!(in_session
        .transforms()
        .iter()
        .all(|t| t.translate_x == 0.0 && t.translate_y == 0.0));
}

#[test]
fn test_scene_view_swaps_image_for_fragments_mid_cycle() {
    let mut session = ShatterSession::new(
        small_config(),
        vec![test_image(100, 100, Pixel::rgba(90, 90, 90, 255))],
        ChaCha8Rng::seed_from_u64(2),
    )
    .unwrap();

    let scene = session.scene();
    assert!(scene.image.is_some());
    assert!(scene.fragments.is_empty());

    session
        .handle_click(
            PointerClick::new(50.0, 50.0),
            ImageBox::at_origin(100.0, 100.0),
        )
        .unwrap();

    let scene = session.scene();
    assert!(scene.image.is_none(), "whole image is detached mid-cycle");
    assert!(!scene.fragments.is_empty());
}
