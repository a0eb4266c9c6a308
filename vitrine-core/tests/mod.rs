use std::time::{Duration, Instant};

use vitrine_core::color::Rgba;
use vitrine_core::geometry::grid_lines;
use vitrine_core::motion::{CarouselDrift, SectionGlide, GLIDE_DURATION};
use vitrine_core::pager::{PagerError, ScrollIntent, SectionPager, WheelOutcome, COOLDOWN};
use vitrine_core::scene::{
    Camera, SceneState, SpinAxis, GRID_DIVISIONS, SPIN_STEP,
};

/// Approximate float equality (within epsilon).
fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.001
}

// ============================================================================
// SectionPager Tests
// ============================================================================

#[test]
fn test_pager_starts_at_section_zero() {
    let pager = SectionPager::new(3).unwrap();
    assert_eq!(pager.current(), 0);
    assert_eq!(pager.section_count(), 3);
    assert!(approx_eq(pager.offset_sections(), 0.0));
}

#[test]
fn test_pager_rejects_zero_sections() {
    assert!(matches!(SectionPager::new(0), Err(PagerError::NoSections)));
}

#[test]
fn test_pager_advances_one_section() {
    let mut pager = SectionPager::new(3).unwrap();
    let now = Instant::now();
    assert_eq!(
        pager.handle_wheel(ScrollIntent::Advance, now),
        WheelOutcome::Moved(1)
    );
    assert_eq!(pager.current(), 1);
    assert!(approx_eq(pager.offset_sections(), -1.0));
}

#[test]
fn test_pager_ignores_event_mid_cooldown() {
    let mut pager = SectionPager::new(3).unwrap();
    let t0 = Instant::now();
    assert_eq!(
        pager.handle_wheel(ScrollIntent::Advance, t0),
        WheelOutcome::Moved(1)
    );
    // 100ms later: still cooling, event discarded.
    let t1 = t0 + Duration::from_millis(100);
    assert_eq!(
        pager.handle_wheel(ScrollIntent::Advance, t1),
        WheelOutcome::Ignored
    );
    assert_eq!(pager.current(), 1);
}

#[test]
fn test_pager_ignored_event_does_not_rearm_cooldown() {
    let mut pager = SectionPager::new(3).unwrap();
    let t0 = Instant::now();
    pager.handle_wheel(ScrollIntent::Advance, t0);
    pager.handle_wheel(ScrollIntent::Advance, t0 + Duration::from_millis(900));
    // The ignored event at t0+900 must not have extended the window.
    let t2 = t0 + COOLDOWN + Duration::from_millis(1);
    assert_eq!(
        pager.handle_wheel(ScrollIntent::Advance, t2),
        WheelOutcome::Moved(2)
    );
}

#[test]
fn test_pager_spaced_advances_visit_each_section_once() {
    // Spec scenario: N=3, events [+1, +1, +1] spaced 1100ms apart
    // → sections visited [1, 2, 2].
    let mut pager = SectionPager::new(3).unwrap();
    let t0 = Instant::now();
    let spacing = Duration::from_millis(1100);

    let mut visited = Vec::new();
    for i in 0..3u32 {
        pager.handle_wheel(ScrollIntent::Advance, t0 + spacing * i);
        visited.push(pager.current());
    }
    assert_eq!(visited, vec![1, 2, 2]);
}

#[test]
fn test_pager_rapid_advances_are_debounced() {
    // Spec scenario: N=3, events [+1, +1] spaced 100ms apart
    // → sections visited [1, 1].
    let mut pager = SectionPager::new(3).unwrap();
    let t0 = Instant::now();

    pager.handle_wheel(ScrollIntent::Advance, t0);
    let first = pager.current();
    pager.handle_wheel(ScrollIntent::Advance, t0 + Duration::from_millis(100));
    let second = pager.current();

    assert_eq!((first, second), (1, 1));
}

#[test]
fn test_pager_bounce_at_last_section_arms_cooldown() {
    let mut pager = SectionPager::new(2).unwrap();
    let t0 = Instant::now();
    pager.handle_wheel(ScrollIntent::Advance, t0);
    assert_eq!(pager.current(), 1);

    // Past the cooldown: the advance bounces off the last section...
    let t1 = t0 + COOLDOWN + Duration::from_millis(50);
    assert_eq!(
        pager.handle_wheel(ScrollIntent::Advance, t1),
        WheelOutcome::Bounced
    );

    // ...and still consumed a fresh cooldown window.
    assert!(pager.is_cooling(t1 + Duration::from_millis(500)));
    assert_eq!(
        pager.handle_wheel(ScrollIntent::Retreat, t1 + Duration::from_millis(500)),
        WheelOutcome::Ignored
    );
}

#[test]
fn test_pager_bounce_at_first_section() {
    let mut pager = SectionPager::new(3).unwrap();
    let now = Instant::now();
    assert_eq!(
        pager.handle_wheel(ScrollIntent::Retreat, now),
        WheelOutcome::Bounced
    );
    assert_eq!(pager.current(), 0);
}

#[test]
fn test_pager_never_leaves_range() {
    let mut pager = SectionPager::new(3).unwrap();
    let t0 = Instant::now();
    let spacing = Duration::from_millis(1100);

    // An arbitrary mixed gesture sequence, each past the cooldown.
    let gestures = [
        ScrollIntent::Retreat,
        ScrollIntent::Advance,
        ScrollIntent::Advance,
        ScrollIntent::Advance,
        ScrollIntent::Advance,
        ScrollIntent::Retreat,
        ScrollIntent::Retreat,
        ScrollIntent::Retreat,
        ScrollIntent::Advance,
    ];
    for (i, intent) in gestures.iter().enumerate() {
        pager.handle_wheel(*intent, t0 + spacing * i as u32);
        assert!(pager.current() < pager.section_count());
    }
}

#[test]
fn test_pager_moved_iff_section_changed() {
    // The cue plays exactly on Moved, so Moved must coincide with an
    // actual index change.
    let mut pager = SectionPager::new(2).unwrap();
    let t0 = Instant::now();
    let spacing = Duration::from_millis(1100);

    let gestures = [
        ScrollIntent::Advance, // 0 → 1
        ScrollIntent::Advance, // bounce
        ScrollIntent::Retreat, // 1 → 0
        ScrollIntent::Retreat, // bounce
    ];
    for (i, intent) in gestures.iter().enumerate() {
        let before = pager.current();
        let outcome = pager.handle_wheel(*intent, t0 + spacing * i as u32);
        let changed = pager.current() != before;
        assert_eq!(matches!(outcome, WheelOutcome::Moved(_)), changed);
    }
}

// ============================================================================
// Geometry Tests
// ============================================================================

#[test]
fn test_grid_lines_vertex_count() {
    let verts = grid_lines(80.0, 80, Rgba::from_hex(0x1a1a1a), Rgba::from_hex(0x0f0f0f));
    // (divisions + 1) lines per axis, two axes, two vertices per line.
    assert_eq!(verts.len(), 4 * 81);
}

#[test]
fn test_grid_lines_are_planar_and_bounded() {
    let verts = grid_lines(80.0, 80, Rgba::from_hex(0x1a1a1a), Rgba::from_hex(0x0f0f0f));
    for v in &verts {
        assert!(approx_eq(v.position[1], 0.0));
        assert!(v.position[0] >= -40.0 - 0.001 && v.position[0] <= 40.0 + 0.001);
        assert!(v.position[2] >= -40.0 - 0.001 && v.position[2] <= 40.0 + 0.001);
    }
}

#[test]
fn test_grid_lines_center_coloring() {
    let center = Rgba::from_hex(0x1a1a1a);
    let grid = Rgba::from_hex(0x0f0f0f);
    let verts = grid_lines(8.0, 4, center, grid);

    let center_count = verts
        .iter()
        .filter(|v| approx_eq(v.color[0], center.r))
        .count();
    // Two center lines (one per axis), two vertices each.
    assert_eq!(center_count, 4);

    // Center-colored vertices all sit on an axis line through the origin.
    for v in verts.iter().filter(|v| approx_eq(v.color[0], center.r)) {
        assert!(approx_eq(v.position[0], 0.0) || approx_eq(v.position[2], 0.0));
    }
}

// ============================================================================
// Camera & Scene Tests
// ============================================================================

#[test]
fn test_camera_resize_sets_exact_aspect() {
    let mut camera = Camera::new(16.0 / 9.0);
    camera.set_aspect(1024.0, 512.0);
    assert!(approx_eq(camera.aspect, 2.0));
}

#[test]
fn test_camera_fixed_pose() {
    let camera = Camera::new(1.0);
    assert!(approx_eq(camera.position.x, -40.0));
    assert!(approx_eq(camera.position.y, 8.0));
    assert!(approx_eq(camera.position.z, 40.0));
    assert!(approx_eq(camera.pitch, -std::f32::consts::FRAC_PI_6));
    assert!(approx_eq(camera.near, 0.1));
    assert!(approx_eq(camera.far, 1000.0));
}

#[test]
fn test_scene_has_three_planes_on_distinct_axes() {
    let scene = SceneState::new(1.0);
    assert_eq!(scene.planes[0].spin, SpinAxis::Yaw);
    assert_eq!(scene.planes[1].spin, SpinAxis::Pitch);
    assert_eq!(scene.planes[2].spin, SpinAxis::Roll);
}

#[test]
fn test_advance_frame_moves_only_each_spin_axis() {
    let mut scene = SceneState::new(1.0);
    let before: Vec<_> = scene.planes.iter().map(|p| p.rotation).collect();

    scene.advance_frame();

    // Floor: yaw accumulates, rest untouched.
    assert!(approx_eq(scene.planes[0].rotation.y, before[0].y + SPIN_STEP));
    assert!(approx_eq(scene.planes[0].rotation.x, before[0].x));
    assert!(approx_eq(scene.planes[0].rotation.z, before[0].z));

    // Wall: pitch accumulates on top of its π/2 base.
    assert!(approx_eq(scene.planes[1].rotation.x, before[1].x + SPIN_STEP));

    // Side: roll accumulates.
    assert!(approx_eq(scene.planes[2].rotation.z, before[2].z + SPIN_STEP));
}

#[test]
fn test_plane_vertices_match_grid_constants() {
    let verts = SceneState::plane_vertices();
    assert_eq!(verts.len(), 4 * (GRID_DIVISIONS as usize + 1));
}

#[test]
fn test_fog_range_matches_backdrop() {
    let scene = SceneState::new(1.0);
    assert!(approx_eq(scene.fog.near, 20.0));
    assert!(approx_eq(scene.fog.far, 40.0));
}

// ============================================================================
// Motion Tests
// ============================================================================

#[test]
fn test_glide_holds_initial_value() {
    let glide = SectionGlide::new(0.0);
    assert!(approx_eq(glide.value(Instant::now()), 0.0));
}

#[test]
fn test_glide_reaches_target_after_duration() {
    let mut glide = SectionGlide::new(0.0);
    let t0 = Instant::now();
    glide.retarget(-1.0, t0);
    assert!(approx_eq(glide.value(t0 + GLIDE_DURATION), -1.0));
    assert!(approx_eq(glide.value(t0 + GLIDE_DURATION * 3), -1.0));
    assert!(glide.settled(t0 + GLIDE_DURATION));
}

#[test]
fn test_glide_is_monotonic_toward_target() {
    let mut glide = SectionGlide::new(0.0);
    let t0 = Instant::now();
    glide.retarget(-1.0, t0);

    let mut last = glide.value(t0);
    for ms in (0..=1000).step_by(50) {
        let v = glide.value(t0 + Duration::from_millis(ms));
        assert!(v <= last + 0.001);
        last = v;
    }
}

#[test]
fn test_glide_midpoint_is_eased_not_linear() {
    let mut glide = SectionGlide::new(0.0);
    let t0 = Instant::now();
    glide.retarget(-1.0, t0);

    // Cubic ease-in-out starts slower than linear.
    let quarter = glide.value(t0 + Duration::from_millis(250));
    assert!(quarter > -0.25);
    // Halfway in time is exactly halfway in distance.
    assert!(approx_eq(glide.value(t0 + Duration::from_millis(500)), -0.5));
}

#[test]
fn test_glide_retarget_mid_flight_starts_from_current_value() {
    let mut glide = SectionGlide::new(0.0);
    let t0 = Instant::now();
    glide.retarget(-1.0, t0);

    let mid = t0 + Duration::from_millis(500);
    let at_mid = glide.value(mid);
    glide.retarget(0.0, mid);

    // No snap: the new glide departs from where the old one was.
    assert!(approx_eq(glide.value(mid), at_mid));
    assert!(approx_eq(glide.target(), 0.0));
}

#[test]
fn test_carousel_wraps_each_period() {
    let drift = CarouselDrift::new(1200.0, Duration::from_secs(30));
    assert!(approx_eq(drift.offset(Duration::ZERO), 0.0));
    assert!(approx_eq(drift.offset(Duration::from_secs(15)), -600.0));
    assert!(approx_eq(drift.offset(Duration::from_secs(30)), 0.0));
    assert!(approx_eq(drift.offset(Duration::from_secs(45)), -600.0));
}

// ============================================================================
// Rgba Tests
// ============================================================================

#[test]
fn test_rgba_from_hex() {
    let c = Rgba::from_hex(0xff9933);
    assert!(approx_eq(c.r, 1.0));
    assert!(approx_eq(c.g, 0x99 as f32 / 255.0));
    assert!(approx_eq(c.b, 0x33 as f32 / 255.0));
    assert!(approx_eq(c.a, 1.0));
}

#[test]
fn test_rgba_with_alpha_and_array() {
    let c = Rgba::from_hex(0x138808).with_alpha(0.5);
    let arr = c.to_array();
    assert!(approx_eq(arr[3], 0.5));
    assert!(approx_eq(arr[1], 0x88 as f32 / 255.0));
}
