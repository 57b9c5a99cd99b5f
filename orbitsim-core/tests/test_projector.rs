//! Tests for world-to-screen projection and disc rasterization

use orbitsim_core::projector::{
    rasterize_disc, rasterize_disc_within, to_screen, Camera, Cell, Pan, Viewport,
};
use orbitsim_core::tests::test_helpers::{approx_eq, approx_vec};
use orbitsim_core::ConfigError;
use glam::DVec2;

#[test]
fn test_to_screen_identity_at_unit_zoom() {
    let center = DVec2::new(40.0, 12.0);
    for world in [
        DVec2::new(0.0, 0.0),
        DVec2::new(3.5, -7.25),
        DVec2::new(-100.0, 42.0),
    ] {
        let screen = to_screen(world, DVec2::ZERO, 1.0, center);
        assert_eq!(screen, DVec2::new(world.x + 40.0, world.y + 12.0));
    }
}

#[test]
fn test_to_screen_camera_and_zoom() {
    let screen = to_screen(
        DVec2::new(10.0, 5.0),
        DVec2::new(2.0, 1.0),
        2.0,
        DVec2::new(20.0, 10.0),
    );
    // ((10, 5) - (2, 1)) * 2 + (20, 10)
    assert_eq!(screen, DVec2::new(36.0, 18.0));
}

#[test]
fn test_camera_position_maps_to_center() {
    let camera = Camera::new(DVec2::new(-13.0, 8.5), 3.7).unwrap();
    let center = DVec2::new(50.0, 20.0);
    assert!(approx_vec(camera.project(camera.offset, center), center, 1e-12));
}

#[test]
fn test_camera_to_world_inverts_project() {
    let camera = Camera::new(DVec2::new(4.0, -2.0), 0.25).unwrap();
    let center = DVec2::new(30.0, 15.0);
    let world = DVec2::new(123.0, -45.5);

    let back = camera.to_world(camera.project(world, center), center);
    assert!(approx_vec(back, world, 1e-9));
}

#[test]
fn test_rasterize_disc_includes_center_excludes_far_cell() {
    let cells = rasterize_disc(DVec2::new(10.0, 10.0), 2.0, 1.0);

    assert!(cells.contains(&Cell::new(10, 10)));
    assert!(!cells.contains(&Cell::new(20, 20)));
}

#[test]
fn test_rasterize_disc_distance_test() {
    let center = DVec2::new(10.0, 10.0);
    let cells = rasterize_disc(center, 2.0, 1.0);

    // Boundary cells at exactly the radius are included
    assert!(cells.contains(&Cell::new(10, 12)));
    assert!(cells.contains(&Cell::new(8, 10)));
    // Bounding-box corners are not
    assert!(!cells.contains(&Cell::new(12, 12)));
    assert!(!cells.contains(&Cell::new(8, 8)));

    for cell in &cells {
        let d = DVec2::new(cell.col as f64, cell.row as f64).distance(center);
        assert!(d <= 2.0, "cell {:?} is {} away", cell, d);
    }
    assert_eq!(cells.len(), 13);
}

#[test]
fn test_rasterize_disc_scales_with_zoom() {
    let center = DVec2::new(10.0, 10.0);
    let small = rasterize_disc(center, 2.0, 1.0);
    let large = rasterize_disc(center, 2.0, 2.0);

    assert!(large.len() > small.len());
    assert!(large.contains(&Cell::new(10, 14)));
    assert!(!small.contains(&Cell::new(10, 14)));
    // sqrt(18) > 4
    assert!(!large.contains(&Cell::new(13, 13)));
}

#[test]
fn test_rasterize_disc_unit_radius() {
    let cells = rasterize_disc(DVec2::new(0.0, 0.0), 1.0, 1.0);
    assert_eq!(cells.len(), 5);
}

#[test]
fn test_rasterize_zero_radius() {
    assert_eq!(
        rasterize_disc(DVec2::new(3.0, 3.0), 0.0, 5.0),
        vec![Cell::new(3, 3)]
    );
    assert!(rasterize_disc(DVec2::new(3.5, 3.5), 0.0, 1.0).is_empty());
}

#[test]
fn test_rasterize_is_bounds_agnostic() {
    let cells = rasterize_disc(DVec2::new(-1.0, -1.0), 1.0, 1.0);
    assert!(cells.contains(&Cell::new(-2, -1)));
    assert!(cells.contains(&Cell::new(-1, -1)));
}

#[test]
fn test_cell_containing_floors() {
    assert_eq!(Cell::containing(DVec2::new(3.9, 7.1)), Some(Cell::new(7, 3)));
    assert_eq!(Cell::containing(DVec2::new(-0.5, 0.5)), Some(Cell::new(0, -1)));
}

#[test]
fn test_cell_containing_rejects_non_finite() {
    assert_eq!(Cell::containing(DVec2::new(f64::NAN, 1.0)), None);
    assert_eq!(Cell::containing(DVec2::new(2.0, f64::NEG_INFINITY)), None);
}

#[test]
fn test_rasterize_within_matches_clipped_disc() {
    let viewport = Viewport::new(6, 8);
    // Straddles the top-left corner
    let center = DVec2::new(1.5, 0.5);

    let mut expected: Vec<Cell> = rasterize_disc(center, 3.0, 1.0)
        .into_iter()
        .filter(|cell| viewport.contains(*cell))
        .collect();
    let mut within = rasterize_disc_within(center, 3.0, 1.0, viewport);
    expected.sort_by_key(|c| (c.row, c.col));
    within.sort_by_key(|c| (c.row, c.col));

    assert!(!within.is_empty());
    assert_eq!(within, expected);
}

#[test]
fn test_rasterize_within_is_bounded_by_viewport() {
    let viewport = Viewport::new(24, 80);
    let cells = rasterize_disc_within(viewport.center(), 5.0, 1e9, viewport);
    assert_eq!(cells.len(), 24 * 80);

    let outside = rasterize_disc_within(DVec2::new(-1e12, 12.0), 5.0, 1e9, viewport);
    assert!(outside.is_empty());
    assert!(rasterize_disc_within(DVec2::new(40.0, 12.0), 5.0, 1.0, Viewport::new(0, 0)).is_empty());
}

#[test]
fn test_camera_rejects_non_positive_zoom() {
    assert_eq!(
        Camera::new(DVec2::ZERO, 0.0),
        Err(ConfigError::NonPositiveZoom(0.0))
    );
    assert!(Camera::new(DVec2::ZERO, -1.0).is_err());
    assert!(Camera::new(DVec2::ZERO, f64::NAN).is_err());
}

#[test]
fn test_pan_speed_inverse_to_zoom() {
    let mut near = Camera::new(DVec2::ZERO, 2.0).unwrap();
    let mut far = Camera::new(DVec2::ZERO, 0.5).unwrap();

    near.pan(Pan::Right, 10.0);
    far.pan(Pan::Right, 10.0);

    assert!(approx_eq(near.offset.x, 5.0, 1e-12));
    assert!(approx_eq(far.offset.x, 20.0, 1e-12));

    // Same on-screen distance either way
    assert!(approx_eq(near.offset.x * near.zoom(), far.offset.x * far.zoom(), 1e-12));
}

#[test]
fn test_pan_directions() {
    let mut camera = Camera::default();
    camera.pan(Pan::Up, 1.0);
    assert_eq!(camera.offset, DVec2::new(0.0, -1.0));
    camera.pan(Pan::Left, 1.0);
    assert_eq!(camera.offset, DVec2::new(-1.0, -1.0));
    camera.pan(Pan::Down, 2.0);
    camera.pan(Pan::Right, 2.0);
    assert_eq!(camera.offset, DVec2::new(1.0, 1.0));
}

#[test]
fn test_zoom_steps() {
    let mut camera = Camera::default();
    camera.zoom_in(1.1);
    assert!(approx_eq(camera.zoom(), 1.1, 1e-12));
    camera.zoom_out(1.1);
    assert!(approx_eq(camera.zoom(), 1.0, 1e-12));

    for _ in 0..50 {
        camera.zoom_out(1.1);
    }
    assert!(camera.zoom() > 0.0);
}

#[test]
fn test_viewport_center_and_clipping() {
    let viewport = Viewport::new(24, 80);
    assert_eq!(viewport.center(), DVec2::new(40.0, 12.0));

    assert!(viewport.contains(Cell::new(0, 0)));
    assert!(viewport.contains(Cell::new(23, 79)));
    assert!(!viewport.contains(Cell::new(24, 0)));
    assert!(!viewport.contains(Cell::new(0, 80)));
    assert!(!viewport.contains(Cell::new(-1, 5)));
}
