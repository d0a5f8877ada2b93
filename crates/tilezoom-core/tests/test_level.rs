use tilezoom_core::TilePyramid;

// ---------------------------------------------------------------------------
// Tile grid
// ---------------------------------------------------------------------------

#[test]
fn test_exact_multiple_grid() {
    let pyramid = TilePyramid::new(1024, 512, 256).unwrap();
    let top = pyramid.level(pyramid.max_level());
    assert_eq!(top.x_tiles, 4);
    assert_eq!(top.y_tiles, 2);
}

#[test]
fn test_partial_edge_tiles_round_up() {
    let pyramid = TilePyramid::new(1025, 513, 256).unwrap();
    let top = pyramid.level(pyramid.max_level());
    assert_eq!(top.x_tiles, 5);
    assert_eq!(top.y_tiles, 3);
}

#[test]
fn test_every_level_has_at_least_one_tile() {
    let pyramid = TilePyramid::new(7000, 30, 256).unwrap();
    for lvl in pyramid.levels() {
        assert!(lvl.tiles() >= 1, "level {} has no tiles", lvl.index);
    }
}

#[test]
fn test_contains_matches_grid() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let top = pyramid.level(pyramid.max_level());
    assert!(top.contains(3, 3));
    assert!(!top.contains(4, 0));
    assert!(!top.contains(0, 4));
}

// ---------------------------------------------------------------------------
// tile_range
// ---------------------------------------------------------------------------

#[test]
fn test_tile_range_covers_viewport() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let top = pyramid.level(pyramid.max_level());
    let (cols, rows) = top.tile_range(200, 200, 600, 600).unwrap();
    assert_eq!(cols, 0..=2);
    assert_eq!(rows, 0..=2);
}

#[test]
fn test_tile_range_clamps_to_level_extent() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let top = pyramid.level(pyramid.max_level());
    // Viewport hanging past the right/bottom edge.
    let (cols, rows) = top.tile_range(900, 700, 5000, 5000).unwrap();
    assert_eq!(cols, 3..=3);
    assert_eq!(rows, 2..=3);
}

#[test]
fn test_tile_range_single_pixel() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let top = pyramid.level(pyramid.max_level());
    let (cols, rows) = top.tile_range(256, 0, 257, 1).unwrap();
    assert_eq!(cols, 1..=1);
    assert_eq!(rows, 0..=0);
}

#[test]
fn test_tile_range_empty_region_is_none() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let top = pyramid.level(pyramid.max_level());
    assert!(top.tile_range(100, 100, 100, 200).is_none());
    assert!(top.tile_range(2000, 0, 2100, 100).is_none());
}
