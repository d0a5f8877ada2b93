use tilezoom_core::{PyramidConfig, ScalingPolicy, TilePyramid, TilezoomError};

// ---------------------------------------------------------------------------
// Power-of-two construction
// ---------------------------------------------------------------------------

#[test]
fn test_halving_level_sequence() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let dims: Vec<(u32, u32)> = pyramid.levels().map(|l| (l.width, l.height)).collect();
    assert_eq!(dims, vec![(125, 100), (250, 200), (500, 400), (1000, 800)]);
}

#[test]
fn test_top_level_matches_source_dimensions() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let top = pyramid.level(pyramid.max_level());
    assert_eq!(top.width, 1000);
    assert_eq!(top.height, 800);
}

#[test]
fn test_full_res_tile_grid() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let top = pyramid.level(pyramid.max_level());
    assert_eq!(top.x_tiles, 4);
    assert_eq!(top.y_tiles, 4);
}

#[test]
fn test_halving_stops_at_min_extent() {
    // Coarsest level must fit under tile_size / 2 + 1 on both axes.
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let coarsest = pyramid.level(0);
    assert!(coarsest.width <= 129);
    assert!(coarsest.height <= 129);
    assert!(pyramid.level(1).width > 129 || pyramid.level(1).height > 129);
}

#[test]
fn test_image_smaller_than_tile_is_single_level() {
    let pyramid = TilePyramid::new(100, 80, 256).unwrap();
    assert_eq!(pyramid.level_count(), 1);
    assert_eq!(pyramid.total_tiles(), 1);
}

#[test]
fn test_explicit_level_count_fixes_halvings() {
    let config = PyramidConfig {
        width: 1024,
        height: 1024,
        levels: Some(3),
        ..PyramidConfig::default()
    };
    let pyramid = TilePyramid::build(&config).unwrap();
    let dims: Vec<(u32, u32)> = pyramid.levels().map(|l| (l.width, l.height)).collect();
    assert_eq!(dims, vec![(256, 256), (512, 512), (1024, 1024)]);
}

#[test]
fn test_single_explicit_level_skips_halving() {
    let config = PyramidConfig {
        width: 5000,
        height: 5000,
        levels: Some(1),
        ..PyramidConfig::default()
    };
    let pyramid = TilePyramid::build(&config).unwrap();
    assert_eq!(pyramid.level_count(), 1);
    assert_eq!(pyramid.level(0).width, 5000);
}

#[test]
fn test_non_square_tiles() {
    let config = PyramidConfig {
        width: 1000,
        height: 1000,
        tile_size: 256,
        y_tile_size: Some(128),
        ..PyramidConfig::default()
    };
    let pyramid = TilePyramid::build(&config).unwrap();
    let top = pyramid.level(pyramid.max_level());
    assert_eq!(top.x_tiles, 4);
    assert_eq!(top.y_tiles, 8);
}

// ---------------------------------------------------------------------------
// Even subdivision (Bisque-style)
// ---------------------------------------------------------------------------

#[test]
fn test_even_subdivision_dims() {
    let config = PyramidConfig {
        width: 1000,
        height: 800,
        levels: Some(4),
        policy: ScalingPolicy::EvenSubdivision,
        ..PyramidConfig::default()
    };
    let pyramid = TilePyramid::build(&config).unwrap();
    let dims: Vec<(u32, u32)> = pyramid.levels().map(|l| (l.width, l.height)).collect();
    assert_eq!(dims, vec![(250, 200), (500, 400), (750, 600), (1000, 800)]);
}

#[test]
fn test_even_subdivision_top_is_full_resolution() {
    let config = PyramidConfig {
        width: 999,
        height: 777,
        levels: Some(5),
        policy: ScalingPolicy::EvenSubdivision,
        ..PyramidConfig::default()
    };
    let pyramid = TilePyramid::build(&config).unwrap();
    let top = pyramid.level(pyramid.max_level());
    assert_eq!((top.width, top.height), (999, 777));
}

#[test]
fn test_even_subdivision_infers_count_without_levels() {
    let config = PyramidConfig {
        width: 1000,
        height: 800,
        policy: ScalingPolicy::EvenSubdivision,
        ..PyramidConfig::default()
    };
    let pyramid = TilePyramid::build(&config).unwrap();
    // Same count as the halving rule would produce.
    assert_eq!(pyramid.level_count(), 4);
}

// ---------------------------------------------------------------------------
// Level access and clamping
// ---------------------------------------------------------------------------

#[test]
fn test_level_clamps_past_max() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    assert_eq!(pyramid.level(99), pyramid.level(pyramid.max_level()));
}

#[test]
fn test_max_level_is_count_minus_one() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    assert_eq!(pyramid.max_level(), pyramid.level_count() - 1);
}

// ---------------------------------------------------------------------------
// Tile counting
// ---------------------------------------------------------------------------

#[test]
fn test_tiles_below_zero_is_zero() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    assert_eq!(pyramid.tiles_below(0), 0);
}

#[test]
fn test_total_tiles_sums_all_levels() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let sum: u64 = pyramid.levels().map(|l| l.tiles()).sum();
    assert_eq!(pyramid.total_tiles(), sum);
    assert_eq!(pyramid.total_tiles(), 22); // 1 + 1 + 4 + 16
    assert_eq!(pyramid.total_tiles(), pyramid.tiles_below(pyramid.level_count()));
}

// ---------------------------------------------------------------------------
// Global tile index
// ---------------------------------------------------------------------------

#[test]
fn test_tile_index_formula() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    // Level 3 grid is 4x4 and 6 tiles sit below it.
    assert_eq!(pyramid.tiles_below(3), 6);
    assert_eq!(pyramid.tile_index(3, 1, 3).unwrap(), 1 + 3 * 4 + 6);
}

#[test]
fn test_tile_index_is_a_bijection() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let mut seen = Vec::new();
    for lvl in pyramid.levels() {
        for y in 0..lvl.y_tiles {
            for x in 0..lvl.x_tiles {
                seen.push(pyramid.tile_index(lvl.index, x, y).unwrap());
            }
        }
    }
    let expected: Vec<u64> = (0..pyramid.total_tiles()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_locate_inverts_tile_index() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    for index in 0..pyramid.total_tiles() {
        let coord = pyramid.locate(index).unwrap();
        assert_eq!(
            pyramid.tile_index(coord.level, coord.x, coord.y).unwrap(),
            index
        );
    }
}

#[test]
fn test_tile_index_rejects_out_of_range_coords() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let err = pyramid.tile_index(3, 4, 0).unwrap_err();
    assert!(matches!(err, TilezoomError::TileOutOfRange { level: 3, x: 4, .. }));
}

#[test]
fn test_locate_rejects_out_of_range_index() {
    let pyramid = TilePyramid::new(1000, 800, 256).unwrap();
    let err = pyramid.locate(pyramid.total_tiles()).unwrap_err();
    assert!(matches!(err, TilezoomError::TileIndexOutOfRange { total: 22, .. }));
}

// ---------------------------------------------------------------------------
// Invalid construction inputs
// ---------------------------------------------------------------------------

#[test]
fn test_zero_width_error() {
    let err = TilePyramid::new(0, 800, 256).unwrap_err();
    assert!(matches!(err, TilezoomError::InvalidDimensions { width: 0, height: 800 }));
}

#[test]
fn test_zero_height_error() {
    assert!(TilePyramid::new(1000, 0, 256).is_err());
}

#[test]
fn test_zero_tile_size_error() {
    let err = TilePyramid::new(1000, 800, 0).unwrap_err();
    assert!(matches!(err, TilezoomError::InvalidTileSize { .. }));
}

#[test]
fn test_zero_y_tile_size_error() {
    let config = PyramidConfig {
        width: 1000,
        height: 800,
        y_tile_size: Some(0),
        ..PyramidConfig::default()
    };
    assert!(TilePyramid::build(&config).is_err());
}

#[test]
fn test_zero_level_count_error() {
    let config = PyramidConfig {
        width: 1000,
        height: 800,
        levels: Some(0),
        ..PyramidConfig::default()
    };
    let err = TilePyramid::build(&config).unwrap_err();
    assert!(matches!(err, TilezoomError::InvalidLevelCount(0)));
}
