use quakemap::prelude::*;

/// Depths spread over and around every bucket, boundaries included
fn sample_depths() -> Vec<f64> {
    let mut depths = vec![-1000.0, -10.0, -9.99, 0.0, 700.0];
    for boundary in [-10.0, 10.0, 30.0, 50.0, 70.0, 90.0] {
        depths.extend([boundary - 0.001, boundary, boundary + 0.001]);
    }
    depths
}

#[test]
fn test_depth_below_minus_ten_uses_lowest_color() {
    let buckets = legend_buckets();
    for depth in [-10.5, -50.0, -3000.0] {
        assert_eq!(color_for_depth(depth), buckets[0].color);
    }
}

#[test]
fn test_depth_between_ten_and_thirty_uses_second_color() {
    let buckets = legend_buckets();
    let second = buckets[1].color.as_str();
    for depth in [10.000001, 15.0, 29.99, 30.0] {
        assert_eq!(color_for_depth(depth), second, "depth {depth}");
    }
    assert_ne!(color_for_depth(10.0), second);
    assert_ne!(color_for_depth(30.000001), second);
}

#[test]
fn test_top_bucket_is_open_ended() {
    assert_eq!(color_for_depth(90.0001), color_for_depth(1000.0));
}

#[test]
fn test_radius_examples() {
    assert_eq!(radius_for_magnitude(0.0), 1.0);
    assert_eq!(radius_for_magnitude(2.5), 10.0);
}

#[test]
fn test_every_depth_maps_to_exactly_one_legend_bucket() {
    let buckets = legend_buckets();
    assert_eq!(buckets.len(), 6);

    for depth in sample_depths() {
        let matching: Vec<&DepthBucket> = buckets
            .iter()
            .enumerate()
            .filter(|(i, b)| {
                let above_lower = *i == 0 || depth > b.lower_bound;
                let below_upper = depth <= b.upper_bound;
                above_lower && below_upper
            })
            .map(|(_, b)| b)
            .collect();

        assert_eq!(matching.len(), 1, "depth {depth}");
        assert_eq!(color_for_depth(depth), matching[0].color, "depth {depth}");
    }
}

#[test]
fn test_style_for_matches_component_functions() {
    let quake = EarthquakeFeature {
        position: LatLng::new(0.0, 0.0),
        depth_km: 5.0,
        magnitude: 3.0,
        place: "Somewhere".to_string(),
    };
    let style = style_for(&quake);

    assert_eq!(style.fill_color, color_for_depth(5.0));
    assert_eq!(style.radius, radius_for_magnitude(3.0));
}

#[test]
fn test_legend_control_matches_marker_colors() {
    let legend = Legend::default();
    let buckets = legend_buckets();

    for (entry, bucket) in legend.entries().iter().zip(&buckets) {
        assert_eq!(entry.color, bucket.color);
    }
    assert_eq!(legend.entries().last().map(|e| e.label.as_str()), Some("90+"));
}
