use proptest::prelude::*;
use tc_project::schema::{SweepDef, SweepSpacing};

fn sweep(start: f64, end: f64, num_points: usize, spacing: SweepSpacing) -> SweepDef {
    SweepDef {
        id: "sw".to_string(),
        scenario_id: "otto".to_string(),
        parameter: "compressionRatio".to_string(),
        start,
        end,
        num_points,
        spacing,
    }
}

fn spacing() -> impl Strategy<Value = SweepSpacing> {
    prop_oneof![Just(SweepSpacing::Linear), Just(SweepSpacing::Logarithmic)]
}

proptest! {
    #[test]
    fn points_have_exact_count_and_endpoints(
        start in 0.01_f64..1000.0,
        end in 0.01_f64..1000.0,
        num_points in 2_usize..200,
        spacing in spacing(),
    ) {
        let points = sweep(start, end, num_points, spacing).generate_points();

        prop_assert_eq!(points.len(), num_points);
        prop_assert_eq!(points[0], start);
        prop_assert_eq!(points[num_points - 1], end);
        prop_assert!(points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn points_are_monotonic(
        start in 0.01_f64..1000.0,
        end in 0.01_f64..1000.0,
        num_points in 2_usize..200,
        spacing in spacing(),
    ) {
        prop_assume!((end - start).abs() > 1e-6);
        let points = sweep(start, end, num_points, spacing).generate_points();

        let increasing = end > start;
        for w in points.windows(2) {
            if increasing {
                prop_assert!(w[1] >= w[0], "{:?}", w);
            } else {
                prop_assert!(w[1] <= w[0], "{:?}", w);
            }
        }
    }
}
