use proptest::prelude::*;
use strata_geom::{GridRange, align_down, align_down_i};

fn step() -> impl Strategy<Value = i32> {
    prop_oneof![Just(16), Just(30), Just(32), Just(64)]
}

proptest! {
    // align_down_i returns a multiple of step, never above the input
    #[test]
    fn align_down_i_floors(v in -1_000_000i32..=1_000_000, s in step()) {
        let a = align_down_i(v, s);
        prop_assert_eq!(a.rem_euclid(s), 0);
        prop_assert!(a <= v);
        prop_assert!(v - a < s);
    }

    // aligning an already aligned value is the identity
    #[test]
    fn align_down_i_idempotent(v in -100_000i32..=100_000, s in step()) {
        let a = align_down_i(v, s);
        prop_assert_eq!(align_down_i(a, s), a);
    }

    // float alignment agrees with integer alignment on whole values
    #[test]
    fn align_down_matches_integer(v in -100_000i32..=100_000, s in step()) {
        prop_assert_eq!(align_down(v as f32, s), align_down_i(v, s));
    }

    // every column a range yields is aligned and inside the half-open bounds
    #[test]
    fn range_columns_aligned_and_contained(
        a in -30_000i32..=30_000,
        w in 0i32..=3_000,
        s in step(),
    ) {
        let r = GridRange::new(a, a + w, s);
        let mut count = 0usize;
        for x in r.columns() {
            prop_assert_eq!(x.rem_euclid(s), 0);
            prop_assert!(r.contains(x));
            count += 1;
        }
        prop_assert_eq!(count, r.len());
    }

    // inverted bounds normalize to an empty range
    #[test]
    fn inverted_range_is_empty(a in -30_000i32..=30_000, w in 1i32..=3_000, s in step()) {
        let r = GridRange::new(a, a - w, s);
        prop_assert!(r.is_empty());
        prop_assert_eq!(r.columns().count(), 0);
    }
}

#[test]
fn negative_alignment_floors_toward_negative_infinity() {
    assert_eq!(align_down_i(-1, 30), -30);
    assert_eq!(align_down_i(-30, 30), -30);
    assert_eq!(align_down_i(-31, 30), -60);
    assert_eq!(align_down(-0.5, 30), -30);
}
