use proptest::prelude::*;
use strata_geom::Vec2;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    -1.0e6_f32..=1.0e6
}

fn arb_vec2() -> impl Strategy<Value = Vec2> {
    (bounded_f32(), bounded_f32()).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #[test]
    fn add_then_sub_is_identity(a in arb_vec2(), b in arb_vec2()) {
        let r = a + b - b;
        prop_assert!(approx(r.x, a.x, 0.5));
        prop_assert!(approx(r.y, a.y, 0.5));
    }

    #[test]
    fn scalar_mul_distributes(a in arb_vec2(), s in -1.0e3_f32..=1.0e3) {
        let r = a * s;
        prop_assert!(approx(r.x, a.x * s, a.x.abs() * s.abs() * 1.0e-5 + 1.0e-3));
        prop_assert!(approx(r.y, a.y * s, a.y.abs() * s.abs() * 1.0e-5 + 1.0e-3));
    }

    #[test]
    fn assign_ops_match_binary_ops(a in arb_vec2(), b in arb_vec2()) {
        let mut c = a;
        c += b;
        prop_assert_eq!(c, a + b);
        c -= b;
        prop_assert_eq!(c, a + b - b);
    }
}
