//! Property-based tests for the combinator laws

use std::cell::Cell;

use presence::ops::*;
use presence::Optional;
use proptest::prelude::*;

fn optional_i32() -> impl Strategy<Value = Optional<i32>> {
    prop_oneof![
        Just(Optional::none()),
        any::<i32>().prop_map(Optional::some),
    ]
}

proptest! {
    #[test]
    fn prop_is_some_is_not_is_none(m in optional_i32()) {
        prop_assert_eq!(is_some(&m), !is_none(&m));
    }

    #[test]
    fn prop_map_identity(m in optional_i32()) {
        prop_assert_eq!(map(|x| x, m), m);
    }

    #[test]
    fn prop_map_composition(m in optional_i32()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(map(g, map(f, m)), map(|x| g(f(x)), m));
    }

    #[test]
    fn prop_bind_some_is_map(m in optional_i32()) {
        let f = |x: i32| x.rotate_left(3);
        prop_assert_eq!(bind(|x| some(f(x)), m), map(f, m));
    }

    #[test]
    fn prop_bind_associativity(m in optional_i32()) {
        let f = |x: i32| if x % 2 == 0 { some(x / 2) } else { none() };
        let g = |x: i32| if x > 0 { some(x) } else { none() };
        prop_assert_eq!(bind(g, bind(f, m)), bind(|x| bind(g, f(x)), m));
    }

    #[test]
    fn prop_with_default(v: i32, d: i32) {
        prop_assert_eq!(with_default(d, some(v)), v);
        prop_assert_eq!(with_default(d, none()), d);
    }

    #[test]
    fn prop_to_nullable(v: i32) {
        prop_assert_eq!(to_nullable(some(v)), Some(v));
        prop_assert_eq!(to_nullable(none::<i32>()), None);
    }

    #[test]
    fn prop_get(v: i32) {
        prop_assert_eq!(get(some(v)), Ok(v));
        prop_assert!(get(none::<i32>()).is_err());
    }

    #[test]
    fn prop_combine_preserves_order(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let items: Vec<_> = values.iter().copied().map(some).collect();
        prop_assert_eq!(combine(items), some(values));
    }

    #[test]
    fn prop_combine_none_if_any_none(items in prop::collection::vec(optional_i32(), 0..32)) {
        let any_none = items.iter().any(Optional::is_none);
        prop_assert_eq!(combine(items).is_none(), any_none);
    }

    #[test]
    fn prop_combinators_skip_callback_on_none(
        a in optional_i32(),
        b in optional_i32(),
        c in optional_i32(),
    ) {
        let calls = Cell::new(0);
        let bump = || calls.set(calls.get() + 1);

        let _ = map(|x: i32| { bump(); x }, a);
        let _ = bind(|x: i32| { bump(); some(x) }, a);
        let _ = map2(|x: i32, y: i32| { bump(); x ^ y }, a, b);
        let _ = bind2(|x: i32, y: i32| { bump(); some(x ^ y) }, a, b);
        let _ = map3(|x: i32, y: i32, z: i32| { bump(); x ^ y ^ z }, a, b, c);
        iter(|_| bump(), a);

        let expected = 3 * a.is_some() as i32
            + 2 * (a.is_some() && b.is_some()) as i32
            + (a.is_some() && b.is_some() && c.is_some()) as i32;
        prop_assert_eq!(calls.get(), expected);
    }
}
