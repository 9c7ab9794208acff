// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use proptest::prelude::*;
use refinery::{
    compose::And,
    interval::{Difference, Interval, IntervalPredicate, Negation, Product, Sum},
    predicate::{Even, Odd, Positive, Predicate},
    size::{Grown, SizeInterval},
    Refined, SizePredicate, SizeRefined,
};
use refinery_core::math::interval::ClosedInterval;

type Wide = Interval<-1000, 1000>;
type Narrow = Interval<-5, 20>;
type Left = Interval<-2, 3>;
type Right = Interval<-1, 4>;
type LowI32 = Interval<{ i32::MIN as i128 }, 7>;
type LowI8 = Interval<{ i8::MIN as i128 }, 100>;
type MidI8 = Interval<-100, 50>;
type NonNegI32 = Interval<0, { i32::MAX as i128 }>;
type Two = Interval<2, 2>;

// Each case checks the derived `Sum`, `Difference` and `Product` bounds of
// `A` and `B` against the runtime interval algebra, then samples operands
// from both intervals and checks every operator result.
macro_rules! interval_algebra_cases {
    ($($name:ident: $t:ty, $a:ty, $b:ty;)*) => {
        $(
            proptest! {
                #[test]
                fn $name(
                    x in <$a as IntervalPredicate<$t>>::LO..=<$a as IntervalPredicate<$t>>::HI,
                    y in <$b as IntervalPredicate<$t>>::LO..=<$b as IntervalPredicate<$t>>::HI
                ) {
                    let ia = <$a as IntervalPredicate<$t>>::bounds();
                    let ib = <$b as IntervalPredicate<$t>>::bounds();
                    let sum = <Sum<$a, $b> as IntervalPredicate<$t>>::bounds();
                    let diff = <Difference<$a, $b> as IntervalPredicate<$t>>::bounds();
                    let product = <Product<$a, $b> as IntervalPredicate<$t>>::bounds();
                    prop_assert_eq!(sum, ia.saturating_add(ib));
                    prop_assert_eq!(diff, ia.saturating_sub(ib));
                    prop_assert_eq!(product, ia.saturating_mul(ib));

                    let ra = Refined::<$t, $a>::new(x).unwrap();
                    let rb = Refined::<$t, $b>::new(y).unwrap();
                    match ra + rb {
                        Ok(v) => prop_assert!(sum.contains(v.value())),
                        Err(err) => prop_assert!(err.is_overflow() && x.checked_add(y).is_none()),
                    }
                    match ra - rb {
                        Ok(v) => prop_assert!(diff.contains(v.value())),
                        Err(err) => prop_assert!(err.is_overflow() && x.checked_sub(y).is_none()),
                    }
                    match ra * rb {
                        Ok(v) => prop_assert!(product.contains(v.value())),
                        Err(err) => prop_assert!(err.is_overflow() && x.checked_mul(y).is_none()),
                    }
                }
            }
        )*
    };
}

interval_algebra_cases! {
    algebra_i32_mixed_signs: i32, Wide, Narrow;
    algebra_i32_small: i32, Left, Right;
    algebra_i8_saturating: i8, LowI8, MidI8;
    algebra_u8_underflow: u8, Interval<0, 10>, Interval<3, 20>;
    algebra_u32_near_max: u32, Interval<{ u32::MAX as i128 / 2 }, { u32::MAX as i128 }>, Interval<1, 3>;
    algebra_i16_products: i16, Interval<-300, 300>, Interval<-200, 100>;
    algebra_i64_extremes: i64, Interval<{ i64::MIN as i128 }, 0>, Interval<-1, { i64::MAX as i128 }>;
    algebra_usize_indices: usize, Interval<0, 4>, Interval<1, 1000>;
}

#[test]
fn derived_bounds_match_runtime_interval_algebra() {
    assert_eq!(
        <Sum<Wide, Narrow> as IntervalPredicate<i32>>::bounds(),
        <Wide as IntervalPredicate<i32>>::bounds().saturating_add(<Narrow as IntervalPredicate<i32>>::bounds())
    );
    assert_eq!(
        <Difference<Wide, Narrow> as IntervalPredicate<i32>>::bounds(),
        <Wide as IntervalPredicate<i32>>::bounds().saturating_sub(<Narrow as IntervalPredicate<i32>>::bounds())
    );
    assert_eq!(
        <Product<Left, Right> as IntervalPredicate<i32>>::bounds(),
        ClosedInterval::new(-8, 12)
    );
    assert_eq!(
        <Negation<LowI32> as IntervalPredicate<i32>>::bounds(),
        ClosedInterval::new(-7, i32::MAX)
    );
    assert_eq!(
        <Sum<LowI8, MidI8> as IntervalPredicate<i8>>::bounds(),
        ClosedInterval::full()
    );
}

#[test]
fn interval_product_overflow_at_max() {
    let a = Refined::<i32, NonNegI32>::new(i32::MAX).unwrap();
    let b = Refined::<i32, Two>::new(2).unwrap();
    let err = (a * b).unwrap_err();
    assert!(err.is_overflow());
    assert_eq!(err.to_string(), "arithmetic overflow: 2147483647 * 2 overflows i32");
}

#[test]
fn wrappers_are_zero_cost() {
    use std::mem::{align_of, size_of};
    assert_eq!(size_of::<Refined<u8, Even>>(), size_of::<u8>());
    assert_eq!(size_of::<Refined<f64, Interval<0, 1>>>(), size_of::<f64>());
    assert_eq!(align_of::<Refined<u16, Positive>>(), align_of::<u16>());
    assert_eq!(
        size_of::<SizeRefined<Vec<u32>, SizeInterval<1>>>(),
        size_of::<Vec<u32>>()
    );
    assert_eq!(size_of::<refinery::GuardedIndex<'static>>(), size_of::<usize>());
}

proptest! {
    #[test]
    fn new_succeeds_iff_predicate_holds(v in any::<i32>()) {
        prop_assert_eq!(Refined::<i32, Even>::new(v).is_ok(), v % 2 == 0);
        prop_assert_eq!(
            Refined::<i32, Interval<-50, 50>>::new(v).is_ok(),
            (-50..=50).contains(&v)
        );
        if let Err(err) = Refined::<i32, Positive>::new(v) {
            prop_assert!(v <= 0);
            prop_assert!(err.is_violation());
        }
    }

    #[test]
    fn trusted_construction_round_trips(v in any::<i32>().prop_map(|v| v & !1)) {
        // SAFETY: the low bit is cleared, so `v` is even.
        let r = unsafe { Refined::<i32, Even>::new_unchecked(v) };
        prop_assert_eq!(r.into_inner(), v);
    }

    #[test]
    fn is_valid_is_idempotent(v in any::<i64>()) {
        type P = And<Positive, Odd>;
        let first = Refined::<i64, P>::is_valid(&v);
        prop_assert_eq!(first, Refined::<i64, P>::is_valid(&v));
        prop_assert_eq!(first, <P as Predicate<i64>>::test(&v));
        prop_assert_eq!(first, Refined::<i64, P>::new(v).is_ok());
    }

    #[test]
    fn interval_addition_keeps_value_and_bounds(a in -1000i32..=1000, b in -5i32..=20) {
        let ra = Refined::<i32, Wide>::new(a).unwrap();
        let rb = Refined::<i32, Narrow>::new(b).unwrap();
        let sum = (ra + rb).unwrap().refined().unwrap();
        prop_assert_eq!(*sum, a + b);
        prop_assert!(Refined::<i32, Sum<Wide, Narrow>>::bounds().contains(a + b));
    }

    #[test]
    fn interval_subtraction_underflow_is_an_error(a in 0u8..=10, b in 3u8..=20) {
        let ra = Refined::<u8, Interval<0, 10>>::new(a).unwrap();
        let rb = Refined::<u8, Interval<3, 20>>::new(b).unwrap();
        match ra - rb {
            Ok(diff) => {
                prop_assert!(a >= b);
                prop_assert_eq!(diff.value(), a - b);
            }
            Err(err) => {
                prop_assert!(a < b);
                prop_assert!(err.is_overflow());
            }
        }
    }

    #[test]
    fn interval_product_stays_within_hull(a in -2i32..=3, b in -1i32..=4) {
        let ra = Refined::<i32, Left>::new(a).unwrap();
        let rb = Refined::<i32, Right>::new(b).unwrap();
        let product = (ra * rb).unwrap().refined().unwrap();
        prop_assert_eq!(*product, a * b);
        prop_assert!((-8..=12).contains(&(a * b)));
    }

    #[test]
    fn interval_product_overflows_iff_literal_product_does(a in 0i32..=i32::MAX) {
        let ra = Refined::<i32, NonNegI32>::new(a).unwrap();
        let rb = Refined::<i32, Two>::new(2).unwrap();
        match ra * rb {
            Ok(product) => {
                prop_assert!(a <= i32::MAX / 2);
                prop_assert!(product.is_refined());
                prop_assert_eq!(product.value(), a * 2);
            }
            Err(err) => {
                prop_assert!(a > i32::MAX / 2);
                prop_assert!(err.is_overflow());
            }
        }
    }

    #[test]
    fn interval_negation_overflows_only_at_min(a in i32::MIN..=7) {
        let ra = Refined::<i32, LowI32>::new(a).unwrap();
        match -ra {
            Ok(neg) => {
                prop_assert!(a != i32::MIN);
                let neg = neg.refined().unwrap();
                prop_assert_eq!(*neg, -a);
                prop_assert!(*neg >= -7);
            }
            Err(err) => {
                prop_assert_eq!(a, i32::MIN);
                prop_assert!(err.is_overflow());
            }
        }
    }

    #[test]
    fn trivially_wide_integral_results_degrade(a in i8::MIN..=100, b in -100i8..=50) {
        let ra = Refined::<i8, LowI8>::new(a).unwrap();
        let rb = Refined::<i8, MidI8>::new(b).unwrap();
        match ra + rb {
            Ok(sum) => {
                prop_assert!(sum.is_plain());
                prop_assert_eq!(sum.value(), a + b);
            }
            Err(err) => {
                prop_assert!(a.checked_add(b).is_none());
                prop_assert!(err.is_overflow());
            }
        }
    }

    #[test]
    fn float_results_never_degrade(a in -1000.0f64..=1000.0, b in -1000.0f64..=1000.0) {
        let ra = Refined::<f64, Wide>::new(a).unwrap();
        let rb = Refined::<f64, Wide>::new(b).unwrap();
        let product = (ra * rb).unwrap();
        prop_assert!(product.is_refined());
        prop_assert_eq!(product.value(), a * b);
    }

    #[test]
    fn guard_check_matches_length(len in 0usize..20, i in 0usize..40) {
        let v = SizeRefined::<Vec<usize>, SizeInterval<0>>::new((0..len).collect()).unwrap();
        let found = v.freeze(|guard, frozen| guard.check(i).map(|idx| frozen[idx]));
        prop_assert_eq!(found, (i < len).then_some(i));
    }

    #[test]
    fn push_shifts_size_bounds(len in 0usize..=10) {
        let v = SizeRefined::<Vec<u8>, SizeInterval<0, 10>>::new(vec![0; len]).unwrap();
        let v = v.push_back(1);
        prop_assert_eq!(v.len(), len + 1);
        prop_assert_eq!(v.size_bounds(), ClosedInterval::new(1, 11));
        prop_assert!(<Grown<SizeInterval<0, 10>, 1> as Predicate<usize>>::test(&v.len()));
        prop_assert_eq!(<Grown<SizeInterval<0, 10>, 1> as SizePredicate>::LO, 1);
    }

    #[test]
    fn static_index_reads_the_right_element(extra in 0usize..15, i in 0usize..5) {
        let data: Vec<usize> = (0..5 + extra).map(|x| x * 3).collect();
        let v = SizeRefined::<Vec<usize>, SizeInterval<5>>::new(data).unwrap();
        let idx = Refined::<usize, Interval<0, 4>>::new(i).unwrap();
        prop_assert_eq!(v[idx], i * 3);
    }
}
