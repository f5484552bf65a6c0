//! Conformance checks for [`Kernel`] implementations.
//!
//! New kernels are validated by calling [`test_kernel`] (or
//! [`test_kernel_eq`]) from their own test modules with a representative
//! argument tuple and the result it should produce.

use std::fmt::Debug;

use crate::kernel::Kernel;
use crate::return_type::ReturnType;

/// Assert that `kernel` honours the kernel contract on `args`.
///
/// Checks, in order:
///
/// 1. [`apply_once`](Kernel::apply_once) produces a value matching
///    `expected` under `cmp`;
/// 2. [`infer_return_type`](Kernel::infer_return_type) agrees with the
///    type of that value;
/// 3. two [`apply`](Kernel::apply) calls sharing one cache both match
///    `expected`;
/// 4. a sample application through a fresh cache has the inferred type.
///
/// # Panics
///
/// Panics with a message naming the failed check.
#[track_caller]
pub fn test_kernel<K, Args, E, F>(kernel: &K, args: Args, expected: &E, cmp: F)
where
    K: Kernel<Args>,
    Args: Clone,
    E: ?Sized,
    F: Fn(&K::Output, &E) -> bool,
{
    let once = kernel.apply_once(args.clone());
    assert!(cmp(&once, expected), "apply_once result does not match expected");

    let inferred = kernel.infer_return_type(args.clone());
    let actual = ReturnType::of_val(&once);
    assert_eq!(
        inferred, actual,
        "inferred return type {inferred} differs from result type {actual}"
    );
    assert_eq!(
        inferred,
        ReturnType::of::<K::Output>(),
        "inferred return type {inferred} differs from declared output type"
    );

    let mut cache = kernel.make_cache(&args);
    let first = kernel.apply(&mut cache, args.clone());
    assert!(
        cmp(&first, expected),
        "first cached apply does not match expected"
    );
    let second = kernel.apply(&mut cache, args.clone());
    assert!(
        cmp(&second, expected),
        "second cached apply with the same cache does not match expected"
    );

    let mut sample_cache = kernel.make_cache(&args);
    let sample = kernel.apply(&mut sample_cache, args);
    let sample_type = ReturnType::of_val(&sample);
    assert_eq!(
        sample_type, inferred,
        "cached sample has type {sample_type}, inferred {inferred}"
    );
}

/// [`test_kernel`] with `==` as the comparison.
///
/// Failure messages include both values.
#[track_caller]
pub fn test_kernel_eq<K, Args, E>(kernel: &K, args: Args, expected: &E)
where
    K: Kernel<Args>,
    K::Output: PartialEq<E> + Debug,
    Args: Clone,
    E: Debug + ?Sized,
{
    let once = kernel.apply_once(args.clone());
    assert!(
        once == *expected,
        "apply_once returned {once:?}, expected {expected:?}"
    );
    test_kernel(kernel, args, expected, |out, exp| out == exp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_closure_conforms() {
        let square = |x: i32| x * x;
        test_kernel_eq(&square, (7,), &49);
    }

    #[test]
    fn approximate_comparison() {
        let third = |x: f64| x / 3.0;
        test_kernel(&third, (1.0,), &0.333_333_f64, |out, exp| {
            (out - exp).abs() < 1e-5
        });
    }

    #[test]
    fn unsized_expected_value() {
        let upper = |s: &str| s.to_uppercase();
        test_kernel(&upper, ("abc",), "ABC", |out, exp| out == exp);
    }

    #[test]
    #[should_panic(expected = "apply_once returned 4, expected 5")]
    fn wrong_expected_value_fails() {
        let double = |x: i32| x * 2;
        test_kernel_eq(&double, (2,), &5);
    }

    /// Returns a value that depends on how often its cache was used.
    struct Drifting;

    impl Kernel<(u32,)> for Drifting {
        type Cache = u32;
        type Output = u32;

        fn make_cache(&self, _args: &(u32,)) -> u32 {
            0
        }

        fn apply(&self, uses: &mut u32, (x,): (u32,)) -> u32 {
            *uses += 1;
            x + *uses - 1
        }
    }

    #[test]
    #[should_panic(expected = "second cached apply with the same cache")]
    fn cache_dependent_output_fails() {
        test_kernel_eq(&Drifting, (10,), &10);
    }

    /// Misreports its output type.
    struct Mislabelled;

    impl Kernel<()> for Mislabelled {
        type Cache = ();
        type Output = u8;

        fn make_cache(&self, _args: &()) {}

        fn apply(&self, _cache: &mut (), _args: ()) -> u8 {
            1
        }

        fn infer_return_type(&self, _args: ()) -> ReturnType {
            ReturnType::of::<i64>()
        }
    }

    #[test]
    #[should_panic(expected = "inferred return type i64 differs from result type u8")]
    fn wrong_inferred_type_fails() {
        test_kernel_eq(&Mislabelled, (), &1);
    }
}
