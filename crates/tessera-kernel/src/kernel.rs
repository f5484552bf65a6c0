//! The [`Kernel`] trait and its blanket implementation for callables.

use crate::return_type::ReturnType;

/// An operation over `Args` that may reuse scratch state between calls.
///
/// # Contract
///
/// - [`make_cache`](Self::make_cache) is called once per traversal with a
///   representative argument tuple; the cache is then passed to every
///   [`apply`](Self::apply).
/// - `apply` must produce the same output for the same arguments no
///   matter how often the cache has been used before.
/// - A cache belongs to one caller at a time. Threads build their own.
///
/// `Args` is a tuple; cell views are passed as borrowed slices, e.g.
/// `(&[f64],)`.
///
/// # Examples
///
/// A kernel that scales a cell into a cached buffer and returns its norm:
///
/// ```
/// use tessera_kernel::Kernel;
///
/// struct ScaledNorm(f64);
///
/// impl<'a> Kernel<(&'a [f64],)> for ScaledNorm {
///     type Cache = Vec<f64>;
///     type Output = f64;
///
///     fn make_cache(&self, args: &(&'a [f64],)) -> Vec<f64> {
///         Vec::with_capacity(args.0.len())
///     }
///
///     fn apply(&self, cache: &mut Vec<f64>, (x,): (&'a [f64],)) -> f64 {
///         cache.clear();
///         cache.extend(x.iter().map(|v| v * self.0));
///         cache.iter().map(|v| v * v).sum::<f64>().sqrt()
///     }
/// }
///
/// let k = ScaledNorm(2.0);
/// let cell = [3.0, 4.0];
/// let mut cache = k.make_cache(&(&cell[..],));
/// assert_eq!(k.apply(&mut cache, (&cell[..],)), 10.0);
/// assert_eq!(k.apply_once((&cell[..],)), 10.0);
/// ```
pub trait Kernel<Args> {
    /// Scratch state reused across applications.
    type Cache;

    /// Result of one application.
    type Output;

    /// Create the scratch state for arguments shaped like `args`.
    fn make_cache(&self, args: &Args) -> Self::Cache;

    /// Apply the kernel, reusing `cache`.
    fn apply(&self, cache: &mut Self::Cache, args: Args) -> Self::Output;

    /// Create a throwaway cache and apply once.
    fn apply_once(&self, args: Args) -> Self::Output {
        let mut cache = self.make_cache(&args);
        self.apply(&mut cache, args)
    }

    /// Type of the output for `args`, found by applying once.
    ///
    /// Kernels whose output type is cheaper to describe may override this.
    fn infer_return_type(&self, args: Args) -> ReturnType {
        ReturnType::of_val(&self.apply_once(args))
    }
}

macro_rules! impl_fn_kernel {
    ($($arg:ident),*) => {
        impl<Func, R, $($arg),*> Kernel<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> R,
        {
            type Cache = ();
            type Output = R;

            #[inline]
            fn make_cache(&self, _args: &($($arg,)*)) -> Self::Cache {}

            #[inline]
            #[allow(non_snake_case)]
            fn apply(&self, _cache: &mut (), args: ($($arg,)*)) -> R {
                let ($($arg,)*) = args;
                self($($arg),*)
            }

            fn infer_return_type(&self, _args: ($($arg,)*)) -> ReturnType {
                ReturnType::of::<R>()
            }
        }
    };
}

impl_fn_kernel!();
impl_fn_kernel!(A0);
impl_fn_kernel!(A0, A1);
impl_fn_kernel!(A0, A1, A2);
impl_fn_kernel!(A0, A1, A2, A3);

/// Create the cache `kernel` needs for `args`.
pub fn make_cache<K: Kernel<Args>, Args>(kernel: &K, args: &Args) -> K::Cache {
    kernel.make_cache(args)
}

/// Apply `kernel` to `args`, reusing `cache`.
pub fn apply<K: Kernel<Args>, Args>(kernel: &K, cache: &mut K::Cache, args: Args) -> K::Output {
    kernel.apply(cache, args)
}

/// Apply `kernel` once with a throwaway cache.
pub fn apply_once<K: Kernel<Args>, Args>(kernel: &K, args: Args) -> K::Output {
    kernel.apply_once(args)
}

/// Output type of `kernel` on `args`.
pub fn infer_return_type<K: Kernel<Args>, Args>(kernel: &K, args: Args) -> ReturnType {
    kernel.infer_return_type(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    #[test]
    fn plain_function_is_a_kernel() {
        let mut cache = make_cache(&add, &(2, 3));
        assert_eq!(apply(&add, &mut cache, (2, 3)), 5);
        assert_eq!(apply_once(&add, (4, 5)), 9);
    }

    #[test]
    fn closures_of_every_arity() {
        let zero = || 7;
        let one = |x: u8| x as u32 * 2;
        let three = |a: i64, b: i64, c: i64| a * b - c;
        let four = |a: f64, b: f64, c: f64, d: f64| a + b + c + d;
        assert_eq!(zero.apply_once(()), 7);
        assert_eq!(one.apply_once((4,)), 8);
        assert_eq!(three.apply_once((2, 3, 1)), 5);
        assert_eq!(four.apply_once((1.0, 2.0, 3.0, 4.0)), 10.0);
    }

    #[test]
    fn closure_over_borrowed_cell() {
        let sum = |x: &[f64]| x.iter().sum::<f64>();
        let cell = vec![1.0, 2.0, 3.5];
        let mut cache = sum.make_cache(&(&cell[..],));
        assert_eq!(sum.apply(&mut cache, (&cell[..],)), 6.5);
    }

    #[test]
    fn callable_return_type_is_static() {
        let k = |x: i32| x as f32;
        assert_eq!(infer_return_type(&k, (1,)), ReturnType::of::<f32>());
    }

    struct Counter;

    impl Kernel<(u32,)> for Counter {
        type Cache = u32;
        type Output = u32;

        fn make_cache(&self, _args: &(u32,)) -> u32 {
            0
        }

        fn apply(&self, calls: &mut u32, (x,): (u32,)) -> u32 {
            *calls += 1;
            x * 10
        }
    }

    #[test]
    fn cache_persists_between_applications() {
        let mut calls = Counter.make_cache(&(1,));
        Counter.apply(&mut calls, (1,));
        Counter.apply(&mut calls, (2,));
        assert_eq!(calls, 2);
    }

    #[test]
    fn default_return_type_inference_applies_once() {
        assert_eq!(Counter.infer_return_type((3,)), ReturnType::of::<u32>());
    }
}
