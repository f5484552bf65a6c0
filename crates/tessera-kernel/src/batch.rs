//! Applying several kernels to the same arguments.
//!
//! [`KernelBatch`] is implemented for:
//!
//! - tuples of up to six kernels of different types (caches and outputs
//!   are tuples in the same positions),
//! - fixed-size arrays `[K; N]` of one kernel type,
//! - slices and vectors of one kernel type, whose caches are a `Vec`.
//!
//! Tuples and arrays cannot be paired with the wrong number of caches.
//! Slices and vectors check the pairing on every application.

use crate::kernel::Kernel;

/// A fixed, ordered collection of kernels sharing one argument tuple.
///
/// ```
/// use tessera_kernel::KernelBatch;
///
/// let kernels = (|x: i32| x + 1, |x: i32| x as f64 * 0.5);
/// let mut caches = kernels.make_caches(&(4,));
/// assert_eq!(kernels.apply_batch(&mut caches, (4,)), (5, 2.0));
/// ```
pub trait KernelBatch<Args> {
    /// Caches, positionally aligned with the kernels.
    type Caches;

    /// Outputs, positionally aligned with the kernels.
    type Outputs;

    /// Create one cache per kernel.
    fn make_caches(&self, args: &Args) -> Self::Caches;

    /// Apply every kernel to `args` with its own cache.
    fn apply_batch(&self, caches: &mut Self::Caches, args: Args) -> Self::Outputs;

    /// Create throwaway caches and apply every kernel once.
    fn apply_batch_once(&self, args: Args) -> Self::Outputs {
        let mut caches = self.make_caches(&args);
        self.apply_batch(&mut caches, args)
    }
}

macro_rules! impl_tuple_batch {
    ($($kernel:ident $k:ident $c:ident),+) => {
        impl<Args: Clone, $($kernel: Kernel<Args>),+> KernelBatch<Args> for ($($kernel,)+) {
            type Caches = ($($kernel::Cache,)+);
            type Outputs = ($($kernel::Output,)+);

            fn make_caches(&self, args: &Args) -> Self::Caches {
                let ($($k,)+) = self;
                ($($k.make_cache(args),)+)
            }

            fn apply_batch(&self, caches: &mut Self::Caches, args: Args) -> Self::Outputs {
                let ($($k,)+) = self;
                let ($($c,)+) = caches;
                ($($k.apply($c, args.clone()),)+)
            }
        }
    };
}

impl_tuple_batch!(K0 k0 c0);
impl_tuple_batch!(K0 k0 c0, K1 k1 c1);
impl_tuple_batch!(K0 k0 c0, K1 k1 c1, K2 k2 c2);
impl_tuple_batch!(K0 k0 c0, K1 k1 c1, K2 k2 c2, K3 k3 c3);
impl_tuple_batch!(K0 k0 c0, K1 k1 c1, K2 k2 c2, K3 k3 c3, K4 k4 c4);
impl_tuple_batch!(K0 k0 c0, K1 k1 c1, K2 k2 c2, K3 k3 c3, K4 k4 c4, K5 k5 c5);

impl<Args: Clone, K: Kernel<Args>, const N: usize> KernelBatch<Args> for [K; N] {
    type Caches = [K::Cache; N];
    type Outputs = [K::Output; N];

    fn make_caches(&self, args: &Args) -> Self::Caches {
        std::array::from_fn(|i| self[i].make_cache(args))
    }

    fn apply_batch(&self, caches: &mut Self::Caches, args: Args) -> Self::Outputs {
        std::array::from_fn(|i| self[i].apply(&mut caches[i], args.clone()))
    }
}

impl<Args: Clone, K: Kernel<Args>> KernelBatch<Args> for [K] {
    type Caches = Vec<K::Cache>;
    type Outputs = Vec<K::Output>;

    fn make_caches(&self, args: &Args) -> Self::Caches {
        self.iter().map(|k| k.make_cache(args)).collect()
    }

    /// # Panics
    ///
    /// Panics if `caches.len() != self.len()`.
    fn apply_batch(&self, caches: &mut Self::Caches, args: Args) -> Self::Outputs {
        assert_eq!(
            self.len(),
            caches.len(),
            "kernel batch of {} kernels paired with {} caches",
            self.len(),
            caches.len()
        );
        self.iter()
            .zip(caches.iter_mut())
            .map(|(k, cache)| k.apply(cache, args.clone()))
            .collect()
    }
}

impl<Args: Clone, K: Kernel<Args>> KernelBatch<Args> for Vec<K> {
    type Caches = Vec<K::Cache>;
    type Outputs = Vec<K::Output>;

    fn make_caches(&self, args: &Args) -> Self::Caches {
        self.as_slice().make_caches(args)
    }

    fn apply_batch(&self, caches: &mut Self::Caches, args: Args) -> Self::Outputs {
        self.as_slice().apply_batch(caches, args)
    }
}
