//! Capability marker for constrained types.
//!
//! `Constrained` is the explicit contract "exposes a resolved allowed-kind
//! set". The `conforms!` macro is a structural probe over an opaque value:
//! it answers whether the value's concrete type implements the contract,
//! using autoref-based method fallback so no registration and no trait
//! object is needed. The probe only works for concrete types known at the
//! call site, not in generic contexts.
//!
//! `conforms!` is deliberately narrow: it checks structure only and never
//! consults the `CompatRegistry`. The broad check, which additionally
//! recognizes explicitly registered foreign types, is `compatible!`.

use corral_core::KindSet;

/// Contract for types that expose a resolved allowed-kind set.
pub trait Constrained {
    /// The resolved allowed-kind set of this value.
    fn constraints(&self) -> &KindSet;
}

/// Probe wrapper used by `conforms!`.
#[doc(hidden)]
pub struct ConformsProbe<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)]
pub trait ProbeConstrained {
    fn conforms(&self) -> bool;
}

// Preferred candidate: resolves without autoref when T is Constrained.
impl<T: Constrained + ?Sized> ProbeConstrained for ConformsProbe<'_, T> {
    fn conforms(&self) -> bool {
        true
    }
}

#[doc(hidden)]
pub trait ProbeFallback {
    fn conforms(&self) -> bool;
}

// Fallback candidate: reached through one more autoref step.
impl<T: ?Sized> ProbeFallback for &ConformsProbe<'_, T> {
    fn conforms(&self) -> bool {
        false
    }
}

/// Structural capability check: true iff the expression's concrete type
/// implements [`Constrained`]. Side-effect-free.
#[macro_export]
macro_rules! conforms {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::marker::{ProbeConstrained as _, ProbeFallback as _};
        (&$crate::marker::ConformsProbe(&$value)).conforms()
    }};
}

/// Broad compatibility check: true iff the value conforms structurally or
/// its concrete type has been registered in the given
/// [`CompatRegistry`](corral_registry::CompatRegistry).
#[macro_export]
macro_rules! compatible {
    ($registry:expr, $value:expr) => {
        $crate::conforms!($value) || $registry.recognizes_value(&$value)
    };
}
