//! The immutable constrained value wrapper.

use std::any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::panic::Location;

use crate::foundation::{Candidate, Constrained, Raw, Rules, ValidationError};

/// A raw value that satisfied every rule of the constrained type `C`.
///
/// The only way to obtain one is [`Value::new`] (or `C::new` for types
/// declared with [`constrained!`](crate::constrained)), so holding a
/// `Value<C>` is proof that the raw value passed `C`'s validation chain.
///
/// Equality, ordering and hashing look at the raw value only, but they are
/// defined between values of the same `C`: `Value<FooInt>` and
/// `Value<BarInt>` are unrelated types.
///
/// # Examples
///
/// ```
/// use wlss_validator::{Int, PositiveInt};
///
/// let answer = Int::new(42).unwrap();
/// assert_eq!(*answer.value(), 42);
///
/// // A value of the same category can be re-wrapped; validation runs again.
/// let error = PositiveInt::new(Int::new(-1).unwrap()).unwrap_err();
/// assert_eq!(error.message(), "PositiveInt value should not be less than 0.");
/// ```
///
/// Values of different constrained types do not compare:
///
/// ```compile_fail
/// use wlss_validator::constrained;
///
/// constrained! { FooInt: Int {} }
/// constrained! { BarInt: Int {} }
///
/// let _ = FooInt::new(42).unwrap() == BarInt::new(42).unwrap();
/// ```
pub struct Value<C: Constrained> {
    raw: Raw<C>,
    marker: PhantomData<fn() -> C>,
}

impl<C: Constrained> Value<C> {
    /// Validates `candidate` against `C`'s rules and wraps it.
    ///
    /// Fails with the declaration error if `C` was declared with an
    /// inconsistent configuration, or with the first rule the candidate
    /// violates.
    #[track_caller]
    pub fn new(candidate: impl Candidate<Raw<C>>) -> Result<Self, ValidationError> {
        let caller = Location::caller();
        let raw = candidate.into_raw();
        match enter::<C>(&raw) {
            Ok(()) => Ok(Self {
                raw,
                marker: PhantomData,
            }),
            Err(error) => Err(error.called_from(caller)),
        }
    }

    /// Borrows the raw value.
    pub fn value(&self) -> &Raw<C> {
        &self.raw
    }

    /// Consumes the wrapper and returns the raw value.
    pub fn into_inner(self) -> Raw<C> {
        self.raw
    }
}

/// Runs the declared chain. The location of this frame is the sentinel a
/// suppressed report cuts the trace at.
fn enter<C: Constrained>(raw: &Raw<C>) -> Result<(), ValidationError> {
    let boundary = Location::caller();
    let rules = C::declaration().map_err(|error| error.crossed_boundary(boundary))?;
    rules.validate(raw).map_err(|error| {
        tracing::trace!(
            type_name = rules.name(),
            code = error.code(),
            "rejected candidate value"
        );
        error.crossed_boundary(boundary)
    })
}

/// `MyInt` out of `my_crate::types::MyInt`.
fn short_type_name<C>() -> &'static str {
    let full = any::type_name::<C>();
    full.rsplit("::").next().unwrap_or(full)
}

// ============================================================================
// TRAIT IMPLS
// ============================================================================
//
// Written by hand: derives would put bounds on the marker `C` instead of the
// raw value.

impl<C: Constrained> Clone for Value<C> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            marker: PhantomData,
        }
    }
}

impl<C: Constrained> Copy for Value<C> where Raw<C>: Copy {}

impl<C: Constrained> fmt::Debug for Value<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(short_type_name::<C>())
            .field(&self.raw)
            .finish()
    }
}

impl<C: Constrained> fmt::Display for Value<C>
where
    Raw<C>: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

impl<C: Constrained> PartialEq for Value<C>
where
    Raw<C>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<C: Constrained> Eq for Value<C> where Raw<C>: Eq {}

impl<C: Constrained> PartialOrd for Value<C>
where
    Raw<C>: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.raw.partial_cmp(&other.raw)
    }
}

impl<C: Constrained> Ord for Value<C>
where
    Raw<C>: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<C: Constrained> Hash for Value<C>
where
    Raw<C>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<C: Constrained> AsRef<Raw<C>> for Value<C> {
    fn as_ref(&self) -> &Raw<C> {
        &self.raw
    }
}

// ============================================================================
// TESTS
// ============================================================================
