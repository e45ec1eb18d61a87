//! Macros for declaring rules and constrained types with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: a single rule (struct + `Validate` impl + `new`)
//! - [`constrained!`]: a named constrained type bound to a declared rule set
//!
//! # Examples
//!
//! ```
//! use wlss_validator::constrained;
//!
//! constrained! {
//!     /// A login name.
//!     pub Login: Str { length_min: 1, length_max: 50, regexp: r"[A-Za-z0-9\-_]*" }
//! }
//!
//! assert!(Login::new("alice_01").is_ok());
//! assert!(Login::new("alice!").is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a single rule: struct definition, `new` from all fields, and the
/// [`Validate`](crate::foundation::Validate) implementation.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Struct with fields**:
/// ```rust,ignore
/// validator! {
///     pub LengthMin { name: Cow<'static, str>, min: usize } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     error(self, input) { ValidationError::length_min(&self.name, self.min, input.chars().count()) }
/// }
/// ```
///
/// **Generic struct** (one type parameter, bounds are plain identifiers):
/// ```rust,ignore
/// validator! {
///     pub ValueMin<T: PartialOrd + Display> { name: Cow<'static, str>, min: T } for T;
///     rule(self, input) { input.partial_cmp(&self.min) != Some(Ordering::Less) }
///     error(self, input) { ValidationError::value_min(&self.name, &self.min) }
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1: Struct with fields + auto new ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Creates the rule from its fields.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 2: Generic struct + auto new ─────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            /// Creates the rule from its fields.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// CONSTRAINED MACRO
// ============================================================================

/// Declares a named constrained type.
///
/// The category (`Int`, `Str`, `NaiveDatetime`, `AwareDatetime`) picks the
/// rule set; every `key: value` pair calls the builder method of the same
/// name (`value_min`, `value_max`, `length_min`, `length_max`, `regexp`,
/// `timezone`). `extends Parent` starts from `Parent`'s declared
/// configuration instead of an empty one.
///
/// The macro expands to an uninhabited marker type implementing
/// [`Constrained`](crate::Constrained), with a `new` constructor returning
/// [`Value<Name>`](crate::Value). The rule set is declared on first use and
/// kept for the rest of the process; call `Name::declaration()` to run the
/// declaration-time guard eagerly.
///
/// # Examples
///
/// ```
/// use wlss_validator::{constrained, PositiveInt};
///
/// constrained! {
///     pub Percent: Int extends PositiveInt { value_max: 100 }
/// }
///
/// constrained! {
///     Broken: Int { value_min: 42, value_max: 0 }
/// }
///
/// assert_eq!(*Percent::new(42).unwrap().value(), 42);
/// assert_eq!(
///     Percent::new(-1).unwrap_err().message(),
///     "Percent value should not be less than 0."
/// );
/// assert_eq!(
///     Broken::declaration().unwrap_err().message(),
///     "VALUE_MAX should not be less than VALUE_MIN."
/// );
/// ```
#[macro_export]
macro_rules! constrained {
    (@rules Int) => { $crate::rules::IntRules };
    (@rules Str) => { $crate::rules::StrRules };
    (@rules NaiveDatetime) => { $crate::rules::NaiveDatetimeRules };
    (@rules AwareDatetime) => { $crate::rules::AwareDatetimeRules };

    (@declare $(#[$meta:meta])* $vis:vis $name:ident, $category:ident, $declare:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {}

        impl $crate::Constrained for $name {
            type Rules = $crate::constrained!(@rules $category);

            fn declaration() -> ::core::result::Result<&'static Self::Rules, $crate::ValidationError> {
                static DECLARATION: ::std::sync::LazyLock<
                    ::core::result::Result<$crate::constrained!(@rules $category), $crate::ValidationError>,
                > = ::std::sync::LazyLock::new(|| $declare);
                DECLARATION.as_ref().map_err(::core::clone::Clone::clone)
            }
        }

        impl $name {
            /// Runs the declaration-time guard (once per process) and returns
            /// the declared rule set.
            pub fn declaration()
                -> ::core::result::Result<&'static <Self as $crate::Constrained>::Rules, $crate::ValidationError>
            {
                <Self as $crate::Constrained>::declaration()
            }

            /// Validates `candidate` and wraps it.
            #[track_caller]
            pub fn new(
                candidate: impl $crate::Candidate<$crate::Raw<$name>>,
            ) -> ::core::result::Result<$crate::Value<$name>, $crate::ValidationError> {
                $crate::Value::new(candidate)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis $name:ident: $category:ident extends $parent:path { $($key:ident: $val:expr),* $(,)? }
    ) => {
        $crate::constrained!(@declare
            $(#[$meta])* $vis $name, $category,
            <$parent as $crate::Constrained>::declaration()
                .and_then(|parent| parent.extend(stringify!($name)) $(.$key($val))* .declare())
        );
    };

    (
        $(#[$meta:meta])*
        $vis:vis $name:ident: $category:ident { $($key:ident: $val:expr),* $(,)? }
    ) => {
        $crate::constrained!(@declare
            $(#[$meta])* $vis $name, $category,
            <$crate::constrained!(@rules $category)>::builder(stringify!($name)) $(.$key($val))* .declare()
        );
    };
}
