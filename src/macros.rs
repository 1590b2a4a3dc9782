//! Macros for declaring rules with minimal boilerplate.
//!
//! - [`rule!`] — declare a complete rule (struct + `Validate` impl +
//!   factory fn)
//! - [`rules!`] — build a [`Group`](crate::combinators::Group) that runs
//!   every listed rule and collects all failures

/// Declares a complete rule: struct definition, `Validate` implementation,
/// constructor and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied; add extra derives through
/// `#[derive(...)]` on the invocation.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub Uppercase for str;
///     check(input) { input.chars().all(|c| !c.is_lowercase()) }
///     fail(input) { Error::new(codes::IS_UPPER, templates::IS_UPPER) }
///     fn uppercase();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     pub MinLength { min: usize } for str;
///     check(self, input) { input.chars().count() >= self.min }
///     fail(self, input) {
///         Error::new(codes::IS_MIN_LENGTH, templates::IS_MIN_LENGTH)
///             .with_param("min", self.min)
///     }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides the auto `new`), and a fallible form
/// whose `new`/factory return `Result` (the type after `->` is the error
/// type):
/// ```rust,ignore
/// rule! {
///     pub Matches { pattern: regex::Regex } for str;
///     check(self, input) { self.pattern.is_match(input) }
///     fail(self, input) { ... }
///     new(pattern: &str) -> PatternError {
///         Ok(Self { pattern: regex::Regex::new(pattern)? })
///     }
///     fn matches(pattern: &str) -> PatternError;
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Unit rule (no fields) + factory fn ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        check($inp:ident) $check:block
        fail($einp:ident) $fail:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::RuleError> {
                if $check {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($crate::foundation::RuleError::Single($fail))
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        fail($self2:ident, $einp:ident) $fail:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            check($self_, $inp) $check
            fail($self2, $einp) $fail
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        fail($self2:ident, $einp:ident) $fail:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::RuleError> {
                if $check {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($crate::foundation::RuleError::Single($fail))
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        fail($self2:ident, $einp:ident) $fail:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::RuleError> {
                if $check {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($crate::foundation::RuleError::Single($fail))
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };
}

/// Builds a [`Group`](crate::combinators::Group) from a list of rules over
/// the same input type. Every rule runs; all failures are collected and
/// flattened onto the attribute the group is attached to.
///
/// # Examples
///
/// ```rust,ignore
/// use verity::prelude::*;
///
/// let password = rules![not_empty(), min_length(8), max_length(64)];
/// ```
#[macro_export]
macro_rules! rules {
    ($($rule:expr),+ $(,)?) => {{
        let set: ::std::vec::Vec<
            ::std::boxed::Box<dyn $crate::foundation::Validate<Input = _>>,
        > = ::std::vec![$(::std::boxed::Box::new($rule)),+];
        $crate::combinators::Group::new(set)
    }};
}
