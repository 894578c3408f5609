/*!

# Animals: Variants Generated by Macro

Each animal is a unit struct whose entire behavior is one fixed sound. Writing the
three trait implementations and the static vtable by hand for every animal is
tedious and easy to get subtly wrong (a vtable built for the wrong type, a `KIND`
pointing at the wrong tag). The [`animal_variant!`](crate::animal_variant) macro
writes all of it from a name and a sound. This is _correctness via macro_: the
generated code is right as long as the macro is.

The macro can only name members of [`Kind`](crate::variant::Kind), so it cannot
be used to smuggle a new tag past the closed set.

*/

/// Defines an animal variant `$name` that shouts `$sound`, together with its static
/// vtable `<NAME>_VTABLE`.
#[macro_export]
macro_rules! animal_variant {
    ($(#[$meta:meta])* $name:ident => $sound:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::describe::Shout for $name {
            fn sound(&self) -> &'static str {
                $sound
            }
        }

        impl $crate::describe::Describe for $name {
            fn describe(&self, out: &mut dyn ::std::io::Write) -> ::std::io::Result<()> {
                $crate::describe::shout_line(self, out)
            }
        }

        impl $crate::variant::Variant for $name {
            const KIND: $crate::variant::Kind = $crate::variant::Kind::$name;

            fn construct(_attributes: &$crate::variant::Attributes) -> Self {
                $name
            }
        }

        $crate::paste::paste! {
            pub static [<$name:upper _VTABLE>]: $crate::variant::VariantVTable =
                $crate::variant::VariantVTable::of::<$name>();
        }
    };
}

animal_variant!(
    /// Says "wang wang".
    Dog => "wang wang"
);
animal_variant!(
    /// Says "miao miao".
    Cat => "miao miao"
);
animal_variant!(
    /// Says "ge ge".
    Bird => "ge ge"
);
