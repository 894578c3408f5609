/*!

# One Interface, Many Variants

Every variant in this crate is reached through exactly one operation,
[`Describe::describe`], which writes a single line describing the value to an
output stream. Calling code holds a `&dyn Describe` (or a [`BxDescribe`]) and
never asks which concrete variant is behind it. There is no `match` on a type
tag anywhere in calling code: the vtable of the trait object _is_ the tag.

Some variants have a behavior so simple that it is better expressed as data.
An animal just makes a fixed sound, so it implements the smaller [`Shout`] trait,
and the [`animal_variant!`](crate::animal_variant) macro writes its `Describe`
implementation in terms of [`shout_line`].

You might be tempted to write a blanket `impl<T: Shout> Describe for T` instead.
It conflicts with the forwarding implementations for `&D` and `Box<D>` below:
references and boxes are `#[fundamental]`, so a downstream crate is allowed to
implement `Shout` for `&TheirType`, and the compiler must assume it might.

*/

use std::io::{self, Write};

/// A boxed [`Describe`], used anywhere a heterogeneous collection is needed.
pub type BxDescribe = Box<dyn Describe>;

/// The single polymorphic operation of every variant.
pub trait Describe {
    /// Writes this value's description line to `out`.
    ///
    /// Implementations must not keep state between calls: describing the same
    /// value twice writes identical output.
    fn describe(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A variant whose whole behavior is a fixed sound.
pub trait Shout {
    fn sound(&self) -> &'static str;
}

/// The description line of anything that shouts.
pub fn shout_line<S: Shout + ?Sized>(shouter: &S, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", shouter.sound())
}

// References and boxes forward to the value they point at, so `&[&dyn Describe]`
// and `Vec<BxDescribe>` can both be handed to the dispatcher.
impl<D: Describe + ?Sized> Describe for &D {
    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).describe(out)
    }
}

impl<D: Describe + ?Sized> Describe for Box<D> {
    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).describe(out)
    }
}
