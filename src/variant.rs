/*!

# The Closed Variant Set

A [`Kind`] is one member of a closed, fixed enumeration. Each kind has exactly
one concrete type implementing [`Describe`], and that type is tied to its kind
through the [`Variant`] trait.

## Static VTables

A `Kind` needs to produce a value of its concrete type without the caller knowing
that type. We erase the concrete type `V` the same way a compiler does for trait
objects: a small struct of function pointers, [`VariantVTable`], built once per
type by the `const fn` [`VariantVTable::of::<V>()`](VariantVTable::of) and stored
in a `static`. [`Kind::vtable`] hands out a `&'static VariantVTable`, which is a
single machine word.

```rust,ignore
let vtable: &'static VariantVTable = Kind::Dog.vtable();
let dog: BxDescribe = vtable.construct(&Attributes::default());
```

The `match`es on `Kind` all live in this module. Adding a kind means
adding its enum member, its `as_str`/`vtable` arms, and one `Describe`
implementation; nothing that already exists changes its behavior.

## Entities

An [`Entity`] pairs a `Kind` with the boxed value built from it. It has no
mutators, so the tag assigned at construction is the tag it dies with.

*/

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    animals::{BIRD_VTABLE, CAT_VTABLE, DOG_VTABLE},
    computers::{COMPUTER_VTABLE, ZBOOK_VTABLE},
    describe::{BxDescribe, Describe},
    error::ConstructionError,
    registry::VariantRegistry,
};

/// The closed set of variant tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Dog,
    Cat,
    Bird,
    Computer,
    Zbook,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 5] = [
        Kind::Dog,
        Kind::Cat,
        Kind::Bird,
        Kind::Computer,
        Kind::Zbook,
    ];

    /// The textual tag, which is also what [`FromStr`] accepts.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Dog => "Dog",
            Kind::Cat => "Cat",
            Kind::Bird => "Bird",
            Kind::Computer => "Computer",
            Kind::Zbook => "Zbook",
        }
    }

    /// The type-erased interface to this kind's concrete type.
    pub fn vtable(self) -> &'static VariantVTable {
        match self {
            Kind::Dog => &DOG_VTABLE,
            Kind::Cat => &CAT_VTABLE,
            Kind::Bird => &BIRD_VTABLE,
            Kind::Computer => &COMPUTER_VTABLE,
            Kind::Zbook => &ZBOOK_VTABLE,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ConstructionError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        VariantRegistry::builtin()
            .lookup(tag)
            .ok_or_else(|| ConstructionError::UnknownTag(tag.to_owned()))
    }
}

/// The descriptive data an entity is built from: a name and a count.
///
/// Which of these a variant uses, and what it means by them, is up to the
/// variant. A `Computer` reads them as host name and core count; animals
/// ignore both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    name: String,
    count: u32,
}

impl Attributes {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// A concrete type that is the behavior of exactly one [`Kind`].
pub trait Variant: Describe + 'static {
    const KIND: Kind;

    fn construct(attributes: &Attributes) -> Self
    where
        Self: Sized;
}

/// Function vtable over the static interface of a [`Variant`].
#[derive(Copy, Clone)]
pub struct VariantVTable {
    kind: Kind,
    construct: fn(&Attributes) -> BxDescribe,
}

impl VariantVTable {
    /// For any `V: Variant`, build its interface table. Meant to be stored in a `static`.
    pub const fn of<V: Variant>() -> Self {
        Self {
            kind: V::KIND,
            construct: construct_boxed::<V>,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Builds a fresh, boxed value of the erased concrete type.
    pub fn construct(&self, attributes: &Attributes) -> BxDescribe {
        (self.construct)(attributes)
    }
}

fn construct_boxed<V: Variant>(attributes: &Attributes) -> BxDescribe {
    Box::new(V::construct(attributes))
}

/// A described entity: a value carrying exactly one [`Kind`] for its whole lifetime.
pub struct Entity {
    kind: Kind,
    behavior: BxDescribe,
}

impl Entity {
    /// Constructing from a `Kind` cannot fail; the set is closed.
    pub fn new(kind: Kind, attributes: Attributes) -> Self {
        debug!(
            %kind,
            attribute_name = attributes.name(),
            count = attributes.count(),
            "constructing entity"
        );
        Self {
            kind,
            behavior: kind.vtable().construct(&attributes),
        }
    }

    /// Constructs from a textual tag. An unknown tag is rejected before anything is built.
    pub fn from_tag(tag: &str, attributes: Attributes) -> Result<Self, ConstructionError> {
        let kind: Kind = tag.parse()?;
        Ok(Self::new(kind, attributes))
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl Describe for Entity {
    fn describe(&self, out: &mut dyn std::io::Write) -> std::io::Result<()> {
        self.behavior.describe(out)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
