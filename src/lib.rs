#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/*!

# One Idea, Four Spellings

Function pointers in a struct, virtual methods, "inheritance", and a loop over a
list of base-class pointers are four spellings of one idea: a value carries a
reference to the behavior appropriate to its variant, and the caller invokes that
behavior without asking which variant it has.

In Rust the idea is spelled with a trait object. The modules of this crate take
each of the older spellings and show where it lands:

- [`function_pointer`]: the vtable by hand, one slot, stored inside the value.
- [`computers`]: "inheritance with a shadowed field" rewritten as two sibling
  variants, and manual allocation rewritten as scoped ownership.
- [`animals`]: a closed family of variants generated by [`animal_variant!`].
- [`variant`] and [`registry`]: the closed set of kinds, static per-type vtables,
  and turning text into a kind (or into a [`ConstructionError`](error::ConstructionError)).
- [`dispatch`]: invoking the behavior, once per item, in order.

## Open/Closed

Adding a kind means adding one behavior implementation. No existing behavior is
edited, and no caller grows a new `match` arm, because no caller has a `match` in
the first place. The `match`es on [`Kind`](variant::Kind) all live in its own
`impl` block.

*/

pub mod animals;
pub mod computers;
pub mod describe;
pub mod dispatch;
pub mod error;
pub mod function_pointer;
pub mod hashing;
pub mod logging;
pub mod registry;
pub mod variant;

// Re-exported for use in exported macros
pub use paste;
