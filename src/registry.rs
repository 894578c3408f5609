/*!

# Looking Up a Tag

[`Kind`] already _is_ the closed set, so the registry adds no kinds of its own.
Its job is to turn untrusted text into a `Kind`, or into nothing. It is a hash
table of `(tag, Kind)` pairs bucketed by the [tag digest](crate::hashing), built
once from [`Kind::ALL`] on first use.

We store a copy of each tag next to its `Kind`. The digest only picks the bucket;
a match is decided by comparing the stored tag text with the requested one, so an
unknown tag is rejected exactly, not just with overwhelming probability. Keeping
the text also lets the registry list what it accepts.

*/

use std::sync::LazyLock;

use hashbrown::HashTable;

use crate::{
    hashing::{bucket, digest},
    variant::{Kind, VariantVTable},
};

static BUILTIN: LazyLock<VariantRegistry> =
    LazyLock::new(|| VariantRegistry::from_kinds(Kind::ALL));

pub struct VariantRegistry {
    table: HashTable<(&'static str, Kind)>,
}

impl VariantRegistry {
    /// The registry over every kind in the closed set.
    pub fn builtin() -> &'static VariantRegistry {
        &BUILTIN
    }

    /// A registry accepting only the given kinds. Repeated kinds are registered once.
    pub fn from_kinds(kinds: impl IntoIterator<Item = Kind>) -> Self {
        let mut table: HashTable<(&'static str, Kind)> = HashTable::new();
        for kind in kinds {
            let tag = kind.as_str();
            let hash = bucket(digest(tag));
            // `hasher` is called if entries need to be moved to a new table; it must
            // agree with the hash each entry was inserted with.
            let hasher = |(stored, _): &(&'static str, Kind)| bucket(digest(stored));
            if table.find(hash, same_tag(tag)).is_none() {
                table.insert_unique(hash, (tag, kind), hasher);
            }
        }
        Self { table }
    }

    pub fn lookup(&self, tag: &str) -> Option<Kind> {
        self.table
            .find(bucket(digest(tag)), same_tag(tag))
            .map(|(_, kind)| *kind)
    }

    pub fn vtable(&self, tag: &str) -> Option<&'static VariantVTable> {
        self.lookup(tag).map(Kind::vtable)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    /// Accepted tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.iter().map(|(tag, _)| *tag)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn same_tag(tag: &str) -> impl Fn(&(&'static str, Kind)) -> bool + '_ {
    move |(stored, _): &(&'static str, Kind)| *stored == tag
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_accepts_every_kind() {
        let registry = VariantRegistry::builtin();
        assert_eq!(registry.len(), Kind::ALL.len());
        for kind in Kind::ALL {
            assert_eq!(registry.lookup(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn builtin_rejects_everything_else() {
        let registry = VariantRegistry::builtin();
        for tag in ["", "dog", "DOG", "Dog ", "Hamster", "Computerz"] {
            assert_eq!(registry.lookup(tag), None, "{tag:?}");
            assert!(!registry.contains(tag));
        }
    }

    #[test]
    fn tags_lists_each_tag_once() {
        let mut tags: Vec<_> = VariantRegistry::builtin().tags().collect();
        tags.sort_unstable();
        assert_eq!(tags, ["Bird", "Cat", "Computer", "Dog", "Zbook"]);
    }

    #[test]
    fn subset_registry_and_duplicates() {
        let registry = VariantRegistry::from_kinds([Kind::Cat, Kind::Cat, Kind::Bird]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("Cat"), Some(Kind::Cat));
        assert_eq!(registry.lookup("Dog"), None);
        assert!(VariantRegistry::from_kinds([]).is_empty());
    }

    #[test]
    fn vtable_lookup_matches_kind() {
        let registry = VariantRegistry::builtin();
        let vtable = registry.vtable("Zbook").unwrap();
        assert_eq!(vtable.kind(), Kind::Zbook);
        assert!(registry.vtable("Laptop").is_none());
    }

    #[test]
    fn lookup_matches_the_exact_text() {
        let registry = VariantRegistry::builtin();
        for tag in ["Do", "Dogs", "Dog\0", "\u{feff}Dog", "Cat\n"] {
            assert_eq!(registry.lookup(tag), None, "{tag:?}");
        }
        assert_eq!(registry.lookup(&String::from("Dog")), Some(Kind::Dog));
    }
}
