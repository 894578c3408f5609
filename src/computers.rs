/*!

# Computers: Sibling Variants Instead of Shadowing Subclasses

A natural first attempt at a laptop type is to "derive" it from a desktop type and
redeclare the core count field in the derived type. Now there are two fields with
the same name, which one a method sees depends on the static type it was called
through, and the base-class method keeps printing the base-class field.

Here [`Computer`] and [`Zbook`] are siblings. Each owns its own attributes, each
implements [`Describe`] once, and the only thing they share is a display format,
which is a plain function ([`write_core_count`]). No field can shadow another
because there is nothing to inherit.

## Scoped Ownership

A `Computer` allocates a scratch buffer when it is constructed. Nothing ever frees
it explicitly: the buffer is owned by the `Computer` and released when the
`Computer` goes out of scope. Forgetting to free it, or freeing it twice, cannot be
written. The [`Drop`] implementation below exists only to make the release
observable in the logs.

*/

use std::{
    fmt,
    io::{self, Write},
};

use tracing::trace;

use crate::{
    describe::Describe,
    variant::{Attributes, Kind, Variant, VariantVTable},
};

/// Size in bytes of the buffer every [`Computer`] owns.
pub const SCRATCH_LEN: usize = 512;

pub static COMPUTER_VTABLE: VariantVTable = VariantVTable::of::<Computer>();
pub static ZBOOK_VTABLE: VariantVTable = VariantVTable::of::<Zbook>();

/// The display format shared by the computer variants.
pub fn write_core_count(
    out: &mut dyn Write,
    label: &str,
    host_name: &str,
    cores: u32,
) -> io::Result<()> {
    writeln!(out, "{label} {host_name} has {cores} cores.")
}

/// A named machine with a core count. Owns a [`SCRATCH_LEN`]-byte buffer for its
/// whole lifetime.
pub struct Computer {
    host_name: String,
    cpu_num: u32,
    scratch: Box<[u8]>,
}

impl Computer {
    pub fn new(host_name: impl Into<String>, cpu_num: u32) -> Self {
        let host_name = host_name.into();
        trace!(host = %host_name, bytes = SCRATCH_LEN, "allocating scratch buffer");
        Self {
            host_name,
            cpu_num,
            scratch: vec![0; SCRATCH_LEN].into_boxed_slice(),
        }
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn cpu_num(&self) -> u32 {
        self.cpu_num
    }

    pub fn scratch(&self) -> &[u8] {
        &self.scratch
    }
}

impl fmt::Debug for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computer")
            .field("host_name", &self.host_name)
            .field("cpu_num", &self.cpu_num)
            .field("scratch_len", &self.scratch.len())
            .finish()
    }
}

impl Drop for Computer {
    fn drop(&mut self) {
        trace!(host = %self.host_name, bytes = self.scratch.len(), "releasing scratch buffer");
    }
}

impl Describe for Computer {
    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        write_core_count(out, "Computer", &self.host_name, self.cpu_num)
    }
}

impl Variant for Computer {
    const KIND: Kind = Kind::Computer;

    fn construct(attributes: &Attributes) -> Self {
        Self::new(attributes.name(), attributes.count())
    }
}

/// A laptop. Not a kind of [`Computer`]: it has its own attributes and shares only
/// the display format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zbook {
    host_name: String,
    cpu_num: u32,
}

impl Zbook {
    pub fn new(host_name: impl Into<String>, cpu_num: u32) -> Self {
        Self {
            host_name: host_name.into(),
            cpu_num,
        }
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn cpu_num(&self) -> u32 {
        self.cpu_num
    }
}

impl Describe for Zbook {
    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        write_core_count(out, "Zbook", &self.host_name, self.cpu_num)
    }
}

impl Variant for Zbook {
    const KIND: Kind = Kind::Zbook;

    fn construct(attributes: &Attributes) -> Self {
        Self::new(attributes.name(), attributes.count())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{logging::capture::CapturedLogs, variant::Entity};

    fn described(value: &dyn Describe) -> String {
        let mut out = Vec::new();
        value.describe(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn computer_zbook_has_16_cores() {
        let zbook = Computer::new("zbook", 16);
        assert_eq!(described(&zbook), "Computer zbook has 16 cores.\n");
    }

    #[test]
    fn siblings_share_only_the_format() {
        let desktop = Computer::new("tower", 32);
        let laptop = Zbook::new("tower", 8);
        assert_eq!(described(&desktop), "Computer tower has 32 cores.\n");
        assert_eq!(described(&laptop), "Zbook tower has 8 cores.\n");
    }

    #[test]
    fn computer_owns_its_scratch_buffer() {
        let computer = Computer::new("zbook", 16);
        assert_eq!(computer.scratch().len(), SCRATCH_LEN);
        assert!(computer.scratch().iter().all(|byte| *byte == 0));
        assert_eq!(computer.host_name(), "zbook");
        assert_eq!(computer.cpu_num(), 16);
    }

    #[test]
    fn vtables_build_the_right_sibling() {
        let attributes = Attributes::new("zbook", 16);
        assert_eq!(COMPUTER_VTABLE.kind(), Kind::Computer);
        assert_eq!(ZBOOK_VTABLE.kind(), Kind::Zbook);
        assert_eq!(
            described(&COMPUTER_VTABLE.construct(&attributes)),
            "Computer zbook has 16 cores.\n"
        );
        assert_eq!(
            described(&ZBOOK_VTABLE.construct(&attributes)),
            "Zbook zbook has 16 cores.\n"
        );
    }

    #[test]
    fn construct_reads_name_and_count() {
        let zbook = Zbook::construct(&Attributes::new("zb", 12));
        assert_eq!(zbook, Zbook::new("zb", 12));
        assert_eq!(zbook.host_name(), "zb");
        assert_eq!(zbook.cpu_num(), 12);
    }

    #[test]
    fn scratch_buffer_is_released_at_end_of_scope() {
        let logs = CapturedLogs::default();
        logs.during(|| {
            {
                let computer = Computer::new("zbook", 16);
                assert_eq!(computer.scratch().len(), SCRATCH_LEN);
                assert_eq!(logs.count("allocating scratch buffer"), 1);
                assert_eq!(logs.count("releasing scratch buffer"), 0);
            }
            assert_eq!(logs.count("releasing scratch buffer"), 1);
        });
    }

    #[test]
    fn boxed_computer_is_released_with_its_entity() {
        let logs = CapturedLogs::default();
        logs.during(|| {
            {
                let entity = Entity::new(Kind::Computer, Attributes::new("zbook", 16));
                assert_eq!(entity.kind(), Kind::Computer);
                assert_eq!(logs.count("releasing scratch buffer"), 0);
            }
            assert_eq!(logs.count("releasing scratch buffer"), 1);
        });
    }

    #[test]
    fn debug_reports_the_buffer_length_only() {
        let computer = Computer::new("zbook", 16);
        assert_eq!(
            format!("{computer:?}"),
            "Computer { host_name: \"zbook\", cpu_num: 16, scratch_len: 512 }"
        );
    }
}
