/*!

# Dispatch Through a Stored Function Pointer

Before there were trait objects there were structs with function pointer fields.
A value carries a pointer to the behavior appropriate to it, and callers invoke the
behavior through the pointer, handing the value back in as the first argument:

```rust,ignore
let zbook = FnPtrComputer::new("zbook", 16);
(zbook.print_info)(&zbook, &mut out)?; // what `invoke` does
```

This is exactly what a trait object's vtable is, except here the table has one
slot and lives inside the value instead of beside it. Swapping the pointer swaps
the behavior for that one value without touching any other.

The awkward calling syntax is hidden behind [`FnPtrComputer::invoke`], and the type
also implements [`Describe`] by calling through the pointer, so it can sit in the
same collection as trait-dispatched variants.

*/

use std::io::{self, Write};

use crate::{computers::write_core_count, describe::Describe};

/// The behavior slot.
pub type PrintInfo = fn(&FnPtrComputer, &mut dyn Write) -> io::Result<()>;

#[derive(Copy, Clone)]
pub struct FnPtrComputer {
    host_name: &'static str,
    cpu_num: u32,
    print_info: PrintInfo,
}

/// The default behavior: `Computer <host> has <n> cores.`
pub fn print_info(computer: &FnPtrComputer, out: &mut dyn Write) -> io::Result<()> {
    write_core_count(out, "Computer", computer.host_name, computer.cpu_num)
}

impl FnPtrComputer {
    pub const fn new(host_name: &'static str, cpu_num: u32) -> Self {
        Self::with_behavior(host_name, cpu_num, print_info)
    }

    pub const fn with_behavior(
        host_name: &'static str,
        cpu_num: u32,
        print_info: PrintInfo,
    ) -> Self {
        Self {
            host_name,
            cpu_num,
            print_info,
        }
    }

    pub fn host_name(&self) -> &'static str {
        self.host_name
    }

    pub fn cpu_num(&self) -> u32 {
        self.cpu_num
    }

    /// Calls the stored behavior on `self`.
    pub fn invoke(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.print_info)(self, out)
    }
}

impl Describe for FnPtrComputer {
    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        self.invoke(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::computers::Computer;

    const ZBOOK: FnPtrComputer = FnPtrComputer::new("zbook", 16);

    fn terse(computer: &FnPtrComputer, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}:{}", computer.host_name(), computer.cpu_num())
    }

    #[test]
    fn default_behavior() {
        let mut out = Vec::new();
        ZBOOK.invoke(&mut out).unwrap();
        assert_eq!(out, b"Computer zbook has 16 cores.\n");
    }

    #[test]
    fn same_line_as_trait_dispatch() {
        let mut by_pointer = Vec::new();
        let mut by_trait = Vec::new();
        ZBOOK.describe(&mut by_pointer).unwrap();
        Computer::new("zbook", 16).describe(&mut by_trait).unwrap();
        assert_eq!(by_pointer, by_trait);
    }

    #[test]
    fn swapped_pointer_changes_only_that_value() {
        let custom = FnPtrComputer::with_behavior("zbook", 16, terse);
        let mut out = Vec::new();
        custom.invoke(&mut out).unwrap();
        ZBOOK.invoke(&mut out).unwrap();
        assert_eq!(out, b"zbook:16\nComputer zbook has 16 cores.\n");
    }

    #[test]
    fn copies_carry_the_pointer() {
        let custom = FnPtrComputer::with_behavior("x", 1, terse);
        let copy = custom;
        let mut out = Vec::new();
        copy.invoke(&mut out).unwrap();
        assert_eq!(out, b"x:1\n");
    }
}
