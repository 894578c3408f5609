/*!

# The Dispatcher

Dispatching is calling [`Describe::describe`]. That is all there is to it, and that
is the point: the caller never inspects a tag and never needs to.

[`dispatch_all`] walks a collection in iteration order and describes each item
exactly once. If a write fails, the error is returned immediately and nothing after
the failing item is described. No item's behavior can affect another's, so there
is nothing to roll back.

[`Dispatcher`] is the same thing bundled with the output stream it writes to.

*/

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::describe::Describe;

/// Describes one item on `out`.
pub fn dispatch<D: Describe + ?Sized>(item: &D, out: &mut dyn Write) -> io::Result<()> {
    trace!("dispatching");
    item.describe(out)
}

/// Describes every item on `out` in iteration order, stopping at the first failure.
/// Returns how many items were described.
pub fn dispatch_all<I>(items: I, out: &mut dyn Write) -> io::Result<usize>
where
    I: IntoIterator,
    I::Item: Describe,
{
    let mut count = 0;
    for item in items {
        if let Err(error) = dispatch(&item, out) {
            debug!(dispatched = count, %error, "dispatch stopped by a failed write");
            return Err(error);
        }
        count += 1;
    }
    debug!(dispatched = count, "dispatched collection");
    Ok(count)
}

/// Owns an output stream and counts successful dispatches to it.
pub struct Dispatcher<W: Write> {
    out: W,
    dispatched: usize,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(out: W) -> Self {
        Self { out, dispatched: 0 }
    }

    pub fn dispatch<D: Describe + ?Sized>(&mut self, item: &D) -> io::Result<()> {
        dispatch(item, &mut self.out)?;
        self.dispatched += 1;
        Ok(())
    }

    /// Like [`dispatch_all`]. Items described before a failure still count.
    pub fn dispatch_all<I>(&mut self, items: I) -> io::Result<usize>
    where
        I: IntoIterator,
        I::Item: Describe,
    {
        let mut count = 0;
        for item in items {
            if let Err(error) = self.dispatch(&item) {
                debug!(dispatched = count, %error, "dispatch stopped by a failed write");
                return Err(error);
            }
            count += 1;
        }
        debug!(dispatched = count, "dispatched collection");
        Ok(count)
    }

    /// Total successful dispatches over this dispatcher's lifetime.
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
