//! Walks through each dispatch mechanism once, writing to stdout.

use std::io::{self, Write};

use dispatch_patterns::{
    computers::Computer,
    describe::Describe,
    dispatch::Dispatcher,
    function_pointer::FnPtrComputer,
    logging::setup_tracing,
    variant::{Attributes, Entity},
};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    info!("function pointer dispatch");
    let zbook = FnPtrComputer::new("zbook", 16);
    zbook.invoke(&mut out)?;

    info!("scoped ownership");
    {
        let zbook = Computer::new("zbook", 16);
        zbook.describe(&mut out)?;
        // The scratch buffer is released here.
    }

    info!("dispatch over a heterogeneous collection");
    let animals = ["Dog", "Cat", "Bird"]
        .into_iter()
        .map(|tag| Entity::from_tag(tag, Attributes::default()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut dispatcher = Dispatcher::new(out);
    dispatcher.dispatch_all(&animals)?;
    info!(dispatched = dispatcher.dispatched(), "done");

    dispatcher.into_inner().flush()?;
    Ok(())
}
