use double_dispatch::{client_code, Component, ComponentA, ComponentB, DispatchError, Visitor1, Visitor2};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), DispatchError> {
    // Logs go to stderr, stdout is reserved for the trace lines. Verbosity via RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let components: Vec<Component> = vec![ComponentA.into(), ComponentB.into()];

    println!("The client code works with all visitors via the base Visitor interface:");
    client_code(&components, &mut Visitor1::new())?;

    println!("It allows the same client code to work with different types of visitors:");
    client_code(&components, &mut Visitor2::new())?;

    Ok(())
}
