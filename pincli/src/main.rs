use anyhow::Result;
use pinstats_core::Conf;
use pincli::PinCliApp;

fn main() -> Result<()> {
    // Keep the menu readable unless RUST_LOG asks for more.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let conf = Conf::new();
    let mut app = PinCliApp::new(conf)?;

    app.run()?;

    Ok(())
}
