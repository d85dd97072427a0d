use crate::dispatch;
use ledboard_core::config::Config;
use std::path::Path;

pub async fn run(config: &Config, board: Option<&str>, script: &Path) -> anyhow::Result<()> {
    let controller = dispatch::create_controller(config, board)?;
    let outcome = controller.install_renderer(script).await?;

    println!("Renderer installed:");
    println!("  Local:  {}", script.display());
    println!("  Remote: {}", outcome.remote_path);

    Ok(())
}
