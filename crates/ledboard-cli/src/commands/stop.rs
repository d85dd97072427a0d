use crate::dispatch;
use ledboard_core::config::Config;

pub async fn run(config: &Config, board: Option<&str>) -> anyhow::Result<()> {
    let controller = dispatch::create_controller(config, board)?;
    let result = controller.stop_renderer().await?;

    if result.exit_code == 0 {
        println!("Renderer stopped");
    } else {
        println!("Stop command exited {}", result.exit_code);
        let detail = result.diagnostics();
        if !detail.is_empty() {
            println!("{}", detail);
        }
    }

    Ok(())
}
