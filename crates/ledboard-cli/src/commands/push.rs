use crate::dispatch;
use ledboard_core::config::Config;
use std::path::PathBuf;

pub async fn run(
    config: &Config,
    board: Option<&str>,
    payload: Option<String>,
    file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let raw = match (payload, file) {
        (Some(inline), None) => inline,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => anyhow::bail!("provide an inline payload or --file"),
        (Some(_), Some(_)) => anyhow::bail!("provide an inline payload or --file, not both"),
    };
    let payload: serde_json::Value = serde_json::from_str(&raw)?;

    let controller = dispatch::create_controller(config, board)?;
    let result = controller.push_payload(&payload).await?;

    if !result.started {
        let detail = result.diagnostics();
        anyhow::bail!(
            "renderer did not start (status: {}). {}",
            result.status,
            if detail.is_empty() {
                "No diagnostic output returned from the board.".to_string()
            } else {
                detail
            }
        );
    }

    println!("Renderer started:");
    println!("  Status: {}", result.status);
    println!("  Pushed: {}", result.completed_at.to_rfc3339());

    Ok(())
}
