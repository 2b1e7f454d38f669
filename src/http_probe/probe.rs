use std::io::Write;

use tokio_util::sync::CancellationToken;

use super::client::PingClient;
use super::result::Attempt;
use crate::config::model::ProbeConfig;

/// Drives `config.count` sequential attempts against the target, writing one
/// line per event to `out` as it happens. A failed attempt is reported and the
/// loop moves on; only sink I/O errors propagate. Both suspension points (the
/// request and the inter-attempt pause) abort when `cancel` fires.
pub async fn run_probe<C, W>(
    config: &ProbeConfig,
    client: &C,
    out: &mut W,
    cancel: &CancellationToken,
) -> std::io::Result<()>
where
    C: PingClient,
    W: Write,
{
    writeln!(
        out,
        "Sending {} requests to {} with pause {} and increment {}",
        config.count, config.target, config.pause, config.increment
    )?;

    for i in 0..config.count {
        if cancel.is_cancelled() {
            break;
        }

        writeln!(out, "pinging {}", config.target)?;

        let result = tokio::select! {
            _ = cancel.cancelled() => break,
            result = client.get(&config.target) => result,
        };
        let attempt = Attempt::observe(i + 1, result);
        writeln!(out, "{attempt}")?;

        // No pause after the final attempt.
        if i + 1 < config.count {
            let delay = config.delay_after(i);
            writeln!(out, "Pausing for {} seconds", delay.as_secs())?;
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    Ok(())
}
