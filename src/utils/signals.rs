//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Cancel `token` on the first SIGTERM or SIGINT
///
/// Registration happens before this returns, so a signal arriving right after
/// startup is not lost.
pub fn cancel_on_signal(token: CancellationToken) -> std::io::Result<JoinHandle<()>> {
    let mut signals = Signals::new([SIGTERM, SIGINT])?;
    let handle = signals.handle();

    Ok(tokio::spawn(async move {
        if let Some(signal) = signals.next().await {
            info!("Received signal: {}", signal);
        }
        handle.close();
        token.cancel();
    }))
}
