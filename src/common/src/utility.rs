use tokio::sync::broadcast;

/// Broadcasts once on Ctrl-C. Every subscriber should `resubscribe` from the
/// returned receiver.
pub fn create_shutdown_channel() -> broadcast::Receiver<()> {
    let (shutdown_sender, shutdown_receiver) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("signal received, shutting down");
                let _ = shutdown_sender.send(());
            }
            Err(e) => {
                // Keep the sender alive so receivers don't read a closed channel as shutdown
                tracing::warn!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
                drop(shutdown_sender);
            }
        }
    });
    shutdown_receiver
}
