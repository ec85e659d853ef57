//! Feedback API Service Entry Point
//!
//! Loads configuration, opens storage, and starts the HTTP server.

use feedback_api::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
