//! Restart a server and watch its reported state.
//!
//! Reads the panel URL and client key from `CROC_URL` / `CROC_KEY`;
//! takes the server identifier as the first argument.

use crocgodyl::{Client, PowerSignal};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new(env::var("CROC_URL")?, env::var("CROC_KEY")?)?;
    let identifier = env::args().nth(1).expect("usage: power <identifier>");

    client
        .servers()
        .set_power_state(&identifier, PowerSignal::Restart)
        .await?;

    for _ in 0..10 {
        let res = client.servers().resources(&identifier).await?;
        println!(
            "{}: {} ({} MiB)",
            identifier,
            res.state,
            res.usage.memory_bytes / 1024 / 1024
        );

        if res.state == "running" {
            break;
        }

        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    Ok(())
}
