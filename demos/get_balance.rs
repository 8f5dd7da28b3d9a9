use std::io;

use smsbroadcast::SmsBroadcastClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("SMSBROADCAST_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSBROADCAST_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("SMSBROADCAST_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSBROADCAST_PASSWORD environment variable is required",
        )
    })?;

    let client = SmsBroadcastClient::create(username, password, None)?;
    println!("balance: {}", client.get_balance().await?);

    Ok(())
}
