use std::io;

use smsbroadcast::{SendOptions, SmsBroadcastClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = required_env("SMSBROADCAST_USERNAME")?;
    let password = required_env("SMSBROADCAST_PASSWORD")?;
    let sender = required_env("SMSBROADCAST_SENDER")?;
    let phone = required_env("SMSBROADCAST_PHONE")?;
    let message = std::env::var("SMSBROADCAST_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsbroadcast demo.".to_owned());

    let client = SmsBroadcastClient::create(username, password, Some(&sender))?;
    let response = client.send(phone, message, SendOptions::default()).await?;
    println!(
        "code: {:?}, to: {:?}, reference: {:?}",
        response.code, response.to, response.reference
    );

    Ok(())
}
