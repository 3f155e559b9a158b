//! Echo decoded events and their key names for every key press.
use anyhow::Result;
use rawkey::{Decoder, key_for};
use rawkey_term::{CharMode, read_chars};

#[tokio::main]
async fn main() -> Result<()> {
    let stdin = std::io::stdin();
    let _mode = CharMode::enter(&stdin)?;

    println!("type keys to see echo - ctrl-c to quit");

    let mut decoder = Decoder::new(read_chars(&stdin)?);
    while let Some(event) = decoder.next_event().await {
        println!("{:?}\t{event:?}", key_for(&event));
    }

    Ok(())
}
