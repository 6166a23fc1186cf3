use anyhow::Result;
use marquee_api::Config;
use marquee_core::Mood;

use crate::clipboard::SystemClipboard;
use crate::quotes::QuoteController;

/// Fetch a quote for `mood`, print it and optionally copy or save it.
pub async fn get(config: &Config, mood: Mood, copy: bool, save: bool) -> Result<()> {
    let mut controller = QuoteController::from_config(config)?;
    let text = controller.generate(mood).await?;
    println!("{}", text);

    if save && controller.save()? {
        println!(
            "\u{2713} Quote saved to {}",
            controller.favorites_path().display()
        );
    }

    // Copy last: on Linux this blocks until the text has been handed off.
    if copy && cfg!(target_os = "linux") {
        eprintln!("Waiting for a clipboard manager or another application to take the quote...");
    }
    if copy && controller.copy(&mut copy_clipboard())? {
        println!("\u{2713} Quote copied to clipboard!");
    }

    Ok(())
}

/// The clipboard for one-shot commands, which must outlive the process.
fn copy_clipboard() -> SystemClipboard {
    SystemClipboard::waiting()
}

/// Print each mood with its keyword.
pub fn moods() {
    for mood in Mood::ALL {
        println!("{:<10} {}", mood.label(), mood.keyword());
    }
}
