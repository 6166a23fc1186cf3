use std::fmt;

use marquee_core::quote::ClipboardSink;
use marquee_core::{Error, Result};

/// The desktop clipboard, opened on first use.
///
/// On X11 and Wayland the copied text is served by this process, so it
/// only outlives the process when another client takes it over. A
/// [`waiting`](Self::waiting) clipboard blocks in `set_text` until that
/// happens, which one-shot commands need before they exit.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    wait: bool,
}

impl SystemClipboard {
    /// A clipboard that holds the copied text until a clipboard manager or
    /// another application takes ownership of it.
    pub fn waiting() -> Self {
        Self {
            inner: None,
            wait: true,
        }
    }

    pub fn waits(&self) -> bool {
        self.wait
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .field("wait", &self.wait)
            .finish()
    }
}

#[cfg(target_os = "linux")]
fn set(clipboard: &mut arboard::Clipboard, text: &str, wait: bool) -> Result<()> {
    use arboard::SetExtLinux;

    let result = if wait {
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    };
    result.map_err(|e| Error::Clipboard(e.to_string()))
}

// Other platforms keep the contents after the process exits.
#[cfg(not(target_os = "linux"))]
fn set(clipboard: &mut arboard::Clipboard, text: &str, _wait: bool) -> Result<()> {
    clipboard
        .set_text(text)
        .map_err(|e| Error::Clipboard(e.to_string()))
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?,
        };
        let clipboard = self.inner.insert(clipboard);
        if self.wait {
            log::info!("Holding the clipboard until another application takes it over");
        }
        set(clipboard, text, self.wait)
    }
}
