use anyhow::{Context, Result};
use arboard::Clipboard;
use std::time::Duration;
use tracing::debug;

/// Access to a plain-text clipboard.
pub trait ClipboardGateway {
    /// Current clipboard text, or `None` when the clipboard holds no text.
    fn read_text(&mut self) -> Result<Option<String>>;

    /// Replace the clipboard contents with `text`.
    ///
    /// The new contents must be visible to other applications once this returns.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard, via `arboard`.
pub struct SystemClipboard {
    clipboard: Clipboard,
    settle: Duration,
}

impl SystemClipboard {
    /// Open the system clipboard.
    ///
    /// `settle` only matters on Linux, where the selection is owned by this
    /// process: writes block for up to that long so a clipboard manager can
    /// take over the contents before we exit.
    pub fn new(settle: Duration) -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to access system clipboard")?;
        Ok(Self { clipboard, settle })
    }
}

impl ClipboardGateway for SystemClipboard {
    fn read_text(&mut self) -> Result<Option<String>> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e).context("Failed to read text from clipboard"),
        }
    }

    #[cfg(target_os = "linux")]
    fn write_text(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;
        use std::time::Instant;

        debug!(settle_ms = self.settle.as_millis() as u64, "Writing clipboard");
        self.clipboard
            .set()
            .wait_until(Instant::now() + self.settle)
            .text(text.to_owned())
            .context("Failed to copy text to clipboard")
    }

    #[cfg(not(target_os = "linux"))]
    fn write_text(&mut self, text: &str) -> Result<()> {
        debug!(settle_ms = self.settle.as_millis() as u64, "Writing clipboard");
        self.clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")
    }
}

/// In-process clipboard, for headless use and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardGateway for MemoryClipboard {
    fn read_text(&mut self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
