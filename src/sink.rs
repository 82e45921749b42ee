// File: ./src/sink.rs
// Delivery of the rendered outline to its destination.
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Where the rendered outline ends up. The pipeline itself never performs
/// delivery; the binary picks a sink and hands it the final text.
pub trait Sink {
    fn deliver(&mut self, text: &str) -> Result<()>;
}

/// Default destination: the system clipboard, so the output can be pasted
/// straight into a TaskPaper document.
pub struct ClipboardSink;

impl Sink for ClipboardSink {
    fn deliver(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| anyhow::anyhow!("Failed to access the clipboard: {}", e))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| anyhow::anyhow!("Failed to write to the clipboard: {}", e))?;
        log::info!("outline copied to clipboard ({} bytes)", text.len());
        Ok(())
    }
}

/// Write the outline to a file.
pub struct FileSink {
    pub path: PathBuf,
}

impl Sink for FileSink {
    fn deliver(&mut self, text: &str) -> Result<()> {
        fs::write(&self.path, text)
            .map_err(|e| anyhow::anyhow!("Failed to write '{}': {}", self.path.display(), e))?;
        log::info!("outline written to {}", self.path.display());
        Ok(())
    }
}

/// Print the outline to stdout (for piping).
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn deliver(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }
}
