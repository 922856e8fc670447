//! Message delivery to the companion device.

use std::io::Write;

use tracing::info;

use crate::error::WatchError;
use crate::message::SunTimesMessage;

/// Destination for sunrise/sunset messages.
pub trait MessageSink {
    fn send(&mut self, message: &SunTimesMessage) -> Result<(), WatchError>;
}

/// Emits each message as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn send(&mut self, message: &SunTimesMessage) -> Result<(), WatchError> {
        info!(
            rise_minutes = message.rise_minutes,
            set_minutes = message.set_minutes,
            "sun times message"
        );
        Ok(())
    }
}

/// Writes one JSON object per line, flushing after each message.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MessageSink for JsonLinesSink<W> {
    fn send(&mut self, message: &SunTimesMessage) -> Result<(), WatchError> {
        serde_json::to_writer(&mut self.writer, message)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects messages in memory.
impl MessageSink for Vec<SunTimesMessage> {
    fn send(&mut self, message: &SunTimesMessage) -> Result<(), WatchError> {
        self.push(*message);
        Ok(())
    }
}
