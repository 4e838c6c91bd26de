use std::io::Write;

use log::info;

use crate::error::PipelineError;

pub use self::twitter::Twitter;

pub mod oauth;
mod twitter;

pub trait Publisher {
    fn publish(&mut self, message: &str) -> Result<(), PipelineError>;
}

/// Writes the message, newline-terminated, to any writer (stdout for dry runs).
pub struct Print<W: Write> {
    out: W,
}

impl<W: Write> Print<W> {
    #[inline]
    pub fn new(out: W) -> Self {
        Print { out }
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Print<std::io::Stdout> {
    #[inline]
    pub fn stdout() -> Self {
        Print::new(std::io::stdout())
    }
}

impl<W: Write> Publisher for Print<W> {
    fn publish(&mut self, message: &str) -> Result<(), PipelineError> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;

        info!("printed message ({} chars)", message.chars().count());
        Ok(())
    }
}
