//! Sources of answers for open dialogs

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

/// Supplies the user's answer to a question asked by the service
#[async_trait]
pub trait Prompt: Send {
    async fn next_answer(&mut self, prompt: &str) -> std::io::Result<String>;
}

/// Asks on stdout and reads one line from stdin
pub struct StdinPrompt {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl StdinPrompt {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            stdout: tokio::io::stdout(),
        }
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompt for StdinPrompt {
    async fn next_answer(&mut self, prompt: &str) -> std::io::Result<String> {
        self.stdout.write_all(format!("{prompt}\n> ").as_bytes()).await?;
        self.stdout.flush().await?;
        self.lines.next_line().await?.ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed")
        })
    }
}
