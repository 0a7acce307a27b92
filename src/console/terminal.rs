// Line based terminal I/O and the prompts built on it.
//
// Responsibilities
// - Hide stdin/stdout behind `Terminal` so the console loop can be scripted.
// - Re-ask until an answer is acceptable.
// - Abandon any pending read once the cancellation token fires.

use std::io::{self, BufRead, BufReader};
use std::thread;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Cancelled")]
    Cancelled,

    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[async_trait]
pub trait Terminal: Send {
    /// Next input line without its terminator, `None` once input is exhausted.
    async fn read_line(&mut self) -> io::Result<Option<String>>;

    async fn write(&mut self, text: &str) -> io::Result<()>;
}

/// Lines are read on a detached thread and handed over through a channel, so
/// a pending read never holds up runtime shutdown.
pub struct StdTerminal {
    lines: mpsc::Receiver<io::Result<String>>,
    stdout: Stdout,
}

impl StdTerminal {
    pub fn new() -> io::Result<Self> {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    pub fn from_reader<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (sender, lines) = mpsc::channel(1);
        thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || {
                for line in reader.lines() {
                    let failed = line.is_err();
                    if sender.blocking_send(line).is_err() || failed {
                        break;
                    }
                }
            })?;
        Ok(Self {
            lines,
            stdout: tokio::io::stdout(),
        })
    }
}

#[async_trait]
impl Terminal for StdTerminal {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.lines.recv().await.transpose()
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes()).await?;
        self.stdout.flush().await
    }
}

pub struct Prompt<T: Terminal> {
    terminal: T,
    cancel: CancellationToken,
}

impl<T: Terminal> Prompt<T> {
    pub fn new(terminal: T, cancel: CancellationToken) -> Self {
        Self { terminal, cancel }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    async fn read(&mut self) -> Result<String, PromptError> {
        let line = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(PromptError::Cancelled),
            line = self.terminal.read_line() => line?,
        };
        let line = line.ok_or(PromptError::Closed)?;
        Ok(line.trim().to_string())
    }

    async fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.terminal.write(question).await?;
        self.read().await
    }

    pub async fn message(&mut self, text: &str) -> Result<(), PromptError> {
        self.terminal.write(&format!("{text}\n")).await?;
        Ok(())
    }

    pub async fn ask_text(&mut self, question: &str) -> Result<String, PromptError> {
        self.ask(question).await
    }

    pub async fn ask_number(&mut self, question: &str) -> Result<i64, PromptError> {
        loop {
            match self.ask(question).await?.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.message("Please enter a whole number").await?,
            }
        }
    }

    pub async fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        let question = format!("{question} [y/n]: ");
        loop {
            match self.ask(&question).await?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.message("Please answer y or n").await?,
            }
        }
    }

    /// Numbered single choice; anything but a listed number is asked again.
    pub async fn select<V: Copy>(
        &mut self,
        title: &str,
        choices: &[(V, &str)],
    ) -> Result<V, PromptError> {
        let mut menu = format!("{title}\n");
        for (number, (_, label)) in choices.iter().enumerate() {
            menu.push_str(&format!("  {}) {label}\n", number + 1));
        }
        self.terminal.write(&menu).await?;

        loop {
            let answer = self.ask("> ").await?;
            let picked = answer
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| choices.get(index));
            if let Some((value, _)) = picked {
                return Ok(*value);
            }
            let hint = format!("Please choose a number between 1 and {}", choices.len());
            self.message(&hint).await?;
        }
    }

    pub async fn pause(&mut self) -> Result<(), PromptError> {
        self.ask("Press Enter to continue...").await.map(|_| ())
    }
}
