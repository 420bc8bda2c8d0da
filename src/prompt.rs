use std::io::{self, BufRead, Write};

/// Blocking user interaction: alerts and confirmations.
pub trait Prompt {
    fn alert(&mut self, message: &str);

    /// `true` to proceed.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Alerts to stderr, confirmations read from stdin.
pub struct StdioPrompt;

impl Prompt for StdioPrompt {
    fn alert(&mut self, message: &str) {
        eprintln!("[alert] {}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        eprint!("{} [y/N] ", message);
        let _ = io::stderr().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => is_yes(&line),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Records alerts and answers confirmations from a fixed script.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub alerts: Vec<String>,
    pub confirmations: Vec<String>,
    pub answer: bool,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn accepting() -> Self {
        ScriptedPrompt {
            answer: true,
            ..Default::default()
        }
    }

    pub fn declining() -> Self {
        ScriptedPrompt::default()
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answer
    }
}
