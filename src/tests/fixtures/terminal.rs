// Terminal that replays canned input lines and records everything written.

use std::collections::VecDeque;
use std::io;

use async_trait::async_trait;

use crate::console::terminal::Terminal;

pub struct ScriptedTerminal {
    inputs: VecDeque<String>,
    output: String,
}

impl ScriptedTerminal {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|line| line.to_string()).collect(),
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

#[async_trait]
impl Terminal for ScriptedTerminal {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}
