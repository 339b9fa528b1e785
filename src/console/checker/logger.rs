use std::cell::RefCell;

use super::printer::Printer;

/// Keeps everything printed in memory.
pub struct Logger {
    output: RefCell<String>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: RefCell::new(String::new()),
        }
    }

    #[must_use]
    pub fn log(&self) -> String {
        self.output.borrow().clone()
    }
}

impl Printer for Logger {
    fn println(&self, output: &str) {
        let mut buffer = self.output.borrow_mut();

        buffer.push_str(output);
        buffer.push('\n');
    }
}
