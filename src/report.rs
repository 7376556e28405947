use console::{StyledObject, style};

/// Where operator-facing lines go.
pub trait Reporter {
    /// Success and informational messages (cyan).
    fn info(&mut self, msg: &str);
    /// Failures (red).
    fn error(&mut self, msg: &str);
    /// Uncoloured device output and help text.
    fn plain(&mut self, msg: &str);
}

/// Writes lines to stdout. Whether colour is emitted is left to `console`.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn info_style(msg: &str) -> StyledObject<&str> {
    style(msg).cyan()
}

pub(crate) fn error_style(msg: &str) -> StyledObject<&str> {
    style(msg).red()
}

impl Reporter for Terminal {
    fn info(&mut self, msg: &str) {
        println!("{}", info_style(msg));
    }

    fn error(&mut self, msg: &str) {
        println!("{}", error_style(msg));
    }

    fn plain(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// Prints a fatal error to stderr in red.
pub fn fatal(msg: &str) {
    eprintln!("{}", style(format!("Error: {msg}")).red().for_stderr());
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{Reporter, error_style, info_style};

    #[test]
    fn info_is_cyan_and_error_is_red_when_styled() {
        assert_eq!(
            info_style("done").force_styling(true).to_string(),
            "\u{1b}[36mdone\u{1b}[0m"
        );
        assert_eq!(
            error_style("failed").force_styling(true).to_string(),
            "\u{1b}[31mfailed\u{1b}[0m"
        );
    }

    #[test]
    fn unstyled_lines_carry_no_escape_codes() {
        assert_eq!(info_style("done").force_styling(false).to_string(), "done");
        assert_eq!(error_style("failed").force_styling(false).to_string(), "failed");
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Line {
        Info(String),
        Error(String),
        Plain(String),
    }

    /// Collects reported lines for assertions.
    #[derive(Debug, Default)]
    pub(crate) struct Transcript {
        pub(crate) lines: Vec<Line>,
    }

    impl Transcript {
        pub(crate) fn count(&self, line: &Line) -> usize {
            self.lines.iter().filter(|l| *l == line).count()
        }
    }

    impl Reporter for Transcript {
        fn info(&mut self, msg: &str) {
            self.lines.push(Line::Info(msg.to_string()));
        }

        fn error(&mut self, msg: &str) {
            self.lines.push(Line::Error(msg.to_string()));
        }

        fn plain(&mut self, msg: &str) {
            self.lines.push(Line::Plain(msg.to_string()));
        }
    }

    pub(crate) fn info(msg: &str) -> Line {
        Line::Info(msg.to_string())
    }

    pub(crate) fn error(msg: &str) -> Line {
        Line::Error(msg.to_string())
    }

    pub(crate) fn plain(msg: &str) -> Line {
        Line::Plain(msg.to_string())
    }
}
