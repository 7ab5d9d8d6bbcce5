/// When to emit color escapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color only when the output is an interactive terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self, is_tty: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_tty,
        }
    }
}

/// Configuration for the colorizer loop
#[derive(Debug, Clone, Default)]
pub struct ColorizerConfig {
    pub debug: bool,
    /// Flush after every line so colored output keeps pace with the test run
    pub flush_each_line: bool,
}
