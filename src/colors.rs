/// Semantic color tags a line can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Header,
    Info,
    Success,
    Warning,
    Failure,
}

/// ANSI escape codes keyed by tag. Chosen once at startup and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub header: &'static str,  // Bright magenta
    pub info: &'static str,    // Bright blue
    pub success: &'static str, // Bright green
    pub warning: &'static str, // Bright yellow
    pub failure: &'static str, // Bright red
    pub reset: &'static str,
}

const ACTIVE: Palette = Palette {
    header: "\x1b[95m",
    info: "\x1b[94m",
    success: "\x1b[92m",
    warning: "\x1b[93m",
    failure: "\x1b[91m",
    reset: "\x1b[0m",
};

const DISABLED: Palette = Palette {
    header: "",
    info: "",
    success: "",
    warning: "",
    failure: "",
    reset: "",
};

impl Palette {
    /// Pick the active or the disabled palette
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            Self::active()
        } else {
            Self::disabled()
        }
    }

    pub fn active() -> Self {
        ACTIVE
    }

    /// Every code is the empty string
    pub fn disabled() -> Self {
        DISABLED
    }

    pub fn code(&self, tag: Tag) -> &'static str {
        match tag {
            Tag::Header => self.header,
            Tag::Info => self.info,
            Tag::Success => self.success,
            Tag::Warning => self.warning,
            Tag::Failure => self.failure,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
