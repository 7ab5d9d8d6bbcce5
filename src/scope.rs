use crate::colors::{Palette, Tag};
use std::io::{self, Write};

/// Colored region of the output. Opening it writes the tag's start code;
/// the reset code is written by `finish`, or by `Drop` if the scope is
/// abandoned early.
pub struct ColorScope<'w, W: Write> {
    out: &'w mut W,
    reset: &'static str,
    closed: bool,
}

impl<'w, W: Write> ColorScope<'w, W> {
    pub fn open(out: &'w mut W, palette: &Palette, tag: Tag) -> io::Result<Self> {
        out.write_all(palette.code(tag).as_bytes())?;
        Ok(ColorScope {
            out,
            reset: palette.reset,
            closed: false,
        })
    }

    pub fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)
    }

    /// Write the reset code and close the scope
    pub fn finish(mut self) -> io::Result<()> {
        self.closed = true;
        self.out.write_all(self.reset.as_bytes())
    }
}

impl<W: Write> Drop for ColorScope<'_, W> {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.out.write_all(self.reset.as_bytes());
        }
    }
}

/// Write `bytes` wrapped in the color for `tag`. The reset code is attempted
/// even when writing the body fails; the first error is returned.
pub fn write_wrapped<W: Write>(
    out: &mut W,
    palette: &Palette,
    tag: Tag,
    bytes: &[u8],
) -> io::Result<()> {
    let mut scope = ColorScope::open(out, palette, tag)?;
    let body = scope.write_all(bytes);
    let reset = scope.finish();
    body.and(reset)
}
