// src/pipeline/stream.rs
use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::time::Instant;

use crate::classify::ClassifiedLine;
use crate::colors::Palette;
use crate::error::ColorizeError;
use crate::pipeline::config::ColorizerConfig;
use crate::pipeline::context::{ColorizeStats, StreamState};
use crate::scope::write_wrapped;

/// Reads lines, classifies them and writes them back out in color
pub struct Colorizer {
    palette: Palette,
    config: ColorizerConfig,
    state: StreamState,
    stats: ColorizeStats,
}

impl Colorizer {
    pub fn new(palette: Palette, config: ColorizerConfig) -> Self {
        Colorizer {
            palette,
            config,
            state: StreamState::Reading,
            stats: ColorizeStats::default(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Process a stream until end of input.
    ///
    /// Lines are handled as raw bytes so uncolored output is byte-identical
    /// to the input; classification works on a lossy UTF-8 view.
    pub fn process_stream<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<ColorizeStats, ColorizeError> {
        let start_time = Instant::now();
        let mut stream_stats = ColorizeStats::default();
        let mut buf = Vec::new();

        self.state = StreamState::Reading;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                self.state = StreamState::Closed;
                break;
            }

            let text = String::from_utf8_lossy(&buf);
            let line = ClassifiedLine::new(&text);

            match line.tag {
                Some(tag) => write_wrapped(output, &self.palette, tag, &buf)?,
                None => output.write_all(&buf)?,
            }
            if self.config.flush_each_line {
                output.flush()?;
            }

            if self.config.debug && matches!(text, Cow::Owned(_)) {
                // The sink may wrap stderr; keep the notice after its line
                output.flush()?;
                eprintln!(
                    "wvcolor: line {}: invalid UTF-8, classified lossily",
                    stream_stats.lines_read + 1
                );
            }
            stream_stats.record(line.tag, buf.len());
        }

        output.flush()?;
        stream_stats.processing_time = start_time.elapsed();
        self.stats.merge(&stream_stats);

        Ok(stream_stats)
    }

    /// Stats accumulated over every processed stream
    pub fn get_stats(&self) -> &ColorizeStats {
        &self.stats
    }
}
