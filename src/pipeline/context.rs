use crate::colors::Tag;
use std::time::Duration;

/// Where the colorizer is in its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Reading,
    /// End of stream was seen
    Closed,
}

/// Runtime statistics
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ColorizeStats {
    pub lines_read: usize,
    pub lines_success: usize,
    pub lines_failure: usize,
    pub lines_info: usize,
    pub lines_plain: usize, // Written without color
    pub bytes_written: usize,
    pub processing_time: Duration,
}

impl ColorizeStats {
    /// Count one written line under its tag
    pub fn record(&mut self, tag: Option<Tag>, bytes: usize) {
        self.lines_read += 1;
        self.bytes_written += bytes;
        match tag {
            Some(Tag::Success) => self.lines_success += 1,
            Some(Tag::Failure) => self.lines_failure += 1,
            Some(Tag::Info) | Some(Tag::Header) | Some(Tag::Warning) => self.lines_info += 1,
            None => self.lines_plain += 1,
        }
    }

    /// None until at least one line has been timed
    pub fn lines_per_second(&self) -> Option<f64> {
        let secs = self.processing_time.as_secs_f64();
        if self.lines_read == 0 || secs <= 0.0 {
            return None;
        }
        Some(self.lines_read as f64 / secs)
    }

    pub fn merge(&mut self, other: &ColorizeStats) {
        self.lines_read += other.lines_read;
        self.lines_success += other.lines_success;
        self.lines_failure += other.lines_failure;
        self.lines_info += other.lines_info;
        self.lines_plain += other.lines_plain;
        self.bytes_written += other.bytes_written;
        self.processing_time += other.processing_time;
    }
}
