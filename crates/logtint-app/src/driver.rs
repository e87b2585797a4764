//! Line driver: reads the input stream, beautifies each line and inserts a
//! separator banner when output resumes after a quiet period.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::style::{ContentStyle, Stylize};
use logtint_beautify::{BeautifyContext, Registry};
use logtint_core::prelude::*;
use logtint_core::{contains_ansi_codes, strip_ansi_codes};

use crate::config::SeparatorSettings;

/// Horizontal rule that opens the separator banner
pub const SEPARATOR_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━┫";

/// Line counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub lines: usize,
    pub matched: usize,
    pub separators: usize,
}

/// Drives one output stream. Owns all cross-line state: when the last line
/// was written and the per-run beautify context.
pub struct LineDriver<W: Write> {
    registry: Registry,
    ctx: BeautifyContext,
    separator: SeparatorSettings,
    styled: bool,
    last_line: Option<Instant>,
    stats: DriverStats,
    out: W,
}

impl<W: Write> LineDriver<W> {
    pub fn new(registry: Registry, ctx: BeautifyContext, out: W) -> Self {
        Self {
            registry,
            ctx,
            separator: SeparatorSettings::default(),
            styled: true,
            last_line: None,
            stats: DriverStats::default(),
            out,
        }
    }

    pub fn with_separator(mut self, separator: SeparatorSettings) -> Self {
        self.separator = separator;
        self
    }

    /// With styling off, lines are written verbatim and the banner is plain
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one line (received at `now`), preceded by the separator banner
    /// if the stream was quiet for longer than the idle threshold.
    ///
    /// Returns whether a rule matched the line.
    pub fn process_line(&mut self, line: &str, now: Instant) -> Result<bool> {
        if let Some(gap) = self.idle_gap(now) {
            self.write_separator(gap)?;
        }
        self.last_line = Some(now);

        let matched = if self.styled {
            let plain = if contains_ansi_codes(line) {
                strip_ansi_codes(line)
            } else {
                line.to_string()
            };
            let (styled, matched) = self.registry.apply(&plain, &self.ctx);
            if matched {
                writeln!(self.out, "{styled}")?;
            } else {
                writeln!(self.out, "{line}")?;
            }
            matched
        } else {
            writeln!(self.out, "{line}")?;
            false
        };

        self.out.flush()?;

        self.stats.lines += 1;
        if matched {
            self.stats.matched += 1;
        }
        Ok(matched)
    }

    /// Process `reader` line by line until EOF.
    ///
    /// Lines are split on `\n`; a trailing `\r` from CRLF input is dropped.
    /// Invalid UTF-8 is replaced rather than ending the stream.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> Result<DriverStats> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            let line = String::from_utf8_lossy(&buf);
            self.process_line(&line, Instant::now())?;
        }

        debug!(
            lines = self.stats.lines,
            matched = self.stats.matched,
            separators = self.stats.separators,
            "Input stream ended"
        );
        Ok(self.stats)
    }

    /// Quiet period before `now`, if it warrants a separator
    fn idle_gap(&self, now: Instant) -> Option<Duration> {
        if !self.separator.enabled {
            return None;
        }
        let gap = now.saturating_duration_since(self.last_line?);
        (gap > self.separator.idle_threshold()).then_some(gap)
    }

    fn write_separator(&mut self, gap: Duration) -> Result<()> {
        let banner = separator_banner(gap, &Local::now().format("%H:%M:%S").to_string());

        writeln!(self.out)?;
        if self.styled {
            writeln!(self.out, "{}", ContentStyle::new().bold().apply(&banner))?;
        } else {
            writeln!(self.out, "{banner}")?;
        }
        writeln!(self.out)?;

        self.stats.separators += 1;
        trace!(gap_ms = gap.as_millis() as u64, "Separator written");
        Ok(())
    }
}

/// Banner text for a quiet period of `gap` that ended at `clock`
pub fn separator_banner(gap: Duration, clock: &str) -> String {
    format!("{SEPARATOR_RULE} After {} ({clock})", format_gap(gap))
}

/// Human-readable gap: `7.3s`, `2m5s`, `1h0m12s`
pub fn format_gap(gap: Duration) -> String {
    let secs = gap.as_secs();
    if secs < 60 {
        return format!("{:.1}s", gap.as_secs_f64());
    }

    let (hours, minutes, seconds) = (secs / 3600, secs % 3600 / 60, secs % 60);
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else {
        format!("{minutes}m{seconds}s")
    }
}
