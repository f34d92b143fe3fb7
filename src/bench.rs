// Per-frame timing and process memory, for the `benchmark` build.

use std::time::{Duration, Instant};

const STATUS_FILE: &str = "/proc/self/status";

pub struct FrameTimer {
    begin: Instant,
}

impl FrameTimer {
    pub fn start() -> Self {
        Self { begin: Instant::now() }
    }

    pub fn finish(self) -> Duration {
        self.begin.elapsed()
    }
}

/// Virtual memory size of this process, e.g. "123456 kB".
pub fn vm_size() -> String {
    std::fs::read_to_string(STATUS_FILE)
        .ok()
        .and_then(|s| parse_vm_size(&s))
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

/// Pull the `VmSize:` value (digits through the unit's trailing 'B') out of
/// a /proc status dump.
pub fn parse_vm_size(status: &str) -> Option<String> {
    let line = status.lines().find(|l| l.starts_with("VmSize:"))?;
    let rest = &line["VmSize:".len()..];
    let start = rest.find(|c: char| c.is_ascii_digit())?;
    let value = &rest[start..];
    let end = value.find('B').map(|i| i + 1).unwrap_or(value.len());
    Some(value[..end].trim_end().to_string())
}

/// One stdout line: `<segments>\t<micros>\t<vmsize>`.
pub fn frame_line(segments: usize, elapsed: Duration, memory: &str) -> String {
    format!("{segments}\t{}\t{memory}", elapsed.as_micros())
}
