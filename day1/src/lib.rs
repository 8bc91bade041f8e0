use std::collections::VecDeque;
use std::fmt;
use std::io::{Read, Write};

use anyhow::Result;
use itertools::Itertools;

use util::LineFramer;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trend {
    NoPrevious,
    Increase,
    Decrease,
    Unchanged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub window: Vec<i64>,
    pub sum: i64,
    pub trend: Trend,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.window.len() == 1 {
            let label = match self.trend {
                Trend::NoPrevious => "N/A - no previous measurement",
                Trend::Increase => "increased",
                Trend::Decrease => "decreased",
                Trend::Unchanged => "unchanged",
            };
            write!(f, "{} ({label})", self.sum)
        } else {
            let label = match self.trend {
                Trend::NoPrevious => "no previous sum",
                Trend::Increase => "increase",
                Trend::Decrease => "decrease",
                Trend::Unchanged => "no change",
            };
            write!(f, "{} = {} ({label})", self.window.iter().join(" + "), self.sum)
        }
    }
}

/// Trailing window of the last `window_size` measurements plus the running
/// comparison state. Lines that do not parse as integers are skipped.
pub struct DepthScanner {
    window_size: usize,
    window: VecDeque<i64>,
    prev_sum: Option<i64>,
    increases: usize,
}

impl DepthScanner {
    pub fn new(window_size: usize) -> Self {
        assert!(window_size >= 1);
        DepthScanner {
            window_size,
            window: VecDeque::with_capacity(window_size),
            prev_sum: None,
            increases: 0,
        }
    }

    pub fn push_line(&mut self, line: &str) -> Option<Evaluation> {
        let value: i64 = line.trim().parse().ok()?;
        self.window.push_back(value);
        if self.window.len() < self.window_size {
            return None;
        }

        let sum: i64 = self.window.iter().sum();
        let trend = match self.prev_sum {
            None => Trend::NoPrevious,
            Some(prev) if sum > prev => Trend::Increase,
            Some(prev) if sum < prev => Trend::Decrease,
            Some(_) => Trend::Unchanged,
        };
        if trend == Trend::Increase {
            self.increases += 1;
        }
        self.prev_sum = Some(sum);

        let window = self.window.iter().copied().collect();
        self.window.pop_front();

        Some(Evaluation { window, sum, trend })
    }

    pub fn increases(&self) -> usize {
        self.increases
    }
}

pub fn count_increases(
    input: impl Iterator<Item = impl Into<String>>,
    window_size: usize,
) -> usize {
    let mut scanner = DepthScanner::new(window_size);
    for line in input {
        scanner.push_line(&line.into());
    }
    scanner.increases()
}

pub fn scan_stream(
    mut input: impl Read,
    mut output: impl Write,
    window_size: usize,
) -> Result<usize> {
    let mut scanner = DepthScanner::new(window_size);
    let mut framer = LineFramer::new();
    let mut chunk = [0u8; 8192];

    loop {
        let n = input.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        for line in framer.push(&chunk[..n]) {
            if let Some(eval) = scanner.push_line(&line) {
                writeln!(output, "{eval}")?;
            }
        }
    }
    if let Some(line) = framer.finish() {
        if let Some(eval) = scanner.push_line(&line) {
            writeln!(output, "{eval}")?;
        }
    }

    writeln!(output, "\n{} increases", scanner.increases())?;

    Ok(scanner.increases())
}
