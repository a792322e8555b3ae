use std::fmt::Display;
use std::time::Duration;

use super::consts::MyVal;

/// Optional instrumentation carrier. `NoTrace` compiles the recording away,
/// `Trace` keeps a debugger the caller can read back after searching.
pub trait Tracing<T> {
    fn trace(&mut self) -> Option<&mut T>;

    fn new() -> Self;
}

pub struct NoTrace<T> {
    _t: Option<T>, //Unused, always set to None
}

pub struct Trace<T> {
    t: T,
}

impl<T> Tracing<T> for NoTrace<T> {
    fn trace(&mut self) -> Option<&mut T> {
        None
    }

    fn new() -> Self {
        NoTrace { _t: None }
    }
}

pub trait Debugger {
    fn new() -> Self;
}

impl<T: Debugger> Tracing<T> for Trace<T> {
    fn trace(&mut self) -> Option<&mut T> {
        Some(&mut self.t)
    }

    fn new() -> Self {
        Trace { t: T::new() }
    }
}

/// One line per completed root search.
pub struct SearchRecord {
    depth_limit: u8,
    score: MyVal,
    nodes_explored: i64,
    search_duration: Duration,
}

pub struct SearchDebugger {
    search_records: Vec<SearchRecord>,
}

impl Debugger for SearchDebugger {
    fn new() -> Self {
        Self {
            search_records: Vec::new(),
        }
    }
}

impl SearchDebugger {
    pub fn add_search(
        &mut self,
        depth_limit: u8,
        score: MyVal,
        nodes_explored: i64,
        search_duration: Duration,
    ) {
        self.search_records.push(SearchRecord {
            depth_limit,
            score,
            nodes_explored,
            search_duration,
        });
    }

    pub fn searches(&self) -> usize {
        self.search_records.len()
    }
}

impl Display for SearchDebugger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            " {:5} | {:6} | {:14} | {}",
            "Depth", "Score", "Nodes Explored", "Duration"
        )?;
        writeln!(f, "-------+--------+----------------+----------")?;

        for record in &self.search_records {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

impl Display for SearchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>6} | {:6} | {:14} | {} ms",
            self.depth_limit,
            self.score,
            self.nodes_explored,
            self.search_duration.as_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_trace_never_hands_out_a_debugger() {
        let mut tracer: NoTrace<SearchDebugger> = NoTrace::new();
        assert!(tracer.trace().is_none());
    }

    #[test]
    fn trace_accumulates_search_records() {
        let mut tracer: Trace<SearchDebugger> = Trace::new();

        let debugger = tracer.trace().unwrap();
        debugger.add_search(4, 8, 1234, Duration::from_millis(7));
        debugger.add_search(4, -3, 99, Duration::from_millis(1));

        assert_eq!(tracer.trace().unwrap().searches(), 2);
    }
}
