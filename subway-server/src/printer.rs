//! Rider-facing text rendering of compiled directions.

use std::io::{self, Write};

use crate::planner::DirectionStep;

/// Writes directions as plain text, one instruction per line.
///
/// # Example
///
/// ```
/// use subway_server::network::NetworkGraph;
/// use subway_server::planner::get_directions;
/// use subway_server::printer::DirectionsPrinter;
///
/// let graph = NetworkGraph::builder()
///     .stations(["A", "B", "C"])
///     .line("Red Line", ["A", "B", "C"])
///     .build()
///     .unwrap();
/// let steps = get_directions(&graph, "A", "C").unwrap();
///
/// let mut out = Vec::new();
/// DirectionsPrinter::new(&mut out).print(&steps).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("Start out at A.\n"));
/// ```
pub struct DirectionsPrinter<W> {
    out: W,
}

impl<W: Write> DirectionsPrinter<W> {
    /// Create a printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write every instruction for `steps`. Writes nothing for no steps.
    pub fn print(&mut self, steps: &[DirectionStep]) -> io::Result<()> {
        for line in instructions(steps) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The instructions for `steps`, one sentence each.
pub fn instructions(steps: &[DirectionStep]) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, step) in steps.iter().enumerate() {
        if i == 0 {
            lines.push(sentence(format!("Start out at {}", step.boarding())));
            lines.push(sentence(format!(
                "Get on the {} heading towards {}",
                step.line(),
                step.towards()
            )));
        } else {
            lines.push(sentence(format!(
                "Switch over to the {}, heading towards {}",
                step.line(),
                step.towards()
            )));
        }

        let passing: Vec<&str> = step.passing().iter().map(|s| s.name()).collect();
        if !passing.is_empty() {
            lines.push(sentence(format!("Continue past {}", join_names(&passing))));
        }

        lines.push(format!(
            "When you get to {}, get off the {}.",
            step.alighting(),
            step.line()
        ));
    }

    if let Some(last) = steps.last() {
        let stops: usize = steps.iter().map(DirectionStep::stops).sum();
        lines.push(format!(
            "You have arrived at {} ({} {}).",
            last.alighting(),
            stops,
            if stops == 1 { "stop" } else { "stops" }
        ));
    }

    lines
}

/// Terminate with a full stop unless the text already ends with one
/// (station names such as "Weather-O-Rama, Inc.").
fn sentence(mut text: String) -> String {
    if !text.ends_with('.') {
        text.push('.');
    }
    text
}

/// "A", "A and B", "A, B, and C"
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [one] => (*one).to_string(),
        [a, b] => format!("{a} and {b}"),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}
