//! Teach-mode trace types and the sinks the hull algorithms write to.
//!
//! Each algorithm is written once, generic over a [`StepSink`]. The plain entry
//! points pass [`NoTrace`] (records nothing, builds nothing); the traced ones pass
//! a [`Trace`] accumulator and return its steps next to the hull.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;

/// Which monotone chain a push/pop belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Lower,
    Upper,
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Chain::Lower => "lower",
            Chain::Upper => "upper",
        })
    }
}

/// One state transition. Serialized with a `type` tag, e.g.
/// `{"type":"pop","which":"lower","point":[x,y],"note":"..."}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepKind {
    /// Jarvis: starting vertex chosen.
    Start { at: Point },
    /// Jarvis: hull edge `index` committed.
    Edge { from: Point, to: Point, index: usize },
    Push { which: Chain, point: Point },
    /// `point` is the middle vertex removed from the chain.
    Pop { which: Chain, point: Point },
    Finish { hull_size: usize },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub kind: StepKind,
    pub note: String,
}

impl Step {
    pub fn new(kind: StepKind, note: impl Into<String>) -> Self {
        Self {
            kind,
            note: note.into(),
        }
    }
}

/// Receiver for algorithm steps. Steps are built lazily so that a sink which
/// drops them costs nothing.
pub trait StepSink {
    fn record(&mut self, step: impl FnOnce() -> Step);
}

/// Sink for the plain variants.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl StepSink for NoTrace {
    #[inline(always)]
    fn record(&mut self, _step: impl FnOnce() -> Step) {}
}

/// Ordered accumulator of steps.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl StepSink for Trace {
    #[inline]
    fn record(&mut self, step: impl FnOnce() -> Step) {
        self.steps.push(step());
    }
}

/// Hull plus the steps that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Traced {
    pub hull: Vec<Point>,
    pub steps: Vec<Step>,
}
