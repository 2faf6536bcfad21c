use std::fmt;

use super::measure::Measure;

/// An uninterrupted run of measures inside a voice. Repeats and other
/// structure break a voice into several segments.
#[derive(Debug, PartialEq, Clone)]
pub struct Segment {
    pub line: u32,
    measures: Vec<Measure>,
}
impl Segment {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            measures: Vec::new(),
        }
    }
    pub fn newborn_clone(&self) -> Self {
        Self::new(self.line)
    }
    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }
    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }
    pub fn append_measure(&mut self, measure: Measure) {
        self.measures.push(measure);
    }
    pub fn last_measure(&self) -> Option<&Measure> {
        self.measures.last()
    }
    pub fn last_measure_mut(&mut self) -> Option<&mut Measure> {
        self.measures.last_mut()
    }
}
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segment of {} measures, line {}",
            self.measures.len(),
            self.line
        )
    }
}
