//! Structural containers a voice breaks into: repeats with alternate
//! endings, compressed full-measure-rest runs, and measure repeats.

use std::fmt;

use super::measure::Measure;
use super::segment::Segment;

#[derive(Debug, PartialEq, Clone)]
pub struct RepeatCommonPart {
    pub line: u32,
    segments: Vec<Segment>,
}
impl RepeatCommonPart {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            segments: Vec::new(),
        }
    }
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    pub fn append_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RepeatEndingKind {
    Hooked,
    Hookless,
}

#[derive(Debug, PartialEq, Clone)]
pub struct RepeatEnding {
    pub line: u32,
    pub kind: RepeatEndingKind,
    pub number: String,
    segments: Vec<Segment>,
}
impl RepeatEnding {
    pub fn new(line: u32, kind: RepeatEndingKind, number: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            number: number.into(),
            segments: Vec::new(),
        }
    }
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    pub fn append_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Repeat {
    pub line: u32,
    pub times: u32,
    common_part: Option<RepeatCommonPart>,
    endings: Vec<RepeatEnding>,
}
impl Repeat {
    pub fn new(line: u32, times: u32) -> Self {
        Self {
            line,
            times,
            common_part: None,
            endings: Vec::new(),
        }
    }
    pub fn common_part(&self) -> Option<&RepeatCommonPart> {
        self.common_part.as_ref()
    }
    pub fn set_common_part(&mut self, common_part: RepeatCommonPart) {
        self.common_part = Some(common_part);
    }
    pub fn common_part_mut(&mut self) -> Option<&mut RepeatCommonPart> {
        self.common_part.as_mut()
    }
    pub fn endings(&self) -> &[RepeatEnding] {
        &self.endings
    }
    pub fn append_ending(&mut self, ending: RepeatEnding) {
        self.endings.push(ending);
    }
    pub fn last_ending_mut(&mut self) -> Option<&mut RepeatEnding> {
        self.endings.last_mut()
    }
}
impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "repeat ({} endings), line {}",
            self.endings.len(),
            self.line
        )
    }
}

/// A run of consecutive whole-measure rests folded into one aggregate.
#[derive(Debug, PartialEq, Clone)]
pub struct RestMeasures {
    pub line: u32,
    measures: Vec<Measure>,
}
impl RestMeasures {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            measures: Vec::new(),
        }
    }
    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }
    pub fn measures_count(&self) -> usize {
        self.measures.len()
    }
    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }
    pub fn append_measure_clone(&mut self, measure: Measure) {
        self.measures.push(measure);
    }
    pub fn last_measure_mut(&mut self) -> Option<&mut Measure> {
        self.measures.last_mut()
    }
}
impl fmt::Display for RestMeasures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rest measures x{}, line {}",
            self.measures.len(),
            self.line
        )
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct MeasuresRepeatPattern {
    pub line: u32,
    segments: Vec<Segment>,
}
impl MeasuresRepeatPattern {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            segments: Vec::new(),
        }
    }
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    pub fn append_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct MeasuresRepeatReplicas {
    pub line: u32,
    segments: Vec<Segment>,
}
impl MeasuresRepeatReplicas {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            segments: Vec::new(),
        }
    }
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    pub fn append_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

/// "Play that measure again" percent repeats: a pattern and the measures
/// replicating it.
#[derive(Debug, PartialEq, Clone)]
pub struct MeasuresRepeat {
    pub line: u32,
    pattern: Option<MeasuresRepeatPattern>,
    replicas: Option<MeasuresRepeatReplicas>,
}
impl MeasuresRepeat {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            pattern: None,
            replicas: None,
        }
    }
    pub fn pattern(&self) -> Option<&MeasuresRepeatPattern> {
        self.pattern.as_ref()
    }
    pub fn set_pattern(&mut self, pattern: MeasuresRepeatPattern) {
        self.pattern = Some(pattern);
    }
    pub fn pattern_mut(&mut self) -> Option<&mut MeasuresRepeatPattern> {
        self.pattern.as_mut()
    }
    pub fn replicas(&self) -> Option<&MeasuresRepeatReplicas> {
        self.replicas.as_ref()
    }
    pub fn set_replicas(&mut self, replicas: MeasuresRepeatReplicas) {
        self.replicas = Some(replicas);
    }
    pub fn replicas_mut(&mut self) -> Option<&mut MeasuresRepeatReplicas> {
        self.replicas.as_mut()
    }
}
