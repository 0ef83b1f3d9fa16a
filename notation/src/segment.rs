//! Word segmentation.
//!
//! An identifier is decomposed into padding, which is kept verbatim, and an
//! ordered list of [`Segment`]s. The decomposition does not depend on the
//! notation the identifier was written in: `HELLO_WORLD1`, `helloWorld1` and
//! `hello-world1` all yield `hello`, `world`, `1`.

/// What a segment is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A run of letters, stored lowercased
    Word,
    /// A run of digits, stored as written
    Numeral,
}

/// An atomic piece of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    kind: SegmentKind,
    joined: bool,
}

impl Segment {
    /// The case-neutral text of the segment.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Whether this segment continues the previous one without a word
    /// boundary, as the `1` in `world1` does.
    pub fn is_joined(&self) -> bool {
        self.joined
    }

    pub fn is_numeral(&self) -> bool {
        self.kind == SegmentKind::Numeral
    }
}

/// A segmented identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentSequence {
    pub(crate) leading: String,
    pub(crate) segments: Vec<Segment>,
    pub(crate) trailing: String,
}

impl SegmentSequence {
    /// Padding before the first segment, e.g. `__` in `__hello_world`.
    pub fn leading(&self) -> &str {
        &self.leading
    }

    /// Padding after the last segment.
    pub fn trailing(&self) -> &str {
        &self.trailing
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Words with their numerals attached, e.g. `["hello", "world1"]`.
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();
        for segment in &self.segments {
            match words.last_mut() {
                Some(last) if segment.joined => last.push_str(&segment.text),
                _ => words.push(segment.text.clone()),
            }
        }
        words
    }
}

fn is_padding(c: char) -> bool {
    c == '_' || c == '-'
}

/// Builds segments one character at a time.
struct Segmenter {
    segments: Vec<Segment>,
    current: Option<Segment>,
    /// Set when a word boundary was seen since the last segment was closed
    boundary: bool,
}

impl Segmenter {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            current: None,
            boundary: true,
        }
    }

    fn close(&mut self) {
        if let Some(segment) = self.current.take() {
            self.segments.push(segment);
        }
    }

    fn boundary(&mut self) {
        self.close();
        self.boundary = true;
    }

    fn push(&mut self, c: char, kind: SegmentKind) {
        if let Some(segment) = self.current.as_mut().filter(|s| s.kind == kind) {
            segment.text.push(c.to_ascii_lowercase());
            return;
        }
        self.close();
        self.current = Some(Segment {
            text: c.to_ascii_lowercase().to_string(),
            kind,
            joined: !self.boundary,
        });
        self.boundary = false;
    }

    fn finish(mut self) -> Vec<Segment> {
        self.close();
        self.segments
    }
}

/// Split an identifier into padding and segments.
///
/// Word boundaries are separator characters and, when the identifier mixes
/// cases, every capital letter. Letter runs and digit runs are always
/// separate segments; a digit run glued to a word is marked as joined.
/// Any other character is treated as a boundary.
pub fn segment(s: &str) -> SegmentSequence {
    let core = s.trim_start_matches(is_padding);
    let leading = &s[..s.len() - core.len()];
    let trimmed = core.trim_end_matches(is_padding);
    let trailing = &core[trimmed.len()..];
    let core = trimmed;

    let mixed_case = core.chars().any(|c| c.is_ascii_lowercase());

    let mut segmenter = Segmenter::new();
    for c in core.chars() {
        if c.is_ascii_digit() {
            segmenter.push(c, SegmentKind::Numeral);
        } else if c.is_ascii_alphabetic() {
            if mixed_case && c.is_ascii_uppercase() {
                segmenter.boundary();
            }
            segmenter.push(c, SegmentKind::Word);
        } else {
            segmenter.boundary();
        }
    }

    SegmentSequence {
        leading: leading.to_string(),
        segments: segmenter.finish(),
        trailing: trailing.to_string(),
    }
}
