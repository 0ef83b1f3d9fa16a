//! Rendering a [`SegmentSequence`] in a target notation.

use crate::{
    NotationKind,
    rules::NotationRules,
    segment::{SegmentKind, SegmentSequence},
};

impl SegmentSequence {
    /// Render the segments in the given notation.
    ///
    /// Padding is re-attached verbatim, except that characters the target
    /// does not accept as padding are written as `_`.
    pub fn render(&self, kind: NotationKind) -> String {
        let rules = kind.rules();
        let mut out = String::new();
        push_padding(&mut out, &self.leading, rules);

        let mut word_index = 0;
        for (i, segment) in self.segments.iter().enumerate() {
            let case = if segment.is_joined() {
                rules.continuation()
            } else {
                if i > 0 {
                    word_index += 1;
                    if let Some(separator) = rules.separator {
                        out.push(separator);
                    }
                }
                if word_index == 0 {
                    rules.first
                } else {
                    rules.rest
                }
            };
            match segment.kind() {
                SegmentKind::Word => out.push_str(&case.apply(segment.text())),
                SegmentKind::Numeral => out.push_str(segment.text()),
            }
        }

        push_padding(&mut out, &self.trailing, rules);
        out
    }
}

fn push_padding(out: &mut String, padding: &str, rules: &NotationRules) {
    out.extend(
        padding
            .chars()
            .map(|c| if rules.is_padding(c) { c } else { '_' }),
    );
}
