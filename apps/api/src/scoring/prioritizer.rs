//! Merges every analyzer's recommendations into one short, ordered list.
//!
//! Selection is a stable pass over the input: nothing is ever re-sorted, so recommendations
//! keep the order the analyzers produced them in within each bucket. A bucket skips text an
//! earlier bucket already chose; repeats inside one bucket are kept.

pub const MAX_RECOMMENDATIONS: usize = 10;

const HIGH_PRIORITY_TERMS: &[&str] = &["missing", "add", "include", "critical"];
const MEDIUM_PRIORITY_TERMS: &[&str] = &["improve", "enhance", "optimize"];

const HIGH_PRIORITY_LIMIT: usize = 4;
const MEDIUM_PRIORITY_LIMIT: usize = 3;
const FILL_LIMIT: usize = 3;

/// Appended, in order, while the list is shorter than `MAX_RECOMMENDATIONS`.
pub const GENERIC_RECOMMENDATIONS: &[&str] = &[
    "Use consistent formatting throughout the resume",
    "Proofread for grammar and spelling errors",
    "Tailor resume content to specific job applications",
];

/// Picks up to ten recommendations: high priority first, then medium, then the rest,
/// topped up with generic advice.
pub fn prioritize(recommendations: &[String]) -> Vec<String> {
    let mut selection = Selection::new(recommendations);
    selection.take(Some(HIGH_PRIORITY_TERMS), HIGH_PRIORITY_LIMIT);
    selection.take(Some(MEDIUM_PRIORITY_TERMS), MEDIUM_PRIORITY_LIMIT);
    selection.take(None, FILL_LIMIT);

    let mut output = selection.output;
    for generic in GENERIC_RECOMMENDATIONS {
        if output.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        output.push((*generic).to_string());
    }

    output.truncate(MAX_RECOMMENDATIONS);
    output
}

/// Input recommendations and the output chosen from them so far.
struct Selection<'a> {
    input: &'a [String],
    lowered: Vec<String>,
    output: Vec<String>,
}

impl<'a> Selection<'a> {
    fn new(input: &'a [String]) -> Self {
        Self {
            input,
            lowered: input.iter().map(|r| r.to_lowercase()).collect(),
            output: Vec::with_capacity(MAX_RECOMMENDATIONS),
        }
    }

    /// Appends up to `limit` entries containing one of `terms` (any entry when `terms` is
    /// `None`), in input order, skipping text chosen by a previous call.
    fn take(&mut self, terms: Option<&[&str]>, limit: usize) {
        let earlier = self.output.len();
        let mut taken = 0;
        for (text, lower) in self.input.iter().zip(&self.lowered) {
            if taken == limit {
                break;
            }
            if terms.is_some_and(|terms| !terms.iter().any(|term| lower.contains(term))) {
                continue;
            }
            if self.output[..earlier].contains(text) {
                continue;
            }
            self.output.push(text.clone());
            taken += 1;
        }
    }
}
