//! String-aware brace/bracket scanning shared by truncation repair and
//! aggressive recovery.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Opener {
    Brace,
    Bracket,
}

impl Opener {
    fn closer(self) -> char {
        match self {
            Opener::Brace => '}',
            Opener::Bracket => ']',
        }
    }
}

/// A prefix of the scanned text that can be closed into a well-formed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Checkpoint {
    /// Byte offset: keep `text[..end]`.
    pub end: usize,
    /// Openers still unclosed at `end`, outermost first.
    pub open: Vec<Opener>,
}

#[derive(Debug, Clone)]
pub(crate) struct ScanReport {
    /// Everything before this byte offset nests consistently.
    pub consistent_len: usize,
    /// Openers unclosed at `consistent_len`, outermost first.
    pub open: Vec<Opener>,
    /// Last structural boundary seen inside the consistent prefix.
    pub checkpoint: Option<Checkpoint>,
    /// The scan ended inside a string literal.
    pub in_string: bool,
    /// A closer without a matching opener stopped the scan.
    pub stopped_early: bool,
}

/// Walks `text` tracking nesting outside string literals.
///
/// Stops at the first `}` or `]` that does not close the innermost opener.
/// Checkpoints are recorded after every nested opener and matched closer, and
/// just before every comma, so truncating at one never leaves a half-written
/// member behind.
pub(crate) fn scan(text: &str) -> ScanReport {
    let mut stack: Vec<Opener> = Vec::new();
    let mut checkpoint: Option<Checkpoint> = None;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' | '[' => {
                stack.push(if c == '{' {
                    Opener::Brace
                } else {
                    Opener::Bracket
                });
                // An empty root object is not a recovery.
                if stack.len() > 1 {
                    checkpoint = Some(Checkpoint {
                        end: i + 1,
                        open: stack.clone(),
                    });
                }
            }
            '}' | ']' => {
                let expected = if c == '}' {
                    Opener::Brace
                } else {
                    Opener::Bracket
                };
                if stack.last() != Some(&expected) {
                    return ScanReport {
                        consistent_len: i,
                        open: stack,
                        checkpoint,
                        in_string: false,
                        stopped_early: true,
                    };
                }
                stack.pop();
                checkpoint = Some(Checkpoint {
                    end: i + 1,
                    open: stack.clone(),
                });
            }
            ',' => {
                checkpoint = Some(Checkpoint {
                    end: i,
                    open: stack.clone(),
                });
            }
            _ => {}
        }
    }

    ScanReport {
        consistent_len: text.len(),
        open: stack,
        checkpoint,
        in_string,
        stopped_early: false,
    }
}

/// Closers for `open`, innermost first.
pub(crate) fn closers_for(open: &[Opener]) -> String {
    open.iter().rev().map(|o| o.closer()).collect()
}

/// Unmatched `{` and `[` counts outside string literals, floored at zero.
pub(crate) fn unclosed_counts(text: &str) -> (usize, usize) {
    let mut braces: i64 = 0;
    let mut brackets: i64 = 0;
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => braces += 1,
            '}' => braces -= 1,
            '[' => brackets += 1,
            ']' => brackets -= 1,
            _ => {}
        }
    }

    (braces.max(0) as usize, brackets.max(0) as usize)
}
