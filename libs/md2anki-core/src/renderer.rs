//! Simplified markdown and LaTeX to HTML rendering for card fields.
//!
//! Rendering is a fixed, ordered list of text substitutions. Each step sees the
//! output of the previous one:
//!
//! | step          | input          | output                   |
//! |---------------|----------------|--------------------------|
//! | display-math  | `$$x$$`        | `\[x\]`                  |
//! | inline-math   | `$x$`          | `\(x\)`                  |
//! | bold          | `**x**`        | `<strong>x</strong>`     |
//! | italic        | `*x*`          | `<em>x</em>`             |
//! | headers       | `## x`         | `<h2>x</h2>`             |
//! | line-breaks   | newline        | `<br>`                   |
//!
//! There is no escaping and no real parse tree. Unbalanced delimiters are left
//! as they are.

/// Ordered rendering pipeline.
pub const STEPS: &[(&str, fn(&str) -> String)] = &[
    ("display-math", display_math),
    ("inline-math", inline_math),
    ("bold", bold),
    ("italic", italic),
    ("headers", headers),
    ("line-breaks", line_breaks),
];

/// Render one question or answer to an HTML fragment.
pub fn render(text: &str) -> String {
    STEPS.iter().fold(text.to_string(), |acc, (name, step)| {
        let next = step(&acc);
        if next != acc {
            tracing::trace!(step = *name, "Rewrote field");
        }
        next
    })
}

const DISPLAY_MATH: Span = Span {
    open: "$$",
    close: "$$",
    allow_empty: true,
    multiline: true,
    lone: false,
    before: "\\[",
    after: "\\]",
};

const INLINE_MATH: Span = Span {
    open: "$",
    close: "$",
    allow_empty: false,
    multiline: false,
    lone: true,
    before: "\\(",
    after: "\\)",
};

const BOLD: Span = Span {
    open: "**",
    close: "**",
    allow_empty: false,
    multiline: false,
    lone: false,
    before: "<strong>",
    after: "</strong>",
};

const ITALIC: Span = Span {
    open: "*",
    close: "*",
    allow_empty: false,
    multiline: false,
    lone: false,
    before: "<em>",
    after: "</em>",
};

const HEADER_LEVELS: [(&str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

fn display_math(text: &str) -> String {
    DISPLAY_MATH.replace_all(text)
}

fn inline_math(text: &str) -> String {
    INLINE_MATH.replace_all(text)
}

fn bold(text: &str) -> String {
    BOLD.replace_all(text)
}

fn italic(text: &str) -> String {
    ITALIC.replace_all(text)
}

/// Turn `#`, `##` and `###` lines into headings, longest marker first.
fn headers(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            HEADER_LEVELS
                .iter()
                .find_map(|(prefix, level)| {
                    line.strip_prefix(prefix)
                        .filter(|rest| !rest.is_empty())
                        .map(|rest| format!("<h{level}>{rest}</h{level}>"))
                })
                .unwrap_or_else(|| line.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// A delimiter pair rewritten by shortest-span matching.
///
/// All delimiters are ASCII, so every byte offset the scanner stops at is a
/// char boundary.
struct Span {
    open: &'static str,
    close: &'static str,
    allow_empty: bool,
    /// Content may contain newlines.
    multiline: bool,
    /// The opening delimiter may not be followed, and the closing delimiter
    /// may not be preceded, by the delimiter character.
    lone: bool,
    before: &'static str,
    after: &'static str,
}

impl Span {
    fn replace_all(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;

        while let Some(offset) = text[pos..].find(self.open) {
            let start = pos + offset;
            let body = start + self.open.len();

            match self.find_close(text.as_bytes(), body) {
                Some(end) => {
                    output.push_str(&text[copied..start]);
                    output.push_str(self.before);
                    output.push_str(&text[body..end]);
                    output.push_str(self.after);
                    pos = end + self.close.len();
                    copied = pos;
                }
                // Retry from the next byte, like a regex search would.
                None => pos = start + 1,
            }
        }

        output.push_str(&text[copied..]);
        output
    }

    /// Byte offset of the nearest valid closing delimiter for content starting at `body`.
    fn find_close(&self, bytes: &[u8], body: usize) -> Option<usize> {
        let mark = self.close.as_bytes()[0];
        if self.lone && bytes.get(body) == Some(&mark) {
            return None;
        }

        let min_end = if self.allow_empty { body } else { body + 1 };
        let close = self.close.as_bytes();

        for end in body..bytes.len() {
            if end >= min_end
                && bytes[end..].starts_with(close)
                && !(self.lone && bytes[end - 1] == mark)
            {
                return Some(end);
            }
            if !self.multiline && bytes[end] == b'\n' {
                return None;
            }
        }
        None
    }
}
