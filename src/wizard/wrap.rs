//! Body text normalisation: `|` line breaks and hard wrapping.

/// Column limit for commit body lines.
pub const BODY_WIDTH: usize = 72;

/// Replace `|` with newlines and hard-wrap the result to [`BODY_WIDTH`].
pub fn format_body(input: &str) -> String {
    wrap(&input.replace('|', "\n"), BODY_WIDTH)
}

/// Greedy word wrap. Existing line breaks are kept and lines that already
/// fit are returned as typed. Longer lines break at whitespace, keeping their
/// leading indentation; words longer than `width` are split across lines.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }

    let indent = &line[..line.len() - line.trim_start().len()];
    let indent_len = indent.chars().count();

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    if indent_len < width {
        current.push_str(indent);
        current_len = indent_len;
    }
    let mut has_word = false;

    for word in line.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        let separator = usize::from(has_word);

        if current_len + separator + chars.len() <= width {
            if has_word {
                current.push(' ');
            }
            current.push_str(word);
            current_len += separator + chars.len();
            has_word = true;
            continue;
        }

        if has_word {
            lines.push(std::mem::take(&mut current));
        }

        // Oversized words are split; the remainder starts the next line.
        let mut pieces = chars.chunks(width).peekable();
        while let Some(piece) = pieces.next() {
            let piece: String = piece.iter().collect();
            if pieces.peek().is_some() {
                lines.push(piece);
            } else {
                current_len = piece.chars().count();
                current = piece;
            }
        }
        has_word = true;
    }

    if has_word || lines.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}
