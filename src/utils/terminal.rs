//! Sanitising backend-supplied text before it reaches the terminal.
//!
//! Company names, contact values and backend messages are not under our
//! control. Escape sequences in them could move the cursor or repaint the
//! alternate screen, so everything the TUI or the CLI prints from a response
//! goes through [`display_line`].

/// Strips ANSI CSI escape sequences and control characters.
///
/// Tab, newline and carriage return survive; use [`display_line`] when the
/// text must fit on one row.
///
/// ```
/// use contact_finder::utils::terminal::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31mAcme\x1b[0m"), "Acme");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI ends at the first letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Single-row display form: escapes stripped, whitespace runs collapsed to one space
pub fn display_line(text: &str) -> String {
    strip_ansi_codes(text).split_whitespace().collect::<Vec<_>>().join(" ")
}
