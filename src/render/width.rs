/// Column count used to align continuation lines.
///
/// Printable ASCII (`0x20..=0x7E`) is one column; every other character is
/// counted as two. This is an approximation for full-width scripts, not a
/// Unicode width table.
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if matches!(c, ' '..='~') { 1 } else { 2 })
        .sum()
}
