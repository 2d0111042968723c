// ══════════════════════════════════════════════════════════════════════════════
// LAYOUT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Fixed-width padding used to keep numeric fields aligned between redraws.
// Widths count characters, and text longer than the width is never cut.

/// Prepends `fill` until `text` is `width` characters long.
pub fn pad_from_left(text: &str, width: usize, fill: char) -> String {
	let len = text.chars().count();
	if len >= width {
		return text.to_string();
	}
	let mut out: String = std::iter::repeat_n(fill, width - len).collect();
	out.push_str(text);
	out
}

/// Appends `fill` until `text` is `width` characters long.
pub fn pad_from_right(text: &str, width: usize, fill: char) -> String {
	let len = text.chars().count();
	let mut out = text.to_string();
	out.extend(std::iter::repeat_n(fill, width.saturating_sub(len)));
	out
}
