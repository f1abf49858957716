//! Normalization for text arriving from the clipboard.

/// Normalizes text to LF (`\n`) newlines.
///
/// Converts both CRLF (`\r\n`) and bare CR (`\r`) into LF. Text without
/// carriage returns is returned unchanged.
pub fn normalize_to_lf(s: String) -> String {
	if !s.contains('\r') {
		return s;
	}
	s.replace("\r\n", "\n").replace('\r', "\n")
}
