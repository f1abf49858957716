//! Small HTML text helpers: escaping and entity decoding.

use std::borrow::Cow;

/// Escapes text for use between tags.
pub fn escape_text(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>']) {
		return Cow::Borrowed(s);
	}
	let mut out = String::with_capacity(s.len() + 8);
	for ch in s.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			_ => out.push(ch),
		}
	}
	Cow::Owned(out)
}

/// Escapes text for use inside a double-quoted attribute value.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"']) {
		return Cow::Borrowed(s);
	}
	let mut out = String::with_capacity(s.len() + 8);
	for ch in s.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			_ => out.push(ch),
		}
	}
	Cow::Owned(out)
}

fn named_entity(name: &str) -> Option<char> {
	let ch = match name {
		"amp" => '&',
		"lt" => '<',
		"gt" => '>',
		"quot" => '"',
		"apos" => '\'',
		"nbsp" => '\u{a0}',
		"mdash" => '—',
		"ndash" => '–',
		"hellip" => '…',
		"lsquo" => '‘',
		"rsquo" => '’',
		"ldquo" => '“',
		"rdquo" => '”',
		"copy" => '©',
		_ => return None,
	};
	Some(ch)
}

fn numeric_entity(body: &str) -> Option<char> {
	let code = match body.strip_prefix(['x', 'X']) {
		Some(hex) => u32::from_str_radix(hex, 16).ok()?,
		None => body.parse().ok()?,
	};
	char::from_u32(code)
}

/// Decodes character references (`&amp;`, `&#8212;`, `&#x2014;`, ...).
///
/// Unknown or malformed references are kept literally.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
	if !s.contains('&') {
		return Cow::Borrowed(s);
	}

	let mut out = String::with_capacity(s.len());
	let mut rest = s;
	while let Some(amp) = rest.find('&') {
		out.push_str(&rest[..amp]);
		let tail = &rest[amp..];

		let decoded = tail[1..]
			.find(';')
			.filter(|&end| end > 0 && end <= 10)
			.and_then(|end| {
				let body = &tail[1..1 + end];
				let ch = match body.strip_prefix('#') {
					Some(num) => numeric_entity(num),
					None => named_entity(body),
				}?;
				Some((ch, end + 2))
			});

		match decoded {
			Some((ch, consumed)) => {
				out.push(ch);
				rest = &tail[consumed..];
			}
			None => {
				out.push('&');
				rest = &tail[1..];
			}
		}
	}
	out.push_str(rest);
	Cow::Owned(out)
}
