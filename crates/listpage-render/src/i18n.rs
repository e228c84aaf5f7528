//! Message catalog and positional formatting for display strings

use std::collections::HashMap;
use std::fmt::Write as _;

/// Translations of display strings for one locale
///
/// Lookups fall back to the untranslated message, so an empty catalog
/// renders the built-in English strings.
///
/// # Example
/// ```
/// use listpage_render::i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add_translation("Next", "Suivant");
///
/// assert_eq!(catalog.translate("Next"), "Suivant");
/// assert_eq!(catalog.translate("Previous"), "Previous");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a simple translation
	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Builder form of [`add_translation`](Self::add_translation)
	pub fn with_translation(
		mut self,
		message: impl Into<String>,
		translation: impl Into<String>,
	) -> Self {
		self.add_translation(message, translation);
		self
	}

	/// Translate a message, falling back to the message itself
	pub fn translate<'a>(&'a self, message: &'a str) -> &'a str {
		self.messages
			.get(message)
			.map(String::as_str)
			.unwrap_or(message)
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

enum Placeholder {
	Percent,
	Next,
	Position(usize),
}

// Parses the text after a '%'. Returns the placeholder and the bytes it used.
fn parse_placeholder(rest: &[u8]) -> Option<(Placeholder, usize)> {
	match *rest.first()? {
		b'%' => Some((Placeholder::Percent, 1)),
		b'd' => Some((Placeholder::Next, 1)),
		b'0'..=b'9' => {
			let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
			if rest.get(digits) != Some(&b'$') || rest.get(digits + 1) != Some(&b'd') {
				return None;
			}
			let position = std::str::from_utf8(&rest[..digits]).ok()?.parse().ok()?;
			Some((Placeholder::Position(position), digits + 2))
		}
		_ => None,
	}
}

/// Substitutes integer arguments into a printf-style template
///
/// Supports positional `%1$d` placeholders, sequential `%d` and `%%`.
/// A placeholder that is malformed or refers to a missing argument is
/// copied through unchanged.
///
/// # Examples
///
/// ```
/// use listpage_render::i18n::format_positional;
///
/// assert_eq!(format_positional("%2$d of %1$d", &[3, 1]), "1 of 3");
/// assert_eq!(format_positional("%d%%", &[50]), "50%");
/// assert_eq!(format_positional("%4$d", &[1]), "%4$d");
/// ```
pub fn format_positional(template: &str, args: &[usize]) -> String {
	let bytes = template.as_bytes();
	let mut out = String::with_capacity(template.len() + 16);
	let mut next_arg = 0;
	let mut literal_start = 0;
	let mut i = 0;

	while i < bytes.len() {
		if bytes[i] != b'%' {
			i += 1;
			continue;
		}
		out.push_str(&template[literal_start..i]);

		match parse_placeholder(&bytes[i + 1..]) {
			Some((Placeholder::Percent, used)) => {
				out.push('%');
				i += 1 + used;
			}
			Some((Placeholder::Next, used)) if next_arg < args.len() => {
				let _ = write!(out, "{}", args[next_arg]);
				next_arg += 1;
				i += 1 + used;
			}
			Some((Placeholder::Position(n), used)) if (1..=args.len()).contains(&n) => {
				let _ = write!(out, "{}", args[n - 1]);
				i += 1 + used;
			}
			_ => {
				out.push('%');
				i += 1;
			}
		}
		literal_start = i;
	}

	out.push_str(&template[literal_start..]);
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(
		"Viewing %1$d - %2$d of a total of %3$d",
		&[6, 10, 12],
		"Viewing 6 - 10 of a total of 12"
	)]
	#[case("%3$d items, showing %1$d-%2$d", &[1, 10, 25], "25 items, showing 1-10")]
	#[case("%d and %d", &[4, 5], "4 and 5")]
	#[case("%d and %d", &[4], "4 and %d")]
	#[case("100%% sure", &[], "100% sure")]
	#[case("%0$d", &[1], "%0$d")]
	#[case("%1$s", &[1], "%1$s")]
	#[case("trailing %", &[1], "trailing %")]
	#[case("Página %1$d · %2$d", &[2, 9], "Página 2 · 9")]
	fn test_format_positional(
		#[case] template: &str,
		#[case] args: &[usize],
		#[case] expected: &str,
	) {
		assert_eq!(format_positional(template, args), expected);
	}

	#[rstest]
	fn test_huge_position_is_left_verbatim() {
		let template = "%99999999999999999999999$d";
		assert_eq!(format_positional(template, &[1]), template);
	}

	#[rstest]
	fn test_catalog_builder() {
		let catalog = MessageCatalog::new("de").with_translation("a", "b");
		assert_eq!(catalog.locale(), "de");
		assert_eq!(catalog.len(), 1);
		assert_eq!(catalog.translate("a"), "b");
	}
}
