//! HTML output and the echo/return output mode

use crate::links::{LinkDescriptor, LinkRole};
use listpage_core::Result;
use std::io::Write;

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use listpage_render::render::escape;
///
/// assert_eq!(escape("a=1&b=2"), "a=1&amp;b=2");
/// assert_eq!(escape("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Renders a link sequence as HTML, one element per line
///
/// Previous and next labels are trusted markup and are written as-is. An
/// empty string is returned when there are fewer than two numbered pages.
pub fn render_links_html(links: &[LinkDescriptor]) -> String {
	if links.iter().filter(|l| l.is_numbered()).count() < 2 {
		return String::new();
	}

	links
		.iter()
		.map(|link| {
			let href = escape(link.url.as_deref().unwrap_or_default());
			match link.role {
				LinkRole::Previous => {
					format!(r#"<a class="prev page-numbers" href="{href}">{}</a>"#, link.label)
				}
				LinkRole::Next => {
					format!(r#"<a class="next page-numbers" href="{href}">{}</a>"#, link.label)
				}
				LinkRole::Page => {
					format!(r#"<a class="page-numbers" href="{href}">{}</a>"#, escape(&link.label))
				}
				LinkRole::Current => format!(
					r#"<span aria-current="page" class="page-numbers current">{}</span>"#,
					escape(&link.label)
				),
				LinkRole::Gap => r#"<span class="page-numbers dots">&hellip;</span>"#.to_string(),
			}
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Whether output is written to a stream or handed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
	#[default]
	Echo,
	Return,
}

impl OutputMode {
	/// `"echo"` selects [`OutputMode::Echo`]; any other flag returns the output
	pub fn from_flag(flag: &str) -> Self {
		if flag == "echo" { Self::Echo } else { Self::Return }
	}

	/// Writes `content` to `out` in echo mode, otherwise returns it
	pub fn emit(self, content: String, out: &mut impl Write) -> Result<Option<String>> {
		match self {
			Self::Echo => {
				out.write_all(content.as_bytes())?;
				Ok(None)
			}
			Self::Return => Ok(Some(content)),
		}
	}
}

impl From<&str> for OutputMode {
	fn from(flag: &str) -> Self {
		Self::from_flag(flag)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::links::generate_links;
	use crate::page_url::PageUrlTemplate;
	use listpage_core::{LinkSettings, QueryKeys};
	use rstest::rstest;

	fn links(current: usize, total: usize) -> Vec<LinkDescriptor> {
		let url = "http://example.com/?q=a&b";
		let template = PageUrlTemplate::new(url, &QueryKeys::default(), 10).unwrap();
		generate_links(current, total, &template, &LinkSettings::default())
	}

	#[rstest]
	fn test_single_page_renders_nothing() {
		assert_eq!(render_links_html(&links(1, 1)), "");
		assert_eq!(render_links_html(&links(1, 0)), "");
	}

	#[rstest]
	fn test_render_middle_page() {
		let html = render_links_html(&links(2, 3));
		let lines: Vec<&str> = html.lines().collect();

		assert_eq!(lines.len(), 5);
		assert_eq!(
			lines[0],
			concat!(
				r#"<a class="prev page-numbers" "#,
				r#"href="http://example.com/?paged=1&amp;q=a&amp;b=&amp;per_page=10">&laquo;</a>"#,
			)
		);
		assert_eq!(lines[2], r#"<span aria-current="page" class="page-numbers current">2</span>"#);
		assert!(lines[3].starts_with(r#"<a class="page-numbers" href="#));
		assert!(lines[4].ends_with(">&raquo;</a>"));
	}

	#[rstest]
	fn test_render_gap() {
		let html = render_links_html(&links(1, 10));
		assert!(html.contains(r#"<span class="page-numbers dots">&hellip;</span>"#));
	}

	#[rstest]
	#[case("echo", OutputMode::Echo)]
	#[case("return", OutputMode::Return)]
	#[case("", OutputMode::Return)]
	#[case("ECHO", OutputMode::Return)]
	fn test_output_mode_from_flag(#[case] flag: &str, #[case] expected: OutputMode) {
		assert_eq!(OutputMode::from(flag), expected);
	}

	#[rstest]
	fn test_emit() {
		let mut out = Vec::new();
		let echoed = OutputMode::Echo.emit("abc".to_string(), &mut out).unwrap();
		assert_eq!(echoed, None);
		assert_eq!(out, b"abc");

		let mut out = Vec::new();
		let returned = OutputMode::Return.emit("abc".to_string(), &mut out).unwrap();
		assert_eq!(returned.as_deref(), Some("abc"));
		assert!(out.is_empty());
	}
}
