//! Human-readable rendering of decoded frames.
//!
//! Stateless text transforms only; nothing here knows about the wire
//! format. Error frames always render as failures, never as values.

use resp::Frame;

/// Render a reply for display.
///
/// `HGETALL` replies get the field/value pair layout; everything else uses
/// the generic rendering.
pub fn format_reply(command: &str, frame: &Frame) -> String {
	if command.eq_ignore_ascii_case("HGETALL")
		&& let Some(pairs) = format_pairs(frame)
	{
		return pairs;
	}
	format_frame(frame)
}

/// Render one frame in the conventional interactive-client layout
pub fn format_frame(frame: &Frame) -> String {
	let mut out = String::new();
	render(frame, 0, &mut out);
	out
}

fn render(frame: &Frame, indent: usize, out: &mut String) {
	match frame {
		Frame::SimpleString(s) => out.push_str(&String::from_utf8_lossy(s)),
		Frame::Error(e) => {
			out.push_str("(error) ");
			out.push_str(&String::from_utf8_lossy(e));
		}
		Frame::Integer(i) => {
			out.push_str("(integer) ");
			out.push_str(&i.to_string());
		}
		Frame::BulkString(None) | Frame::Array(None) => out.push_str("(nil)"),
		Frame::BulkString(Some(data)) => {
			out.push('"');
			out.push_str(&String::from_utf8_lossy(data));
			out.push('"');
		}
		Frame::Array(Some(items)) if items.is_empty() => out.push_str("(empty array)"),
		Frame::Array(Some(items)) => {
			for (i, item) in items.iter().enumerate() {
				if i > 0 {
					out.push('\n');
					out.push_str(&" ".repeat(indent));
				}
				let label = format!("{}) ", i + 1);
				out.push_str(&label);
				render(item, indent + label.len(), out);
			}
		}
	}
}

/// Field/value layout for map-shaped replies: the value indented under its
/// numbered field. Returns `None` when the frame is not an even-length
/// array, so the caller can fall back to the generic rendering.
fn format_pairs(frame: &Frame) -> Option<String> {
	let items = frame.as_array()?;
	if items.is_empty() {
		return Some("(empty array)".to_string());
	}
	if items.len() % 2 != 0 {
		return None;
	}

	let mut out = String::new();
	for (i, pair) in items.chunks(2).enumerate() {
		if i > 0 {
			out.push('\n');
		}
		out.push_str(&format!("{}) {}\n   {}", i + 1, format_frame(&pair[0]), format_frame(&pair[1])));
	}
	Some(out)
}
