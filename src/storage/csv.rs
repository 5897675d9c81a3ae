//! Minimal RFC 4180 record handling for the word list and long-form files

/// Split one CSV line into fields. Quoted fields may contain commas and `""` escapes.
pub fn split_record(line: &str) -> Result<Vec<String>, String> {
	let mut fields = Vec::new();
	let mut field = String::new();
	let mut chars = line.chars().peekable();
	let mut quoted = false;
	let mut at_start = true;

	while let Some(c) = chars.next() {
		if quoted {
			match c {
				'"' if chars.peek() == Some(&'"') => {
					chars.next();
					field.push('"');
				}
				'"' => quoted = false,
				_ => field.push(c),
			}
			continue;
		}

		match c {
			'"' if at_start => {
				quoted = true;
				at_start = false;
			}
			',' => {
				fields.push(std::mem::take(&mut field));
				at_start = true;
			}
			_ => {
				field.push(c);
				at_start = false;
			}
		}
	}

	if quoted {
		return Err("unterminated quoted field".to_string());
	}

	fields.push(field);
	Ok(fields)
}

/// Quote a field when it holds a delimiter, quote or line break.
pub fn escape_field(field: &str) -> String {
	if field.contains([',', '"', '\n', '\r']) {
		format!("\"{}\"", field.replace('"', "\"\""))
	} else {
		field.to_string()
	}
}

pub fn join_record<S: AsRef<str>>(fields: &[S]) -> String {
	fields
		.iter()
		.map(|f| escape_field(f.as_ref()))
		.collect::<Vec<_>>()
		.join(",")
}
