use resp::DecodeError;

fn main() {
	println!("--- RESP chunked decode example ---");

	// Simulate a TCP response arriving in arbitrary chunks:
	// an array of two bulk strings, split mid-frame.
	let data_chunks = vec![
		b"*2\r\n$3\r".as_slice(),
		b"\nfoo".as_slice(),
		b"\r\n$3\r\nba".as_slice(),
		b"r\r\n".as_slice(),
	];

	let mut buffer = Vec::new();

	for (i, chunk) in data_chunks.iter().enumerate() {
		println!(
			"\n[stream] received chunk {}: {:?}",
			i,
			String::from_utf8_lossy(chunk)
		);

		buffer.extend_from_slice(chunk);

		// Re-decode from the start after every chunk, exactly as the
		// transport loop does.
		match resp::decode(&buffer, 0) {
			Ok((frame, consumed)) if consumed == buffer.len() => {
				println!("[decode] complete: {frame:?}");
			}
			Ok((frame, consumed)) => {
				println!("[decode] trailing bytes after {frame:?} at {consumed}, still waiting");
			}
			Err(DecodeError::Incomplete) => {
				println!("[decode] incomplete, waiting for more data...");
			}
			Err(e) => {
				eprintln!("[decode] protocol error: {e}");
				break;
			}
		}
	}
}
