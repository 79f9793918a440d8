//! Integration tests for the request encoder

use resp::Frame;

#[test]
fn test_encode_ping() {
	let encoded = resp::encode_command("PING", &[] as &[&str]);
	assert_eq!(&encoded[..], b"*1\r\n$4\r\nPING\r\n");
}

#[test]
fn test_encode_set() {
	let encoded = resp::encode_command("SET", &["key", "value"]);
	assert_eq!(
		&encoded[..],
		b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n"
	);
}

#[test]
fn test_encode_get() {
	let encoded = resp::encode_command("GET", &["key"]);
	assert_eq!(&encoded[..], b"*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n");
}

#[test]
fn test_request_roundtrip() {
	let args = ["field", "", "value with spaces"];
	let encoded = resp::encode_command("HSET", &args);

	let (frame, consumed) = resp::decode(&encoded, 0).unwrap();
	assert_eq!(consumed, encoded.len());

	let items = frame.as_array().expect("request grammar is an array");
	assert_eq!(items.len(), 1 + args.len());
	assert_eq!(items[0].as_str(), Some("HSET"));
	for (item, arg) in items[1..].iter().zip(args) {
		assert_eq!(item.as_str(), Some(arg));
	}
}

#[test]
fn test_request_roundtrip_preserves_bytes_exactly() {
	let args = ["h\u{e9}llo", "\u{4e16}\u{754c}"];
	let encoded = resp::encode_command("set", &args);

	let (frame, _) = resp::decode(&encoded, 0).unwrap();
	let items = frame.as_array().unwrap();
	assert_eq!(items[0], Frame::BulkString(Some("set".into())));
	assert_eq!(items[1].as_bytes().unwrap().as_ref(), args[0].as_bytes());
	assert_eq!(items[2].as_bytes().unwrap().as_ref(), args[1].as_bytes());
}
