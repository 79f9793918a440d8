//! Performance benchmarks for the RESP codec

use std::hint::black_box;

use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;

fn bench_decode_simple_string(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_simple_string");
	let data = b"+OK\r\n";

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("simple_string", |b| {
		b.iter(|| resp::decode(black_box(data), 0).unwrap())
	});
	group.finish();
}

fn bench_decode_bulk_string(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_bulk_string");
	let data = b"$11\r\nhello world\r\n";

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("bulk_string", |b| {
		b.iter(|| resp::decode(black_box(data), 0).unwrap())
	});
	group.finish();
}

fn bench_decode_array(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_array");
	let data = b"*3\r\n$3\r\nSET\r\n$3\r\nfoo\r\n$3\r\nbar\r\n";

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("command_array", |b| {
		b.iter(|| resp::decode(black_box(data), 0).unwrap())
	});
	group.finish();
}

fn bench_encode_command(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_command");
	let args = ["foo", "bar"];

	group.bench_function("set_command", |b| {
		b.iter(|| resp::encode_command(black_box("SET"), black_box(&args)))
	});
	group.finish();
}

criterion_group!(
	benches,
	bench_decode_simple_string,
	bench_decode_bulk_string,
	bench_decode_array,
	bench_encode_command
);
criterion_main!(benches);
