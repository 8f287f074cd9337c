use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use tagson::{from_str, to_string, Map, Registry, Value};

fn record(i: i64) -> Value {
    let base: BigInt = "1000000000000000000000000000000".parse().unwrap();
    let mut obj = Map::new();
    obj.insert("id".to_string(), Value::from(i));
    obj.insert("name".to_string(), Value::from(format!("name {i}")));
    obj.insert("bigValue".to_string(), Value::BigInt(base + BigInt::from(i)));
    Value::Object(obj)
}

fn record_array(n: i64) -> Value {
    Value::Array((0..n).map(record).collect())
}

fn benchmark_serialize_record(c: &mut Criterion) {
    let registry = Registry::default();
    let value = record(1);

    c.bench_function("serialize_record", |b| {
        b.iter(|| to_string(black_box(&value), &registry))
    });
}

fn benchmark_deserialize_record(c: &mut Criterion) {
    let registry = Registry::default();
    let text = to_string(&record(1), &registry).unwrap();

    c.bench_function("deserialize_record", |b| {
        b.iter(|| from_str(black_box(&text), &registry))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let registry = Registry::default();
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let value = record_array(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&value), &registry))
        });
    }
    group.finish();
}

fn benchmark_deserialize_array(c: &mut Criterion) {
    let registry = Registry::default();
    let mut group = c.benchmark_group("deserialize_array");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&record_array(*size), &registry).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text), &registry))
        });
    }
    group.finish();
}

fn benchmark_string_escaping(c: &mut Criterion) {
    let registry = Registry::default();
    let mut group = c.benchmark_group("serialize_strings");

    let plain = Value::from("an ordinary string that needs no escaping at all");
    let lookalike = Value::from("#BigInt:123456789012345678901234567890");

    group.bench_function("plain_string", |b| {
        b.iter(|| to_string(black_box(&plain), &registry))
    });

    group.bench_function("token_lookalike", |b| {
        b.iter(|| to_string(black_box(&lookalike), &registry))
    });

    group.finish();
}

fn benchmark_comparison_with_plain_json(c: &mut Criterion) {
    let registry = Registry::default();
    // Same shape without the bigint field, so the comparison isolates the
    // tagging overhead rather than the extra field.
    let mut obj = Map::new();
    obj.insert("id".to_string(), Value::from(1));
    obj.insert("name".to_string(), Value::from("name 1"));
    let value = Value::Object(obj);
    let json = serde_json::json!({ "id": 1, "name": "name 1" });

    let mut group = c.benchmark_group("comparison");

    group.bench_function("tagson_serialize", |b| {
        b.iter(|| to_string(black_box(&value), &registry))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&json)))
    });

    let tagged_text = to_string(&value, &registry).unwrap();
    let json_text = serde_json::to_string(&json).unwrap();

    group.bench_function("tagson_deserialize", |b| {
        b.iter(|| from_str(black_box(&tagged_text), &registry))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&json_text)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let registry = Registry::default();
    let value = record(1);

    c.bench_function("roundtrip_record", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&value), &registry).unwrap();
            let _deserialized = from_str(black_box(&serialized), &registry).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_record,
    benchmark_deserialize_record,
    benchmark_serialize_array,
    benchmark_deserialize_array,
    benchmark_string_escaping,
    benchmark_comparison_with_plain_json,
    benchmark_roundtrip
);
criterion_main!(benches);
