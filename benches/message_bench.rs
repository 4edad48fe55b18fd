use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use solr_message::document::Attributes;
use solr_message::message::{self, Documents};

fn generate_raw_documents(count: usize) -> Value {
    let docs: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Document <{i}> & friends"),
                "cat": ["book", "", format!("cat{}", i % 7)],
                "price": i as f64 * 0.25,
            })
        })
        .collect();
    Value::Array(docs)
}

fn bench_add(c: &mut Criterion) {
    let raw = generate_raw_documents(1000);
    let mut group = c.benchmark_group("add_message");

    group.bench_function("build", |b| {
        b.iter(|| {
            let docs = Documents::try_from(raw.clone()).unwrap();
            black_box(message::add(docs, Attributes::new()).unwrap())
        })
    });

    let docs = Documents::try_from(raw.clone()).unwrap();
    let built = message::add(docs, Attributes::new()).unwrap();
    group.bench_function("render", |b| b.iter(|| black_box(built.to_xml().unwrap())));

    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let ids: Vec<i64> = (0..10_000).collect();
    c.bench_function("delete_by_id_render", |b| {
        b.iter(|| {
            let message = message::delete_by_id(black_box(ids.clone())).unwrap();
            black_box(message.to_xml().unwrap())
        })
    });
}

criterion_group!(benches, bench_add, bench_delete);
criterion_main!(benches);
