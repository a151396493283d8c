use codspeed_criterion_compat::{BenchmarkId, black_box};
use codspeed_criterion_compat::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use storefront_search::Domain;
use storefront_search::schemas::{extract_records, merge, normalize_records};

// Mix of record shapes seen across storefront backends
fn create_payload(count: usize, wrapped: bool) -> Value {
    let records: Vec<Value> = (0..count)
        .map(|i| match i % 3 {
            0 => json!({ "id": i, "name": format!("Product {i}"), "price": i as f64 * 1.5, "imageRef": "p.png" }),
            1 => json!({ "_id": i.to_string(), "nome": format!("Produto {i}"), "preco": "1.234,56" }),
            _ => json!({ "codigo": i, "titulo": format!("Serviço {i}"), "valor": null, "amount": 3 }),
        })
        .collect();

    if wrapped {
        json!({ "data": { "items": records } })
    } else {
        Value::Array(records)
    }
}

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [10, 100, 1000].iter() {
        let flat = create_payload(*size, false);
        let wrapped = create_payload(*size, true);

        group.bench_with_input(BenchmarkId::new("flat_array", size), size, |b, _| {
            b.iter(|| {
                let records = extract_records(black_box(&flat)).unwrap_or_default();
                normalize_records(Domain::Product, records)
            });
        });

        group.bench_with_input(BenchmarkId::new("nested_wrapper", size), size, |b, _| {
            b.iter(|| {
                let records = extract_records(black_box(&wrapped)).unwrap_or_default();
                normalize_records(Domain::Service, records)
            });
        });
    }

    group.finish();
}

fn benchmark_merge(c: &mut Criterion) {
    let products = normalize_records(
        Domain::Product,
        extract_records(&create_payload(500, false)).unwrap_or_default(),
    );
    let services = normalize_records(
        Domain::Service,
        extract_records(&create_payload(500, true)).unwrap_or_default(),
    );

    c.bench_function("merge_domains", |b| {
        b.iter(|| merge(black_box(products.clone()), black_box(services.clone())));
    });
}

criterion_group!(benches, benchmark_normalize, benchmark_merge);
criterion_main!(benches);
