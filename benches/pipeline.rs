// benches/pipeline.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use animals_web::{
    card::render_cards,
    filter::{distinct_values, matching},
    page::{assemble, replacements},
    AttrPath, Record,
};

const SKINS: [&str; 5] = ["Fur", "Hair", "Scales", "Moist", "Feathers"];
const TEMPLATE: &str = "<html><body>__REPLACE_SUBTITLE_FILTERED_BY_SKIN_TYPE__\
    <ul class=\"cards\">__REPLACE_ANIMALS_INFO__</ul></body></html>";

fn synthetic(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let r = Record::new(&format!("Animal {i}"))
                .with_characteristic("diet", vec!["Omnivore", "Scavenger"])
                .with_characteristic("lifespan", "10 years")
                .with_locations(["Europe", "Asia"]);
            // Every seventh record has no skin type at all.
            if i % 7 == 0 { r } else { r.with_characteristic("skin_type", SKINS[i % SKINS.len()]) }
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let records = synthetic(2_000);
    let path = AttrPath::SKIN_TYPE;

    c.bench_function("distinct_values", |b| {
        b.iter(|| black_box(distinct_values(black_box(&records), &path).len()))
    });

    c.bench_function("matching", |b| {
        b.iter(|| black_box(matching(black_box(&records), &path, "fur").len()))
    });

    c.bench_function("render_and_assemble", |b| {
        b.iter(|| {
            let hits = matching(black_box(&records), &path, "fur");
            let html = assemble(TEMPLATE, replacements("fur", render_cards(hits.iter().copied())));
            black_box(html.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
