// Benchmark for mirror forwarding
// Measures the cost of keeping both date representations in sync

use std::rc::Rc;

use agenda_controls::convert::ConversionContext;
use agenda_controls::mirror::{ContextProvider, ListMirror, ValueMirror};
use agenda_controls::observable::{ObservableList, Slot};
use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::{Europe::Amsterdam, Tz};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn amsterdam_provider() -> ContextProvider {
    Rc::new(|| ConversionContext::new(Amsterdam))
}

fn date_for(index: usize) -> DateTime<Tz> {
    let base = Amsterdam.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    base + Duration::minutes(index as i64)
}

fn bench_list_forwarding(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_forwarding");

    for count in [10usize, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let zoned = ObservableList::new();
                let mirror = ListMirror::attach(zoned.clone(), amsterdam_provider());
                for index in 0..count {
                    zoned.push(date_for(index));
                }
                black_box(mirror.naive().len())
            });
        });
    }

    group.finish();
}

fn bench_value_forwarding(c: &mut Criterion) {
    c.bench_function("value_forwarding", |b| {
        let mirror = ValueMirror::attach(Slot::new(), amsterdam_provider());
        let mut index = 0usize;
        b.iter(|| {
            index += 1;
            mirror.set_zoned(Some(date_for(index % 10_000)));
            black_box(mirror.naive().get())
        });
    });
}

criterion_group!(benches, bench_list_forwarding, bench_value_forwarding);
criterion_main!(benches);
