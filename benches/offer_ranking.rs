//! Ranking throughput over merged vendor result sets.

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use flight_offers::RankingBuilder;
use flight_offers::domain::entities::{FlightEndpoint, FlightOffer};
use flight_offers::domain::value_objects::{Money, Timestamp};
use rust_decimal::Decimal;
use std::hint::black_box;

fn offers(count: usize) -> Vec<FlightOffer> {
    let departure = Timestamp::parse_vendor("2025-05-09T08:00:00").unwrap();
    (0..count)
        .map(|i| {
            let i = i64::try_from(i).unwrap();
            let minutes = 300 + (i * 37) % 600;
            let cents = 40_000 + (i * 7_919) % 60_000;
            FlightOffer::builder(
                FlightEndpoint::new("SYD", departure),
                FlightEndpoint::new("BKK", departure.add_minutes(minutes)),
                Money::usd(Decimal::new(cents, 2)).unwrap(),
            )
            .flight_number(format!("XX{i}"))
            .build()
            .unwrap()
        })
        .collect()
}

fn bench_ranking(c: &mut Criterion) {
    let builder = RankingBuilder::default();
    let mut group = c.benchmark_group("ranking_build");

    for size in [10usize, 100, 1_000] {
        let input = offers(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| builder.build(black_box(input.clone())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
