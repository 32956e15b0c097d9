use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate};
use freshpredict_calendar::FestivalCalendar;
use freshpredict_catalog::Product;
use freshpredict_core::{Category, ProductId, Unit};
use freshpredict_forecast::{Forecaster, Horizon};
use freshpredict_inventory::{DemandHistory, DemandObservation};

fn bench_product() -> Product {
    Product::new(
        ProductId::new("PLT001").unwrap(),
        "Whole Chicken",
        Category::Poultry,
        Unit::Kilogram,
        12.50,
        4,
        "QL Resources",
    )
    .unwrap()
}

fn bench_history(days: usize, end: NaiveDate) -> DemandHistory {
    let start = end.checked_sub_days(Days::new(days as u64 - 1)).unwrap();
    DemandHistory::from_observations(
        ProductId::new("PLT001").unwrap(),
        (0..days).map(|i| DemandObservation {
            // Deterministic weekly shape with a slow upward drift.
            date: start.checked_add_days(Days::new(i as u64)).unwrap(),
            demand: 10.0 + (i % 7) as f64 * 1.5 + i as f64 * 0.05,
        }),
    )
    .unwrap()
}

fn bench_forecast_horizons(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    let product = bench_product();
    let history = bench_history(120, today);
    let calendar = FestivalCalendar::malaysian_spanning(2026);
    let forecaster = Forecaster::default();

    let mut group = c.benchmark_group("forecast_horizons");
    for horizon in [Horizon::Week, Horizon::Fortnight, Horizon::Month] {
        group.throughput(Throughput::Elements(horizon.days() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(horizon.days()),
            &horizon,
            |b, &horizon| {
                b.iter(|| {
                    forecaster
                        .forecast(
                            black_box(&product),
                            black_box(&history),
                            black_box(&calendar),
                            today,
                            horizon,
                        )
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_history_lengths(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    let product = bench_product();
    let calendar = FestivalCalendar::malaysian_spanning(2026);
    let forecaster = Forecaster::default();

    let mut group = c.benchmark_group("forecast_history_lengths");
    for days in [30usize, 90, 365] {
        let history = bench_history(days, today);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &history, |b, history| {
            b.iter(|| {
                forecaster
                    .forecast(
                        black_box(&product),
                        black_box(history),
                        black_box(&calendar),
                        today,
                        Horizon::Fortnight,
                    )
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forecast_horizons, bench_history_lengths);
criterion_main!(benches);
