//! Benchmark: batch-scoring candidate months.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use saju_base::{FiveElement, Stem};
use saju_calendar::month_ganzhi;
use saju_score::{EventType, MonthContext, ScoringContext, score_month};

fn bench_month_scan(c: &mut Criterion) {
    c.bench_function("score_24_months", |b| {
        b.iter(|| {
            let mut total = 0i32;
            for year in [2025, 2026] {
                for month in 1..=12 {
                    let pair = month_ganzhi(year, month).expect("valid month");
                    let mut ctx = ScoringContext::new(
                        black_box(Stem::Mu),
                        EventType::Marriage,
                        MonthContext::from_pair(pair),
                    );
                    ctx.beneficial_elements = vec![FiveElement::Fire, FiveElement::Earth];
                    total += score_month(&ctx).score;
                }
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_month_scan);
criterion_main!(benches);
