//! Performance benchmarks for dataset parsing and verse lookup.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Tokenizing and materializing datasets at various row counts
//! - Linear number lookup over a parsed dataset
//! - CSV export of a full journal

use bible_journey::csv::tokenize;
use bible_journey::dataset::Dataset;
use bible_journey::export::to_csv;
use bible_journey::journal::JournalEntry;
use bible_journey::verse::lookup;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Builds a dataset shaped like the real spreadsheets, with quoted cells.
fn synthetic_csv(rows: usize) -> String {
    let mut csv = String::from(
        "\u{feff}Number,Reference,Verse_Text (KJV),Themes,Quick Reflection,Extended Reflection,Alignment,Prayer\r\n",
    );
    for n in 1..=rows {
        csv.push_str(&format!(
            "{n},Book {c}:{v},\"Verse {n}, with a comma and \"\"quotes\"\"\",Theme {n},Quick {n},\"Line one\nLine two\",Align {n},Prayer {n}\r\n",
            n = n,
            c = n / 31 + 1,
            v = n % 31 + 1
        ));
    }
    csv
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for rows in [100, 1_000, 5_000] {
        let text = synthetic_csv(rows);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("tokenize", rows), &text, |b, text| {
            b.iter(|| black_box(tokenize(black_box(text))));
        });
        group.bench_with_input(BenchmarkId::new("materialize", rows), &text, |b, text| {
            b.iter(|| black_box(Dataset::parse(black_box(text))));
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let dataset = Dataset::parse(&synthetic_csv(5_000));

    c.bench_function("lookup_last_row", |b| {
        b.iter(|| black_box(lookup(&dataset, black_box("5000"))));
    });
    c.bench_function("lookup_missing", |b| {
        b.iter(|| black_box(lookup(&dataset, black_box("99999"))));
    });
}

fn bench_export(c: &mut Criterion) {
    let entries: Vec<JournalEntry> = (0..500)
        .map(|n| JournalEntry {
            date: "2024-01-15T08:30:00.000Z".to_string(),
            number: n.to_string(),
            reference: format!("Book 1:{}", n),
            verse: format!("Verse {}, with \"quotes\"", n),
            reflection: "Line one\nLine two".to_string(),
            translation: "KJV".to_string(),
            ..JournalEntry::default()
        })
        .collect();

    c.bench_function("export_csv_500", |b| {
        b.iter(|| black_box(to_csv(black_box(&entries))));
    });
}

criterion_group!(benches, bench_parse, bench_lookup, bench_export);
criterion_main!(benches);
