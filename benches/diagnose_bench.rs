//! Benchmark for classifier and rendering cost over every trait combination

use criterion::{criterion_group, criterion_main, Criterion};
use shroomcheck::formatting::FormattingConfig;
use shroomcheck::io::{create_writer, OutputFormat, ReportOptions};
use shroomcheck::{handle, DiagnosisRequest, GillColor, GillSize, Odor, Specimen, StalkRoot, TraitValue};
use std::hint::black_box;

fn all_specimens() -> Vec<Specimen> {
    let mut specimens = Vec::new();
    for &odor in Odor::ALL {
        for &gill_size in GillSize::ALL {
            for &gill_color in GillColor::ALL {
                for &stalk_root in StalkRoot::ALL {
                    specimens.push(Specimen::new(odor, gill_size, gill_color, stalk_root));
                }
            }
        }
    }
    specimens
}

fn bench_diagnose_all(c: &mut Criterion) {
    let specimens = all_specimens();
    c.bench_function("diagnose_all_combinations", |b| {
        b.iter(|| {
            for specimen in &specimens {
                black_box(black_box(specimen).diagnose());
            }
        })
    });
}

fn bench_render_json(c: &mut Criterion) {
    let response = handle(&DiagnosisRequest::new(Specimen::new(
        Odor::None,
        GillSize::Broad,
        GillColor::Buff,
        StalkRoot::Bulbous,
    )));
    c.bench_function("render_json_report", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(512);
            {
                let mut writer = create_writer(
                    OutputFormat::Json,
                    Box::new(&mut buf),
                    ReportOptions::default(),
                    FormattingConfig::plain(),
                );
                writer.write_response(black_box(&response)).unwrap();
            }
            black_box(buf)
        })
    });
}

criterion_group!(benches, bench_diagnose_all, bench_render_json);
criterion_main!(benches);
