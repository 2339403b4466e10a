//! Benchmark of the per-edit work: patch answers, re-derive the summary, build a link
//!
//! Run with: cargo bench --bench summary_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rand::SeedableRng;

use concierge::delivery::{email_summary_link, ContactCapture, Recipients};
use concierge::flows::{AnswerSheet, Flow, Relocation, RelocationField};
use concierge::wizard::{Edit, Wizard};

const ANSWERS: &str = r#"{
  "flow": "relocation",
  "answers": {
    "household": {"household": "family", "kids": "yes", "move_window": "1-3-months"},
    "area": {"area_known": "not-sure", "lifestyle": "near-schools"},
    "housing": {"property_type": "villa", "bedrooms": "3", "budget_band": "20k-35k", "tenure": "rent"},
    "services": {"services": ["school-search", "visa-emirates-id", "pet-relocation"]},
    "priorities": {"speed": 70, "cost_control": 30, "spending": "comfort"},
    "cost_of_living": {"income": "45,000", "fixed_costs": "18,000", "discretionary": "9,500", "savings_goal": "education"}
  }
}"#;

fn relocation_answers() -> <Relocation as Flow>::Answers {
    match AnswerSheet::from_json(ANSWERS).unwrap() {
        AnswerSheet::Relocation(answers) => answers,
        other => panic!("unexpected flow {:?}", other.variant()),
    }
}

fn bench_summarize(c: &mut Criterion) {
    let answers = relocation_answers();
    c.bench_function("summarize_relocation", |b| {
        b.iter(|| Relocation::summarize(black_box(&answers)))
    });
}

fn bench_slider_edits(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let positions: Vec<u8> = (0..256).map(|_| rng.gen_range(0..=100)).collect();
    let mut wizard = Wizard::<Relocation>::from_answers(relocation_answers());

    c.bench_function("slider_edit_and_refresh", |b| {
        let mut i = 0;
        b.iter(|| {
            let position = positions[i % positions.len()];
            i += 1;
            wizard.patch((RelocationField::Speed, Edit::Slider(position)));
            black_box(wizard.summary().lines.len())
        })
    });
}

fn bench_mail_link(c: &mut Criterion) {
    let summary = Relocation::summarize(&relocation_answers());
    let contact = ContactCapture::new("Sara Haddad", "sara@example.com", "sara@example.com", "+971 50 123 4567");
    let recipients = Recipients::default();

    c.bench_function("email_summary_uri", |b| {
        b.iter(|| {
            let link = email_summary_link(
                Relocation::VARIANT,
                black_box(&contact),
                black_box(&summary),
                &recipients,
            )
            .unwrap();
            link.uri()
        })
    });
}

criterion_group!(benches, bench_summarize, bench_slider_edits, bench_mail_link);
criterion_main!(benches);
