use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_shape_parser::GraphQLParser;
use libgraphql_shape_parser::normalize;
use libgraphql_shape_parser::token_source::StrGraphQLTokenSource;

const CHARACTER_SHAPE: &str = "{
    id: ID!
    name: String!
    friends: [Character]
    appearsIn: [Episode]!
    roll(numRolls: Int!, sides: Int): [Int]
}";

/// Builds a raw multi-line object block with `field_count` fields.
fn synthetic_object(field_count: usize) -> String {
    let mut text = String::from("{\n");
    for i in 0..field_count {
        match i % 3 {
            0 => text.push_str(&format!("  field{i}: String!\n")),
            1 => text.push_str(&format!("  list{i}: [[Int!]]\n")),
            _ => text.push_str(&format!(
                "  call{i}(a: Int!, b: [String], c: Float): Boolean\n"
            )),
        }
    }
    text.push('}');
    text
}

fn synthetic_enum(value_count: usize) -> String {
    let values: Vec<String> = (0..value_count).map(|i| format!("VALUE_{i}")).collect();
    format!("enum {{\n  {}\n}}", values.join("\n  "))
}

// ─── Group 1: Normalization ──────────────────────────────

fn normalize_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [10, 100, 1_000] {
        let text = synthetic_object(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(normalize(black_box(text))))
        });
    }

    group.finish();
}

// ─── Group 2: Lexing ─────────────────────────────────────

fn lex(c: &mut Criterion) {
    let text = normalize(&synthetic_object(1_000));
    let mut group = c.benchmark_group("lex");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("object (1000 fields)", |b| {
        b.iter(|| black_box(StrGraphQLTokenSource::new(&text).count()))
    });

    group.finish();
}

// ─── Group 3: Parsing ────────────────────────────────────

fn parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let character = normalize(CHARACTER_SHAPE);
    group.bench_function("character shape", |b| {
        b.iter(|| black_box(GraphQLParser::new(&character).parse_schema_block()))
    });

    let enum_text = normalize(&synthetic_enum(500));
    group.bench_function("enum (500 values)", |b| {
        b.iter(|| black_box(GraphQLParser::new(&enum_text).parse_schema_block()))
    });

    for size in [10, 100, 1_000] {
        let text = normalize(&synthetic_object(size));
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("object", size), &text, |b, text| {
            b.iter(|| black_box(GraphQLParser::new(text).parse_schema_block()))
        });
    }

    group.finish();
}

criterion_group!(benches, normalize_text, lex, parse);
criterion_main!(benches);
