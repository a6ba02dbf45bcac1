//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package somc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use somc_lex::Lexer;
use somc_util::Handler;

const CLASS_SOURCE: &str = r"
Vector = Object (
    | storage first last |

    -----------------------------------------------------------

    at: index = ( ^storage at: index + first - 1 )
    at: index put: value = ( ^storage at: index + first - 1 put: value )
    append: element = (
        (last >= storage length) ifTrue: [
            | newStorage |
            newStorage := Array new: storage length * 2.
            storage doIndexes: [ :i | newStorage at: i put: (storage at: i) ].
            storage := newStorage ].
        storage at: last put: element.
        last := last + 1.
        ^element
    )
    size = ( ^last - first )
    hash = primitive
    printString = ( ^'Vector(' + self size asString + ')\n' )
    ratio = ( ^3.14159 * 2.5 )
)
";

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    // Lexer implements Iterator, so we can count directly
    Lexer::new(source, &handler).count()
}

fn bench_lexer_class(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(CLASS_SOURCE.len() as u64));

    group.bench_function("class_definition", |b| {
        b.iter(|| lexer_token_count(black_box(CLASS_SOURCE)))
    });

    let large = CLASS_SOURCE.repeat(100);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("class_definition_x100", |b| {
        b.iter(|| lexer_token_count(black_box(&large)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("s := 'hello'.")))
    });

    group.bench_function("escaped_string", |b| {
        b.iter(|| lexer_token_count(black_box(r"s := 'tab\tnewline\nquote\'slash\\'.")))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("x := 123456.")))
    });

    group.bench_function("double", |b| {
        b.iter(|| lexer_token_count(black_box("x := 3.14159.")))
    });

    group.finish();
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_keywords");

    group.bench_function("keyword_message", |b| {
        b.iter(|| lexer_token_count(black_box("dict at: key put: value")))
    });

    group.bench_function("keyword_sequence", |b| {
        b.iter(|| lexer_token_count(black_box("#at:put: #inject:into: #ifTrue:ifFalse:")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_class,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_keywords
);
criterion_main!(benches);
