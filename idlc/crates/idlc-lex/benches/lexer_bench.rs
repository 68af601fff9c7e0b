//! Lexer Benchmarks
//!
//! Measures lexer throughput on IDL sources.
//! Run with: `cargo bench --package idlc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use idlc_lex::{Lexer, LexerOptions};

const INTERFACE_SOURCE: &str = r#"
module Bank {
    exception Frozen { string reason; };

    struct Money {
        unsigned long long cents;
        wchar currency;
    };

    interface Account {
        readonly attribute Money balance;
        void deposit(in Money amount) raises (Frozen);
        void withdraw(in Money amount, out boolean ok) raises (Frozen);
        oneway void audit(in string<64> note);
    };

    typedef sequence<Account, 1024> Accounts;
    const long LIMIT = 0x7FFF;
    const double RATE = 1.25e-2;
};
"#;

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator, so we can count it directly
    Lexer::new(source).count()
}

fn bench_lexer_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "const long X = 42; typedef sequence<octet> Bytes;";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("const_and_typedef", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_interface(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_interface");
    group.throughput(Throughput::Bytes(INTERFACE_SOURCE.len() as u64));

    group.bench_function("bank_module", |b| {
        b.iter(|| lexer_token_count(black_box(INTERFACE_SOURCE)))
    });

    group.bench_function("bank_module_strict", |b| {
        b.iter(|| {
            Lexer::with_options(black_box(INTERFACE_SOURCE), LexerOptions::strict()).count()
        })
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    let source = r#""plain text" L"wide ✓" '\x41' L'é' "\t\n\101" 0x1F 0777 3.14e10"#
        .repeat(50);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_literals", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");
    group.sample_size(20);

    let source = INTERFACE_SOURCE.repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("bank_module_x200", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_small,
    bench_lexer_interface,
    bench_lexer_literals,
    bench_lexer_large
);
criterion_main!(benches);
