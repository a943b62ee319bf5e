use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    console::bench_accept_tokenize,
    console::bench_poll_dispatch
);
criterion_main!(benches);
