use criterion::{Criterion, black_box, criterion_group, criterion_main};
use orrery_math::Real;

fn bench_real_mul(c: &mut Criterion) {
    let a = black_box(Real::fraction(123_456_789, 1_000));
    let b = black_box(Real::fraction(987_654_321, 7));
    c.bench_function("real_mul", |bencher| bencher.iter(|| black_box(a * b)));
}

fn bench_real_mul_wide(c: &mut Criterion) {
    let a = black_box(Real::from_int(1 << 60));
    let b = black_box(Real::from_int(1 << 20));
    c.bench_function("real_mul_wide", |bencher| {
        bencher.iter(|| black_box(a * b))
    });
}

fn bench_real_div(c: &mut Criterion) {
    let a = black_box(Real::from_int(149_597_870_700));
    let b = black_box(Real::fraction(31_557_600, 3));
    c.bench_function("real_div", |bencher| bencher.iter(|| black_box(a / b)));
}

fn bench_real_div_wide(c: &mut Criterion) {
    let a = black_box(Real::from_int(1 << 86));
    let b = black_box(Real::fraction(3, 2));
    c.bench_function("real_div_wide", |bencher| {
        bencher.iter(|| black_box(a / b))
    });
}

fn bench_real_ln(c: &mut Criterion) {
    let v = black_box(Real::from_int(10));
    c.bench_function("real_ln", |bencher| bencher.iter(|| black_box(v.ln())));
}

fn bench_real_exp(c: &mut Criterion) {
    let v = black_box(Real::fraction(7, 2));
    c.bench_function("real_exp", |bencher| bencher.iter(|| black_box(v.exp())));
}

fn bench_real_pow_fractional(c: &mut Criterion) {
    let base = black_box(Real::fraction(104, 100));
    let exponent = black_box(Real::fraction(7, 2));
    c.bench_function("real_pow_fractional", |bencher| {
        bencher.iter(|| black_box(base.pow(exponent)))
    });
}

fn bench_real_sin(c: &mut Criterion) {
    let v = black_box(Real::fraction(5, 2));
    c.bench_function("real_sin", |bencher| bencher.iter(|| black_box(v.sin())));
}

fn bench_real_sqrt(c: &mut Criterion) {
    let v = black_box(Real::from_int(25_000_000));
    c.bench_function("real_sqrt", |bencher| {
        bencher.iter(|| black_box(v.sqrt()))
    });
}

fn bench_real_atan2(c: &mut Criterion) {
    let y = black_box(Real::fraction(-3, 4));
    let x = black_box(Real::fraction(5, 3));
    c.bench_function("real_atan2", |bencher| {
        bencher.iter(|| black_box(Real::atan2(y, x)))
    });
}

fn bench_i128_mul_baseline(c: &mut Criterion) {
    let a: i128 = black_box(1_000_000_000);
    let b: i128 = black_box(2_000_000_000);
    c.bench_function("i128_mul_baseline", |bencher| {
        bencher.iter(|| black_box(a * b))
    });
}

fn bench_f64_sqrt_baseline(c: &mut Criterion) {
    let v: f64 = black_box(25_000_000.0);
    c.bench_function("f64_sqrt_baseline", |bencher| {
        bencher.iter(|| black_box(v.sqrt()))
    });
}

criterion_group!(
    benches,
    bench_real_mul,
    bench_real_mul_wide,
    bench_real_div,
    bench_real_div_wide,
    bench_real_ln,
    bench_real_exp,
    bench_real_pow_fractional,
    bench_real_sin,
    bench_real_sqrt,
    bench_real_atan2,
    bench_i128_mul_baseline,
    bench_f64_sqrt_baseline,
);
criterion_main!(benches);

#[cfg(test)]
mod tests {
    use super::*;

    /// The benchmark inputs stay inside the domain of every function.
    #[test]
    fn test_benchmark_inputs_do_not_fail() {
        assert!(Real::from_int(10).ln().is_ok());
        assert!(Real::fraction(104, 100).pow(Real::fraction(7, 2)).is_ok());
        assert!(Real::from_int(25_000_000).sqrt().is_ok());
        let _ = Real::from_int(1 << 86) / Real::fraction(3, 2);
        let _ = Real::from_int(1 << 60) * Real::from_int(1 << 20);
    }
}
