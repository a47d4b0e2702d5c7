use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Helpers: the same well-conditioned test matrices in both libraries
// ---------------------------------------------------------------------------

fn linmat_mat(n: usize) -> linmat::Matrix<f64> {
    linmat::Matrix::from_fn(n, n, |i, j| {
        ((i + 1) * (j + 1)) as f64 + if i == j { 10.0 } else { 0.0 }
    })
}

fn nalgebra_mat(n: usize) -> nalgebra::DMatrix<f64> {
    nalgebra::DMatrix::from_fn(n, n, |i, j| {
        ((i + 1) * (j + 1)) as f64 + if i == j { 10.0 } else { 0.0 }
    })
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul_8x8(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_8x8");

    g.bench_function("linmat", |b| {
        let a = linmat_mat(8);
        let m = linmat_mat(8);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_mat(8);
        let m = nalgebra_mat(8);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// LU solve
// ---------------------------------------------------------------------------

fn lu_solve_8x8(c: &mut Criterion) {
    let mut g = c.benchmark_group("lu_solve_8x8");

    g.bench_function("linmat", |b| {
        let a = linmat_mat(8);
        let rhs = linmat::Vector::from_fn(8, |i| (i + 1) as f64);
        b.iter(|| {
            let lu = std::hint::black_box(&a).lu().unwrap();
            std::hint::black_box(lu.solve(&rhs).unwrap())
        })
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_mat(8);
        let rhs = nalgebra::DVector::from_fn(8, |i, _| (i + 1) as f64);
        b.iter(|| {
            let lu = std::hint::black_box(a.clone()).lu();
            std::hint::black_box(lu.solve(&rhs).unwrap())
        })
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// QR decomposition
// ---------------------------------------------------------------------------

fn qr_8x8(c: &mut Criterion) {
    let mut g = c.benchmark_group("qr_8x8");

    g.bench_function("linmat", |b| {
        let a = linmat_mat(8);
        b.iter(|| std::hint::black_box(&a).qr().unwrap())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_mat(8);
        b.iter(|| std::hint::black_box(a.clone()).qr())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// SVD
// ---------------------------------------------------------------------------

fn svd_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("svd_6x6");

    g.bench_function("linmat", |b| {
        let a = linmat_mat(6);
        b.iter(|| std::hint::black_box(&a).svd().unwrap())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_mat(6);
        b.iter(|| std::hint::black_box(a.clone()).svd(true, true))
    });

    g.finish();
}

criterion_group!(benches, matmul_8x8, lu_solve_8x8, qr_8x8, svd_6x6);
criterion_main!(benches);
