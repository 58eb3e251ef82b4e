use criterion::{criterion_group, criterion_main, Criterion};
use rl::{DoublePoleBalanceEnv, Env};
use sysinfo::System;

fn bench_balance_tick(c: &mut Criterion) {
    c.bench_function("balance_tick", |b| {
        let mut env = DoublePoleBalanceEnv::new();
        env.reset_with_angle(0.01);
        let mut tick = 0u64;
        b.iter(|| {
            tick += 1;
            let action = f64::from(u8::from(tick % 2 == 0));
            let (_, _, done) = env.step(action);
            if done {
                env.reset_with_angle(0.01);
            }
        });
    });

    // Print hardware stats
    let sys = System::new_all();
    let cpu_brand = sys.cpus().first().map(|c| c.brand()).unwrap_or("unknown");
    let cores = System::physical_core_count().unwrap_or(sys.cpus().len());
    let mem_mb = sys.total_memory() / 1024;
    println!("Hardware: {} with {} cores, {} MB RAM", cpu_brand, cores, mem_mb);
}

criterion_group!(benches, bench_balance_tick);
criterion_main!(benches);
