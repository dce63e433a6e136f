//! Walks through the vector's operations; run with `RUST_LOG=rankvec=debug`
//! to see reallocations and sort dispatch.

use rankvec::{SortStrategy, Vector, VectorConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> rankvec::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();

    println!("=== Rank mutation ===");
    let mut v = Vector::new();
    for (r, x) in [1, 3, 5, 7, 9].into_iter().enumerate() {
        v.insert(r, x)?;
    }
    println!("search(5) = {:?}", v.search(&5));
    v.insert(2, 4)?;
    println!("after insert(2, 4): {:?}", v.as_slice());
    let removed = v.remove_range(0, 2)?;
    println!("remove_range(0, 2) removed {removed}: {:?}", v.as_slice());

    println!("\n=== Sort strategies ===");
    let mut w = Vector::from_slice(&[31, 4, 15, 9, 26, 5, 35, 8, 97, 9])
        .configured(VectorConfig::seeded(7).with_strategy(SortStrategy::Random));
    for _ in 0..6 {
        w.unsort();
        let ran = w.sort();
        println!("{:<10} -> {:?}", ran, w.as_slice());
    }

    println!("\n=== Dedup ===");
    let mut d = Vector::from_slice(&[3, 1, 3, 2, 1, 2, 4]);
    println!("deduplicate removed {} -> {:?}", d.deduplicate(), d.as_slice());
    let mut u = Vector::from_slice(&[1, 1, 2, 2, 2, 3, 5, 5]);
    println!("uniquify removed {} -> {:?}", u.uniquify(), u.as_slice());

    println!("\n=== Capacity ===");
    let mut c = Vector::new();
    for i in 0..100 {
        c.push(i);
    }
    println!("after 100 pushes: size {} capacity {}", c.size(), c.capacity());
    c.remove_range(0, 95)?;
    println!("after removing 95: size {} capacity {}", c.size(), c.capacity());
    Ok(())
}
