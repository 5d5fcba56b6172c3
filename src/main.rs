//! LRU Buffer Cache demo driver
//!
//! Fills a cache with sequentially keyed buffers and walks it through
//! access, removal and eviction, dumping the recency order after each stage.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_buffer_cache::{Buffer, BufferHandle, Config, IndexedCache, Key};

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_buffer_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    config.validate().context("invalid demo configuration")?;
    info!(
        "Configuration loaded: max_buffers={}, evict_target={}, prefix={:?}",
        config.max_buffers, config.evict_target, config.buffer_prefix
    );

    let mut cache: IndexedCache<BufferHandle> = IndexedCache::new();
    for key in 1..=config.max_buffers as Key {
        let buffer = Buffer::shared(&format!("{}{}", config.buffer_prefix, key));
        cache
            .add(key, buffer)
            .with_context(|| format!("failed to index buffer {}", key))?;
    }
    dump(&cache);

    access(&mut cache, 5);
    dump(&cache);

    cache.remove(4);
    access(&mut cache, 4);

    cache.evict(config.evict_target);
    dump(&cache);

    let stats = serde_json::to_string_pretty(&cache.stats())?;
    println!("{}", stats);
    Ok(())
}

/// Accesses a key, reporting a miss on stdout.
fn access(cache: &mut IndexedCache<BufferHandle>, key: Key) {
    if let Err(err) = cache.access(key) {
        println!("{}", err);
    }
}

/// Prints the recency order followed by a blank separator.
fn dump(cache: &IndexedCache<BufferHandle>) {
    print!("{}", cache);
    println!();
    println!();
}
