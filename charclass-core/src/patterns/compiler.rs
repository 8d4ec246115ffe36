//! compiler.rs - Compiles built patterns and caches the result.
//!
//! All constant patterns are compiled once per process. The cache key covers
//! everything that changes the compiled program: source, flags and size limit.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::EngineOptions;
use crate::errors::CharClassError;
use crate::patterns::builder::PatternFlags;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PatternKey {
    source: String,
    flags: PatternFlags,
    size_limit: usize,
}

lazy_static! {
    /// A thread-safe, global cache of compiled patterns.
    static ref COMPILED_PATTERN_CACHE: RwLock<HashMap<PatternKey, Arc<Regex>>> = RwLock::new(HashMap::new());
}

/// Compiles `source` without consulting the cache.
pub fn compile_pattern(source: &str, flags: PatternFlags, size_limit: usize) -> Result<Regex, CharClassError> {
    debug!("Compiling pattern '{}' (case_insensitive: {}).", source, flags.case_insensitive);
    RegexBuilder::new(source)
        .unicode(true)
        .case_insensitive(flags.case_insensitive)
        .size_limit(size_limit)
        .build()
        .map_err(|e| CharClassError::PatternCompilation(source.to_string(), e))
}

/// Gets a compiled pattern from the cache, compiling and storing it if missing.
/// With `cache_patterns` off every call compiles afresh.
pub fn get_or_compile(
    source: &str,
    flags: PatternFlags,
    options: &EngineOptions,
) -> Result<Arc<Regex>, CharClassError> {
    if !options.cache_patterns {
        return compile_pattern(source, flags, options.size_limit).map(Arc::new);
    }

    let key = PatternKey {
        source: source.to_string(),
        flags,
        size_limit: options.size_limit,
    };

    {
        let cache = COMPILED_PATTERN_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(regex) = cache.get(&key) {
            debug!("Serving compiled pattern from cache: '{}'", source);
            return Ok(Arc::clone(regex));
        }
    }

    let compiled = Arc::new(compile_pattern(source, flags, options.size_limit)?);
    let mut cache = COMPILED_PATTERN_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have won the race; keep whichever landed first.
    let entry = cache.entry(key).or_insert(compiled);
    Ok(Arc::clone(entry))
}

/// Number of compiled patterns currently cached.
pub fn cached_pattern_count() -> usize {
    COMPILED_PATTERN_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}
