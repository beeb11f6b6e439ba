use crate::index::trie::Trie;
use crate::index::types::{IndexConfig, IndexStats};
use crate::utils::{ProgressBar, ProgressStyle, Tokenizer};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info};

/// Corpus bytes consumed per read
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Build an index from any byte stream
pub fn build_index<R: Read>(reader: R, config: &IndexConfig) -> Result<(Trie, IndexStats)> {
    build_index_with_progress(reader, config, &ProgressBar::hidden())
}

/// Build an index, advancing `progress` by the number of bytes consumed
pub fn build_index_with_progress<R: Read>(
    mut reader: R,
    config: &IndexConfig,
    progress: &ProgressBar,
) -> Result<(Trie, IndexStats)> {
    let mut trie = Trie::new();
    let mut tokenizer = Tokenizer::new(config.max_word_len);
    let mut chunk = vec![0u8; READ_CHUNK_SIZE];
    let mut bytes_read = 0u64;

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("Failed to read corpus"),
        };

        tokenizer.feed(&chunk[..n], |word| trie.insert(word));
        bytes_read += n as u64;
        progress.inc(n as u64);
    }
    tokenizer.finish(|word| trie.insert(word));

    let stats = IndexStats {
        nodes: trie.node_count(),
        distinct_words: trie.distinct_words(),
        total_tokens: trie.total_tokens(),
        skipped_tokens: tokenizer.skipped(),
        bytes_read,
    };

    if stats.skipped_tokens > 0 {
        debug!(
            skipped = stats.skipped_tokens,
            max_word_len = config.max_word_len,
            "Rejected overlong tokens"
        );
    }

    Ok((trie, stats))
}

/// Load and index a corpus file.
///
/// Failure to open or read the file is fatal for the caller; nothing is
/// retried.
pub fn load_corpus(path: &Path, config: &IndexConfig, silent: bool) -> Result<(Trie, IndexStats)> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open corpus {}", path.display()))?;
    let len = file.metadata().map(|m| m.len()).unwrap_or(0);

    let progress = if silent {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(len);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar.set_message("Loading corpus");
        bar
    };

    let result = build_index_with_progress(file, config, &progress)
        .with_context(|| format!("Failed to index corpus {}", path.display()));
    progress.finish_and_clear();

    let (trie, stats) = result?;
    info!(
        path = %path.display(),
        bytes = stats.bytes_read,
        words = stats.distinct_words,
        tokens = stats.total_tokens,
        nodes = stats.nodes,
        "Corpus indexed"
    );

    Ok((trie, stats))
}
