/// Splits a byte stream into lowercase ASCII-letter tokens.
///
/// A token is a maximal run of `A-Z`/`a-z`; every other byte (whitespace,
/// punctuation, digits, non-ASCII) ends the current run. Input may arrive in
/// arbitrary chunks: a run spanning two chunks is emitted once, whole.
///
/// Runs longer than `max_len` are rejected whole. The internal buffer never
/// grows past `max_len`.
#[derive(Debug)]
pub struct Tokenizer {
    buf: Vec<u8>,
    max_len: usize,
    overlong: bool,
    skipped: u64,
}

impl Tokenizer {
    pub fn new(max_len: usize) -> Self {
        Self {
            buf: Vec::with_capacity(max_len),
            max_len,
            overlong: false,
            skipped: 0,
        }
    }

    /// Feed one chunk, calling `emit` for every token completed inside it
    pub fn feed(&mut self, chunk: &[u8], mut emit: impl FnMut(&[u8])) {
        for &byte in chunk {
            if byte.is_ascii_alphabetic() {
                if self.buf.len() < self.max_len {
                    self.buf.push(byte.to_ascii_lowercase());
                } else {
                    self.overlong = true;
                }
            } else {
                self.flush(&mut emit);
            }
        }
    }

    /// End of stream: emit any pending run
    pub fn finish(&mut self, mut emit: impl FnMut(&[u8])) {
        self.flush(&mut emit);
    }

    /// Number of runs rejected for exceeding `max_len`
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    fn flush(&mut self, emit: &mut impl FnMut(&[u8])) {
        if self.overlong {
            self.skipped += 1;
        } else if !self.buf.is_empty() {
            emit(&self.buf);
        }
        self.buf.clear();
        self.overlong = false;
    }
}

/// Tokenize a complete buffer in one call
pub fn extract_words(content: &[u8], max_len: usize) -> Vec<String> {
    let mut words = Vec::new();
    let mut tokenizer = Tokenizer::new(max_len);
    let mut push = |token: &[u8]| words.push(String::from_utf8_lossy(token).into_owned());

    tokenizer.feed(content, &mut push);
    tokenizer.finish(&mut push);

    words
}
