//! Output formatting for one-shot queries and index statistics

use crate::index::{IndexStats, WordList};
use crate::query::match_count;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a ranked result in the same shape as the interactive screen:
/// `found: <n>` followed by `<word> <frequency>` lines.
pub fn print_matches(
    words: Option<&WordList>,
    limit: Option<usize>,
    choice: ColorChoice,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_matches(&mut stdout, words, limit)
}

pub fn write_matches<W: WriteColor>(
    out: &mut W,
    words: Option<&WordList>,
    limit: Option<usize>,
) -> io::Result<()> {
    writeln!(out, "found: {}", match_count(words))?;

    let words = words.map(Vec::as_slice).unwrap_or_default();
    let shown = limit.unwrap_or(words.len()).min(words.len());

    for word in &words[..shown] {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "{}", word.text)?;
        out.reset()?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, " {}", word.frequency)?;
        out.reset()?;
    }

    Ok(())
}

/// Print a ranked result as a JSON array
pub fn print_json(words: Option<&WordList>, limit: Option<usize>) -> anyhow::Result<()> {
    let words = words.map(Vec::as_slice).unwrap_or_default();
    let shown = limit.unwrap_or(words.len()).min(words.len());

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, &words[..shown])?;
    writeln!(lock)?;
    Ok(())
}

pub fn print_stats(stats: &IndexStats) {
    println!("Index Statistics");
    println!("================");
    println!();
    println!("Bytes read:       {}", stats.bytes_read);
    println!("Tokens:           {}", stats.total_tokens);
    println!("Distinct words:   {}", stats.distinct_words);
    println!("Trie nodes:       {}", stats.nodes);
    println!("Skipped tokens:   {}", stats.skipped_tokens);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Word;
    use termcolor::NoColor;

    fn render(words: Option<&WordList>, limit: Option<usize>) -> String {
        let mut out = NoColor::new(Vec::new());
        write_matches(&mut out, words, limit).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_write_matches() {
        let words = vec![Word::new("the", 3), Word::new("then", 1)];
        assert_eq!(render(Some(&words), None), "found: 2\nthe 3\nthen 1\n");
    }

    #[test]
    fn test_limit_keeps_total() {
        let words = vec![Word::new("the", 3), Word::new("then", 1)];
        assert_eq!(render(Some(&words), Some(1)), "found: 2\nthe 3\n");
    }

    #[test]
    fn test_empty_result() {
        assert_eq!(render(None, Some(5)), "found: 0\n");
    }
}
