use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use goo_dictionary::{DictionaryEntry, GooDictionary, PageFetcher};

/// Picks one of several entries found for a term
pub trait EntryChooser {
    /// Index into `entries`, or `None` to skip the term
    fn choose(&mut self, term: &str, entries: &[DictionaryEntry]) -> Result<Option<usize>>;
}

/// Always takes the first hit
pub struct FirstEntry;

impl EntryChooser for FirstEntry {
    fn choose(&mut self, _term: &str, entries: &[DictionaryEntry]) -> Result<Option<usize>> {
        Ok((!entries.is_empty()).then_some(0))
    }
}

/// Lists the hits and reads a 1-based choice; blank or 0 skips
pub struct PromptChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> EntryChooser for PromptChooser<R, W> {
    fn choose(&mut self, term: &str, entries: &[DictionaryEntry]) -> Result<Option<usize>> {
        writeln!(self.output, "「{term}」: {} entries", entries.len())?;
        for (i, entry) in entries.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", i + 1, entry)?;
        }

        loop {
            write!(self.output, "choose 1-{} (blank to skip): ", entries.len())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).context("Failed to read choice")? == 0 {
                return Ok(None);
            }

            match line.trim().parse::<usize>() {
                _ if line.trim().is_empty() => return Ok(None),
                Ok(0) => return Ok(None),
                Ok(n) if n <= entries.len() => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "not a choice: {}", line.trim())?,
            }
        }
    }
}

/// Entries picked while filling one field; dropped once rendered
pub struct LookupSession<'d, F: PageFetcher> {
    dictionary: &'d GooDictionary<F>,
    chosen: Vec<DictionaryEntry>,
}

impl<'d, F: PageFetcher> LookupSession<'d, F> {
    pub fn new(dictionary: &'d GooDictionary<F>) -> Self {
        Self {
            dictionary,
            chosen: Vec::new(),
        }
    }

    /// Search `term` and keep the single hit, or the one the chooser picks
    pub fn look_up(&mut self, term: &str, chooser: &mut dyn EntryChooser) -> Result<()> {
        let mut entries = self.dictionary.search(term)?;

        let picked = match entries.len() {
            0 => {
                tracing::warn!("No entries listed for '{}'", term);
                None
            }
            1 => Some(0),
            _ => chooser
                .choose(term, &entries)?
                .filter(|&index| index < entries.len()),
        };

        if let Some(index) = picked {
            self.chosen.push(entries.swap_remove(index));
        }
        Ok(())
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.chosen
    }

    /// Aggregated HTML for every chosen entry, in lookup order
    pub fn render(self) -> Result<String> {
        Ok(self.dictionary.render(&self.chosen)?)
    }
}
