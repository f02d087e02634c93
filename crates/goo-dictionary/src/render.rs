use crate::entry::DictionaryEntry;
use crate::error::DictionaryError;
use crate::fetcher::PageFetcher;

/// One `<div><b>WORD:</b> DEFINITION</div>` per entry, in order, with
/// truncated definitions expanded
pub fn render_definitions<F>(
    entries: &[DictionaryEntry],
    fetcher: &F,
) -> Result<String, DictionaryError>
where
    F: PageFetcher + ?Sized,
{
    let mut output = String::new();
    for entry in entries {
        let definition = entry.full_definition(fetcher)?;
        output.push_str(&format!("<div><b>{}:</b> {}</div>", entry.word(), definition));
    }
    Ok(output)
}
