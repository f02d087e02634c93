mod client;
mod template;

pub use client::AnkiConnectClient;
pub use template::CardTemplate;

use anyhow::Result;

/// Add a card holding a looked-up term and its rendered definitions
pub fn add_card(
    client: &AnkiConnectClient,
    template: &CardTemplate,
    term: &str,
    definition: &str,
) -> Result<u64> {
    let front = template.format_front(term, definition);
    let back = template.format_back(term, definition);

    let note_id = client.add_note(&template.deck, &template.model, &front, &back)?;
    tracing::info!("Added note {} for '{}'", note_id, term);
    Ok(note_id)
}
