use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub deck: String,
    pub model: String,
    pub front_template: String,
    pub back_template: String,
}

impl CardTemplate {
    /// Term on the front, rendered definitions on the back
    pub fn new(deck: String, model: String) -> Self {
        Self {
            deck,
            model,
            front_template: "{term}".to_string(),
            back_template: "{definition}".to_string(),
        }
    }

    pub fn format_front(&self, term: &str, definition: &str) -> String {
        Self::fill(&self.front_template, term, definition)
    }

    pub fn format_back(&self, term: &str, definition: &str) -> String {
        Self::fill(&self.back_template, term, definition)
    }

    fn fill(template: &str, term: &str, definition: &str) -> String {
        // definition last so placeholders inside the looked-up HTML stay literal
        template
            .replace("{term}", term)
            .replace("{definition}", definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let template = CardTemplate::new("Japanese".to_string(), "Basic".to_string());
        let html = "<div><b>猫(ねこ):</b> 食肉目ネコ科の哺乳類。\n</div>";
        assert_eq!(template.format_front("猫", html), "猫");
        assert_eq!(template.format_back("猫", html), html);
    }

    #[test]
    fn test_custom_template_mixes_placeholders() {
        let template = CardTemplate {
            deck: "d".to_string(),
            model: "m".to_string(),
            front_template: "<h1>{term}</h1>".to_string(),
            back_template: "{term}<hr>{definition}".to_string(),
        };
        assert_eq!(template.format_front("行く", "x"), "<h1>行く</h1>");
        assert_eq!(template.format_back("行く", "x"), "行く<hr>x");
    }
}
