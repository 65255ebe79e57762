// file: src/pipeline/aggregator.rs
// description: corpus assembly from page text blocks and image caption blocks
// reference: internal data aggregation

/// Accumulates per-page text blocks and per-image caption blocks into the
/// single corpus string consumed by the summarizer.
///
/// Blocks are kept in insertion order: the caller pushes each page block
/// first, then that page's caption blocks in completion order.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    blocks: Vec<String>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&mut self, title: &str, text: &str) {
        self.blocks
            .push(format!("Page Title: {}\n\nContent:\n{}\n", title, text));
    }

    pub fn push_caption(&mut self, title: &str, caption: &str) {
        self.blocks
            .push(format!("Image '{}' described as: {}", title, caption));
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Join all blocks with blank-line separators.
    pub fn build(self) -> String {
        self.blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_block_format() {
        let mut corpus = CorpusBuilder::new();
        corpus.push_page("Zoom Setup", "Install the client.");

        assert_eq!(
            corpus.build(),
            "Page Title: Zoom Setup\n\nContent:\nInstall the client.\n"
        );
    }

    #[test]
    fn test_caption_block_format() {
        let mut corpus = CorpusBuilder::new();
        corpus.push_caption("login.png", "a screenshot of a login form");

        assert_eq!(
            corpus.build(),
            "Image 'login.png' described as: a screenshot of a login form"
        );
    }

    #[test]
    fn test_blocks_joined_with_blank_lines() {
        let mut corpus = CorpusBuilder::new();
        corpus.push_page("Zoom Setup", "Install the client.");
        corpus.push_caption("login.png", "a screenshot");

        assert_eq!(
            corpus.build(),
            "Page Title: Zoom Setup\n\nContent:\nInstall the client.\n\n\nImage 'login.png' described as: a screenshot"
        );
    }

    #[test]
    fn test_empty_builder_yields_empty_corpus() {
        let corpus = CorpusBuilder::new();
        assert_eq!(corpus.block_count(), 0);
        assert_eq!(corpus.build(), "");
    }
}
