mod block;
mod config;
mod error;
mod json;
mod parser;

pub use block::{Block, DOCUMENT_VERSION, Document, Inline, ListItem, Paragraph};
pub use config::{Config, InputConfig, OutputConfig};
pub use error::{ConfigError, Error, SchemaError};
pub use json::to_json;
pub use parser::{convert, strip_frontmatter};

/// Convert markdown to a document, applying input preprocessing from config.
pub fn convert_with_config(markdown: &str, config: &Config) -> Document {
    let markdown = if config.input.strip_frontmatter {
        strip_frontmatter(markdown)
    } else {
        markdown
    };
    convert(markdown)
}

/// Convert markdown to document JSON using default config.
pub fn markdown_to_json(markdown: &str) -> Result<String, Error> {
    markdown_to_json_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to document JSON with custom config.
pub fn markdown_to_json_with_config(markdown: &str, config: &Config) -> Result<String, Error> {
    let doc = convert_with_config(markdown, config);
    to_json(&doc, &config.output)
}
