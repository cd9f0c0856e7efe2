use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::block::Document;
use crate::config::OutputConfig;
use crate::error::Error;

/// Render a document as JSON in the wire shape consumed by document renderers.
pub fn to_json(doc: &Document, output: &OutputConfig) -> Result<String, Error> {
    if !output.pretty {
        return Ok(serde_json::to_string(doc)?);
    }

    let indent = " ".repeat(output.indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
