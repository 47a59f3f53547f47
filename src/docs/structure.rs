//! Repository descriptor served at `/api/structure`.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// Fixed description of the template repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryStructure {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

impl RepositoryStructure {
    pub const TEMPLATE: RepositoryStructure = RepositoryStructure {
        name: "ats-teamified",
        kind: "template",
        description: "Repository template for development environment setup",
    };

    /// Single-line JSON with `": "` and `", "` separators.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, SpacedFormatter);
        self.serialize(&mut serializer)?;
        // serde_json only emits valid UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// Compact output with a space after every `:` and `,`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_body_is_exact() {
        assert_eq!(
            RepositoryStructure::TEMPLATE.to_json().unwrap(),
            r#"{"name": "ats-teamified", "type": "template", "description": "Repository template for development environment setup"}"#
        );
    }

    #[test]
    fn formatter_spaces_nested_values() {
        let value = serde_json::json!({"a": [1, 2], "b": {"c": null}});
        let mut out = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut out, SpacedFormatter);
        value.serialize(&mut ser).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"a": [1, 2], "b": {"c": null}}"#
        );
    }
}
