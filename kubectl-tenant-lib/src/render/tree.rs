use crate::Result;
use crate::tree::Attr;
use core::fmt::Write;

/// Render `attr` as indented `key: value` lines, two spaces per level.
///
/// Objects print `key:` followed by their children; lists print `- item`
/// entries, with object items introduced by a lone `-`. A bare scalar prints
/// on its own line.
pub fn generate_tree<W: Write>(attr: &Attr, indent: usize, writer: &mut W) -> Result<()> {
    let pad = " ".repeat(indent);

    match attr {
        Attr::Object(map) => {
            for (key, value) in map {
                if let Some(text) = value.scalar_text() {
                    writeln!(writer, "{pad}{key}: {text}")?;
                } else {
                    writeln!(writer, "{pad}{key}:")?;
                    generate_tree(value, indent + 2, writer)?;
                }
            }
        }

        Attr::Array(items) => {
            for item in items {
                if let Some(text) = item.scalar_text() {
                    writeln!(writer, "{pad}- {text}")?;
                } else {
                    writeln!(writer, "{pad}-")?;
                    generate_tree(item, indent + 2, writer)?;
                }
            }
        }

        scalar => {
            if let Some(text) = scalar.scalar_text() {
                writeln!(writer, "{pad}{text}")?;
            }
        }
    }

    Ok(())
}
