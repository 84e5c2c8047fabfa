use super::{OutputFormat, generate_json, generate_yaml};
use crate::Result;
use crate::cluster::ResourceKind;
use crate::tree::{Attr, AttrMap};
use core::fmt::Write;

const NONE: &str = "<none>";

/// Wrap objects in a `<Kind>List` document shaped like `kubectl get -o json` output.
#[must_use]
pub fn object_list(kind: &ResourceKind, items: &[Attr]) -> Attr {
    let mut list = AttrMap::new();
    let _ = list.insert("apiVersion".to_string(), Attr::from(kind.api_version()));
    let _ = list.insert("kind".to_string(), Attr::from(format!("{}List", kind.kind)));
    let _ = list.insert("metadata".to_string(), Attr::Object(AttrMap::new()));
    let _ = list.insert("items".to_string(), Attr::Array(items.to_vec()));
    Attr::Object(list)
}

/// Render a set of objects of one kind.
pub fn generate_objects<W: Write>(format: OutputFormat, kind: &ResourceKind, items: &[Attr], writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => generate_table(kind, items, writer),
        OutputFormat::Json => generate_json(&object_list(kind, items), writer),
        OutputFormat::Yaml => generate_yaml(&object_list(kind, items), writer),
        OutputFormat::Name => generate_names(kind, items, writer),
    }
}

/// Render a single object.
pub fn generate_object<W: Write>(format: OutputFormat, kind: &ResourceKind, object: &Attr, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => generate_table(kind, core::slice::from_ref(object), writer),
        OutputFormat::Json => generate_json(object, writer),
        OutputFormat::Yaml => generate_yaml(object, writer),
        OutputFormat::Name => generate_names(kind, core::slice::from_ref(object), writer),
    }
}

fn generate_names<W: Write>(kind: &ResourceKind, items: &[Attr], writer: &mut W) -> Result<()> {
    for name in items.iter().filter_map(Attr::name) {
        writeln!(writer, "{}", kind.object_reference(name))?;
    }
    Ok(())
}

fn generate_table<W: Write>(kind: &ResourceKind, items: &[Attr], writer: &mut W) -> Result<()> {
    if items.is_empty() {
        writeln!(writer, "No {} found.", kind.plural)?;
        return Ok(());
    }

    let rows: Vec<Vec<&str>> = items
        .iter()
        .map(|item| {
            let mut row = Vec::with_capacity(3);
            if kind.namespaced {
                row.push(item.namespace().unwrap_or(NONE));
            }
            row.push(item.name().unwrap_or(NONE));
            row.push(item.lookup_str(&["metadata", "creationTimestamp"]).unwrap_or(NONE));
            row
        })
        .collect();

    let headers: &[&str] = if kind.namespaced {
        &["NAMESPACE", "NAME", "CREATED"]
    } else {
        &["NAME", "CREATED"]
    };

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| rows.iter().filter_map(|row| row.get(i)).map(|cell| cell.len()).chain([header.len()]).max().unwrap_or(0))
        .collect();

    write_row(headers, &widths, writer)?;
    for row in &rows {
        write_row(row, &widths, writer)?;
    }

    Ok(())
}

fn write_row<W: Write>(cells: &[&str], widths: &[usize], writer: &mut W) -> Result<()> {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            writeln!(writer, "{cell}")?;
        } else {
            write!(writer, "{cell:<width$}   ")?;
        }
    }
    Ok(())
}
