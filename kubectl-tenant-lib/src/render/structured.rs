use crate::Result;
use core::fmt::Write;
use serde::Serialize;

pub fn generate_json<W: Write, T: Serialize + ?Sized>(value: &T, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub fn generate_yaml<W: Write, T: Serialize + ?Sized>(value: &T, writer: &mut W) -> Result<()> {
    write!(writer, "{}", serde_yaml::to_string(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Attr;
    use serde_json::json;

    #[test]
    fn test_json_is_pretty_and_terminated() {
        let value = Attr::from(json!({ "b": 1, "a": [true] }));
        let mut s = String::new();
        generate_json(&value, &mut s).unwrap();
        assert_eq!(s, "{\n  \"a\": [\n    true\n  ],\n  \"b\": 1\n}\n");
    }

    #[test]
    fn test_yaml() {
        let value = Attr::from(json!({ "quota": "small", "allowed": ["gp2"] }));
        let mut s = String::new();
        generate_yaml(&value, &mut s).unwrap();
        assert_eq!(s, "allowed:\n- gp2\nquota: small\n");
    }
}
