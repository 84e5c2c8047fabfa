use super::{ExtractedNames, LOG_TARGET};
use crate::tree::{Attr, AttrKind, AttrMap, FieldError, format_path};

/// Read a list of plain strings at `path`.
///
/// Returns an empty set when the path is missing, when it does not end on a
/// list, or when any element of the list is not a string.
#[must_use]
pub fn extract_string_list(tree: &Attr, path: &[&str]) -> ExtractedNames {
    let items = match tree.lookup_array(path) {
        Ok(items) => items,
        Err(e) => {
            log_degraded(&e);
            return ExtractedNames::new();
        }
    };

    let strings: Option<Vec<&str>> = items.iter().map(Attr::as_str).collect();
    strings.map_or_else(
        || {
            log::debug!(target: LOG_TARGET, "{} contains non-string entries, ignoring it", format_path(path));
            ExtractedNames::new()
        },
        |strings| strings.into_iter().collect(),
    )
}

/// Read a single string at `path` without trimming it.
///
/// `Ok(None)` means the field is not set; a value of another kind is reported
/// as [`FieldError::WrongShape`].
pub fn extract_single_string(tree: &Attr, path: &[&str]) -> Result<Option<String>, FieldError> {
    match tree.lookup_str(path) {
        Ok(s) => Ok(Some(s.to_string())),
        Err(e) if e.is_absent() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Read the `name_key` field of every record in the list at `path`.
///
/// Records that are not objects, and records whose name is missing or not a
/// string, are skipped. A capitalised key (`Name` for `name`) is accepted when
/// the exact key is missing.
#[must_use]
pub fn extract_names_from_object_list(tree: &Attr, path: &[&str], name_key: &str) -> ExtractedNames {
    let items = match tree.lookup_array(path) {
        Ok(items) => items,
        Err(e) => {
            log_degraded(&e);
            return ExtractedNames::new();
        }
    };

    let capitalised = capitalise(name_key);
    items
        .iter()
        .filter_map(Attr::as_object)
        .filter_map(|record| record.get(name_key).or_else(|| record.get(&capitalised)))
        .filter_map(Attr::as_str)
        .collect()
}

/// Read an object at `path`.
///
/// `Ok(None)` means the field is not set; a value of another kind is reported
/// as [`FieldError::WrongShape`].
pub fn extract_map<'a>(tree: &'a Attr, path: &[&str]) -> Result<Option<&'a AttrMap>, FieldError> {
    match tree.lookup(path) {
        Ok(Attr::Object(map)) => Ok(Some(map)),
        Ok(other) => Err(FieldError::wrong_shape(path, AttrKind::Object, other.kind())),
        Err(e) if e.is_absent() => Ok(None),
        Err(e) => Err(e),
    }
}

fn log_degraded(error: &FieldError) {
    if error.is_absent() {
        log::debug!(target: LOG_TARGET, "{error}, nothing to extract");
    } else {
        log::warn!(target: LOG_TARGET, "{error}, treating it as empty");
    }
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> Attr {
        Attr::from(value)
    }

    #[test]
    fn test_string_list_sorted_and_deduped() {
        let t = tree(json!({ "spec": { "ingressClasses": { "allowed": ["nginx", " traefik", "nginx", "haproxy"] } } }));
        let names = extract_string_list(&t, &["spec", "ingressClasses", "allowed"]);
        assert_eq!(names.as_slice(), ["haproxy", "nginx", "traefik"]);
    }

    #[test]
    fn test_string_list_is_idempotent() {
        let t = tree(json!({ "spec": { "imageRegistries": { "allowed": ["quay.io", "docker.io", "quay.io"] } } }));
        let first = extract_string_list(&t, &["spec", "imageRegistries", "allowed"]);
        let second = extract_string_list(&t, &["spec", "imageRegistries", "allowed"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_string_list_only_blank_entries() {
        let t = tree(json!({ "spec": { "serviceAccounts": { "denied": ["", "  ", "\n"] } } }));
        assert!(extract_string_list(&t, &["spec", "serviceAccounts", "denied"]).is_empty());
    }

    #[test]
    fn test_string_list_missing_path() {
        let t = tree(json!({ "spec": {} }));
        assert!(extract_string_list(&t, &["spec", "ingressClasses", "allowed"]).is_empty());
    }

    #[test]
    fn test_string_list_intermediate_not_a_map() {
        let t = tree(json!({ "spec": { "ingressClasses": "nginx" } }));
        assert!(extract_string_list(&t, &["spec", "ingressClasses", "allowed"]).is_empty());
    }

    #[test]
    fn test_string_list_final_value_not_a_list() {
        let t = tree(json!({ "spec": { "ingressClasses": { "allowed": "nginx" } } }));
        assert!(extract_string_list(&t, &["spec", "ingressClasses", "allowed"]).is_empty());
    }

    #[test]
    fn test_string_list_mixed_element_kinds() {
        let t = tree(json!({ "spec": { "ingressClasses": { "allowed": ["nginx", 3] } } }));
        assert!(extract_string_list(&t, &["spec", "ingressClasses", "allowed"]).is_empty());
    }

    #[test]
    fn test_single_string_found_is_not_trimmed() {
        let t = tree(json!({ "spec": { "quota": " small " } }));
        assert_eq!(extract_single_string(&t, &["spec", "quota"]), Ok(Some(" small ".to_string())));
    }

    #[test]
    fn test_single_string_absent() {
        let t = tree(json!({ "spec": {} }));
        assert_eq!(extract_single_string(&t, &["spec", "quota"]), Ok(None));
    }

    #[test]
    fn test_single_string_wrong_shape() {
        let t = tree(json!({ "spec": { "quota": { "name": "small" } } }));
        let err = extract_single_string(&t, &["spec", "quota"]).unwrap_err();
        assert!(matches!(err, FieldError::WrongShape { found: AttrKind::Object, .. }));
    }

    #[test]
    fn test_object_list_names() {
        let t = tree(json!({
            "status": { "storageClasses": { "available": [{ "name": "gp2" }, { "name": "ssd" }, { "name": "gp2" }] } }
        }));
        let names = extract_names_from_object_list(&t, &["status", "storageClasses", "available"], "name");
        assert_eq!(names.as_slice(), ["gp2", "ssd"]);
    }

    #[test]
    fn test_object_list_skips_malformed_records() {
        let t = tree(json!({
            "status": { "storageClasses": { "available": [
                "bare-string",
                { "name": 42 },
                { "other": "x" },
                { "name": "  " },
                { "Name": "standard" },
                { "name": " fast " }
            ] } }
        }));
        let names = extract_names_from_object_list(&t, &["status", "storageClasses", "available"], "name");
        assert_eq!(names.as_slice(), ["fast", "standard"]);
    }

    #[test]
    fn test_object_list_missing() {
        let t = tree(json!({ "status": {} }));
        assert!(extract_names_from_object_list(&t, &["status", "storageClasses", "available"], "name").is_empty());
    }

    #[test]
    fn test_extract_map() {
        let t = tree(json!({ "spec": { "hibernation": { "sleepSchedule": "0 20 * * *" }, "quota": "small" } }));
        let map = extract_map(&t, &["spec", "hibernation"]).unwrap().unwrap();
        assert_eq!(map.get("sleepSchedule").and_then(Attr::as_str), Some("0 20 * * *"));
        assert_eq!(extract_map(&t, &["spec", "accessControl"]), Ok(None));
        assert!(extract_map(&t, &["spec", "quota"]).is_err());
    }

    #[test]
    fn test_capitalise() {
        assert_eq!(capitalise("name"), "Name");
        assert_eq!(capitalise(""), "");
    }
}
