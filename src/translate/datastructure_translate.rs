//! Data Structure Translation
//!
//! Array and dictionary declarations.
//!
//! ```text
//! int a[10];                          →  a = [0] * 10
//! dyn a[2] = {1,"S"};                 →  a = [1, "S"]
//! dict d<string,int>[3] = {"x":1};    →  d = {"x": 1}
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::dialect::{python_bool, TypeKeyword, TYPE_ALTERNATION};
use crate::helpers::split_top_level;
use crate::translate::expression_translate::normalize_value;

static ARRAY_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({TYPE_ALTERNATION})\s+(\w+)\[(\w+)\](\s*=\s*\{{([^}}]*)\}})?$"
    ))
    .expect("valid regex")
});

static DICT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^dict\s+(\w+)\s*<\s*(\w+)\s*,\s*(\w+)\s*>\s*\[(\w+)\](\s*=\s*\{([^}]*)\})?$")
        .expect("valid regex")
});

pub fn translate_array(line: &str) -> Option<String> {
    let caps = ARRAY_DECL.captures(line)?;
    let elem_type = TypeKeyword::parse(&caps[1])?;
    let name = &caps[2];
    let size = &caps[3];

    // Group 5 participates whenever an initializer is present, even `{}`
    let rendered = match caps.get(5) {
        Some(values) => render_array_values(values.as_str(), elem_type),
        None if elem_type == TypeKeyword::Dyn => "[]".to_string(),
        None => format!("[{}] * {}", elem_type.default_value(), size),
    };

    Some(format!("{} = {}", name, rendered))
}

fn render_array_values(values: &str, elem_type: TypeKeyword) -> String {
    let items: Vec<String> = split_top_level(values)
        .into_iter()
        .map(|item| convert_element(&item, elem_type))
        .collect();
    format!("[{}]", items.join(", "))
}

fn convert_element(item: &str, elem_type: TypeKeyword) -> String {
    match elem_type {
        TypeKeyword::Str => {
            if item.len() >= 2 && item.starts_with('"') && item.ends_with('"') {
                item.to_string()
            } else {
                format!("\"{}\"", item)
            }
        }
        TypeKeyword::Bool => python_bool(item).map(str::to_string).unwrap_or_else(|| item.to_string()),
        TypeKeyword::Int | TypeKeyword::Float | TypeKeyword::Char | TypeKeyword::Dyn => {
            normalize_value(item)
        }
    }
}

pub fn translate_dictionary(line: &str) -> Option<String> {
    let caps = DICT_DECL.captures(line)?;
    let name = &caps[1];

    let rendered = match caps.get(6) {
        Some(pairs) => render_dict_pairs(pairs.as_str()),
        None => "{}".to_string(),
    };

    Some(format!("{} = {}", name, rendered))
}

fn render_dict_pairs(pairs: &str) -> String {
    let mut entries: Vec<(String, String)> = Vec::new();

    for part in split_top_level(pairs) {
        // Only the first colon separates key from value
        let Some((key, value)) = part.split_once(':') else {
            continue;
        };
        let key = normalize_value(key);
        let value = normalize_value(value);

        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }

    let body: Vec<String> = entries
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect();
    format!("{{{}}}", body.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Try array then dictionary
    fn translate_datastructure(line: &str) -> Option<String> {
        translate_array(line).or_else(|| translate_dictionary(line))
    }

    #[test]
    fn test_typed_array_without_initializer() {
        assert_eq!(translate_array("int a[10]"), Some("a = [0] * 10".to_string()));
        assert_eq!(translate_array("float f[n]"), Some("f = [0.0] * n".to_string()));
        assert_eq!(translate_array("bool flags[3]"), Some("flags = [False] * 3".to_string()));
        assert_eq!(translate_array("char c[2]"), Some("c = [''] * 2".to_string()));
        assert_eq!(translate_array("string s[4]"), Some("s = [\"\"] * 4".to_string()));
    }

    #[test]
    fn test_dyn_array_without_initializer_is_empty() {
        assert_eq!(translate_array("dyn a[5]"), Some("a = []".to_string()));
    }

    #[test]
    fn test_empty_initializer() {
        assert_eq!(translate_array("int a[3] = {}"), Some("a = []".to_string()));
        assert_eq!(translate_array("string a[3] = {  }"), Some("a = []".to_string()));
    }

    #[test]
    fn test_dyn_array_values() {
        assert_eq!(translate_array(r#"dyn a[2] = {1,"S"}"#), Some(r#"a = [1, "S"]"#.to_string()));
        assert_eq!(
            translate_array(r#"dyn mix[3] = {true, "a,b", x}"#),
            Some(r#"mix = [True, "a,b", x]"#.to_string())
        );
    }

    #[test]
    fn test_string_array_forces_quotes() {
        assert_eq!(
            translate_array(r#"string names[2] = {bob, "amy"}"#),
            Some(r#"names = ["bob", "amy"]"#.to_string())
        );
    }

    #[test]
    fn test_bool_array() {
        assert_eq!(
            translate_array("bool b[3] = {TRUE, false, x}"),
            Some("b = [True, False, x]".to_string())
        );
    }

    #[test]
    fn test_dictionary_preserves_order() {
        assert_eq!(
            translate_dictionary(r#"dict d<string,int>[3] = {"x":1, "y":2}"#),
            Some(r#"d = {"x": 1, "y": 2}"#.to_string())
        );
    }

    #[test]
    fn test_dictionary_without_initializer() {
        assert_eq!(translate_dictionary("dict d<int, string>[10]"), Some("d = {}".to_string()));
        assert_eq!(translate_dictionary("dict d<int,int>[n] = {}"), Some("d = {}".to_string()));
    }

    #[test]
    fn test_dictionary_value_keeps_later_colons() {
        assert_eq!(
            translate_dictionary(r#"dict t<string,string>[1] = {"at":"12:30"}"#),
            Some(r#"t = {"at": "12:30"}"#.to_string())
        );
    }

    #[test]
    fn test_dictionary_duplicate_key_keeps_first_position() {
        assert_eq!(
            translate_dictionary("dict d<int,bool>[3] = {1:true, 2:false, 1:false}"),
            Some("d = {1: False, 2: False}".to_string())
        );
    }

    #[test]
    fn test_not_a_datastructure() {
        assert_eq!(translate_datastructure("int a = 5"), None);
        assert_eq!(translate_datastructure("a[0] = 5"), None);
    }
}
