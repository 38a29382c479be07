// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Form values for `application/x-www-form-urlencoded` posts

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Multi-valued form fields. Encoding is sorted by field name so the same
/// logical form always produces the same body (and cache key).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormValues {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to a field
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.entry(name.into()).or_default().push(value.into());
        self
    }

    /// Replace all values of a field
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(name.into(), vec![value.into()]);
        self
    }

    /// First value of a field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Remove a field
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.fields.remove(name)
    }

    /// Check if the form has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Percent-encode the form
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, values) in &self.fields {
            for value in values {
                serializer.append_pair(name, value);
            }
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormValues::new();
        for (name, value) in iter {
            form.add(name, value);
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sorted_and_escaped() {
        let form: FormValues = [
            ("target", "http://golang.org"),
            ("ac", "http"),
            ("task_from", "self"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            form.encode(),
            "ac=http&target=http%3A%2F%2Fgolang.org&task_from=self"
        );
    }

    #[test]
    fn test_multi_values_keep_insertion_order() {
        let mut form = FormValues::new();
        form.add("tag", "b").add("tag", "a").add("q", "x y");
        assert_eq!(form.encode(), "q=x+y&tag=b&tag=a");
        assert_eq!(form.get("tag"), Some("b"));

        form.set("tag", "c");
        assert_eq!(form.encode(), "q=x+y&tag=c");
    }

    #[test]
    fn test_empty_form() {
        assert_eq!(FormValues::new().encode(), "");
        assert!(FormValues::new().is_empty());
    }
}
