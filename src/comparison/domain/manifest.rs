use serde_json::Value;

/// A package manifest snapshot (e.g. the contents of a `package.json`)
///
/// The manifest is only inspected field by field. A dependency field is
/// usable when it is a non-empty object; anything else is treated as
/// "no dependencies under this key".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    root: Value,
}

impl Manifest {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// An empty manifest without any fields
    pub fn empty() -> Self {
        Self {
            root: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Returns the `name -> range` entries declared under `key`, in document order
    ///
    /// Returns `None` when the field is missing, not an object, or empty.
    /// Entries whose value is not a string carry no range and are skipped.
    pub fn dependency_entries<'a>(
        &'a self,
        key: &str,
    ) -> Option<impl Iterator<Item = (&'a str, &'a str)> + 'a> {
        dependency_entries(&self.root, key)
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }
}

/// `name -> range` entries under `key` of a raw manifest document
pub(crate) fn dependency_entries<'a>(
    root: &'a Value,
    key: &str,
) -> Option<impl Iterator<Item = (&'a str, &'a str)> + 'a> {
    let object = root.get(key)?.as_object()?;
    if object.is_empty() {
        return None;
    }
    Some(
        object
            .iter()
            .filter_map(|(name, range)| range.as_str().map(|range| (name.as_str(), range))),
    )
}

impl From<Value> for Manifest {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}
