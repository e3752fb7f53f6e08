/// Attribute names for the `individual` record type, in schema order. Shared
/// between record-key building and entity seeding so both iterate the exact
/// same set.
pub const INDIVIDUAL_ATTRS: [&str; 6] = [
    "prefix",
    "first_name",
    "middle_name",
    "last_name",
    "suffix",
    "birth_date",
];

/// An immutable input record for the `individual` entity type. Only `id` and
/// the normalized attributes survive past `Resolve` — the raw record is
/// never stored.
#[derive(Debug, Clone)]
pub struct Individual {
    pub id: String,
    pub prefix: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,
    pub birth_date: Option<String>,
}

impl Individual {
    /// Returns the raw (un-normalized) value of a named attribute, or `None`
    /// if the attribute name is unknown or the value absent. Re-expresses
    /// the source's field reflection as an explicit match over the declared
    /// schema (no runtime reflection).
    pub fn attr(&self, name: &str) -> Option<&str> {
        match name {
            "prefix" => self.prefix.as_deref(),
            "first_name" => self.first_name.as_deref(),
            "middle_name" => self.middle_name.as_deref(),
            "last_name" => self.last_name.as_deref(),
            "suffix" => self.suffix.as_deref(),
            "birth_date" => self.birth_date.as_deref(),
            _ => None,
        }
    }

    /// Iterates over every declared attribute name paired with its raw value.
    pub fn attrs(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        INDIVIDUAL_ATTRS.iter().map(move |name| (*name, self.attr(name)))
    }
}
