use twindex::errors::InsertError;

/// A naive, inefficient bidirectional map that acts as an oracle for
/// property-based tests.
///
/// Pairs are stored in insertion order without indexes, and lookups are
/// linear scans returning the first match -- which is exactly the
/// duplicate policy the real map guarantees.
#[derive(Debug, Default)]
pub struct NaiveBiMap {
    items: Vec<(u8, char)>,
    dehydrated: bool,
}

impl NaiveBiMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert(
        &mut self,
        key: u8,
        value: char,
    ) -> Result<(), InsertError<u8, char>> {
        if self.dehydrated {
            return Err(InsertError::__internal_new(key, value));
        }
        self.items.push((key, value));
        Ok(())
    }

    /// Linear-scan lookup by key. Like the real map, any lookup freezes
    /// the oracle.
    pub fn find_value(&mut self, key: u8) -> Option<char> {
        self.dehydrated = true;
        self.items.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Linear-scan lookup by value.
    pub fn find_key(&mut self, value: char) -> Option<u8> {
        self.dehydrated = true;
        self.items.iter().find(|(_, v)| *v == value).map(|(k, _)| *k)
    }

    pub fn dehydrate(&mut self) {
        self.dehydrated = true;
    }

    pub fn hydrate(&mut self) {
        self.dehydrated = false;
    }

    pub fn is_dehydrated(&self) -> bool {
        self.dehydrated
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.dehydrated = false;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u8, &char)> {
        self.items.iter().map(|(k, v)| (k, v))
    }
}
