use std::collections::HashMap;

/// Common view over parsed records, used by the stats layer.
pub trait SequenceRecord {
    fn id(&self) -> &str;

    fn sequence(&self) -> &[u8];

    /// Per-base quality string, if the format carries one.
    fn quality(&self) -> Option<&[u8]> {
        None
    }

    fn len(&self) -> usize {
        self.sequence().len()
    }

    fn is_empty(&self) -> bool {
        self.sequence().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: String,
    pub sequence: Vec<u8>,
    pub quality: Vec<u8>,
}

impl SequenceRecord for FastaRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn sequence(&self) -> &[u8] {
        &self.sequence
    }
}

impl SequenceRecord for FastqRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    fn quality(&self) -> Option<&[u8]> {
        Some(&self.quality)
    }
}

/// Collapses records sharing an identifier the way an identifier-keyed map
/// would: each identifier keeps the slot of its first occurrence and the
/// contents of its last.
pub fn last_write_wins<R, I>(records: I) -> Vec<R>
where
    R: SequenceRecord,
    I: IntoIterator<Item = R>,
{
    last_write_wins_by(records, |record| record.id())
}

/// Same as [`last_write_wins`] for any item with a string key.
pub fn last_write_wins_by<T, I, F>(items: I, key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> &str,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut kept: Vec<T> = Vec::new();

    for item in items {
        match slots.get(key(&item)) {
            Some(&slot) => {
                log::debug!("Duplicate identifier '{}' overwrites earlier record", key(&item));
                kept[slot] = item;
            }
            None => {
                slots.insert(key(&item).to_string(), kept.len());
                kept.push(item);
            }
        }
    }

    kept
}
