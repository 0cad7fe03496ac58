/// Occurrence count for every byte value present in a buffer.
///
/// Only bytes with a non-zero count are considered entries. Iteration is always in
/// ascending byte order, which is the enumeration order the tree builder relies on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// An empty table.
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count the bytes of `data` in a single pass.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        data.iter().for_each(|&el| table.counts[el as usize] += 1);
        table
    }

    /// Add `count` occurrences of `byte`.
    pub fn add(&mut self, byte: u8, count: u64) {
        self.counts[byte as usize] += count;
    }

    /// Count for `byte`, None if it never occurs.
    pub fn get(&self, byte: u8) -> Option<u64> {
        match self.counts[byte as usize] {
            0 => None,
            count => Some(count),
        }
    }

    /// Number of distinct byte values.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of all counts, ie. the length of the buffer the table describes.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// (byte, count) entries in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(byte, &count)| (byte as u8, count))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(u8, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        iter.into_iter().for_each(|(byte, count)| table.add(byte, count));
        table
    }
}

#[cfg(test)]
mod test {
    use super::FrequencyTable;

    #[test]
    fn count_test() {
        let table = FrequencyTable::from_bytes(b"aaab");
        assert_eq!(table.get(b'a'), Some(3));
        assert_eq!(table.get(b'b'), Some(1));
        assert_eq!(table.get(b'c'), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn empty_test() {
        let table = FrequencyTable::from_bytes(b"");
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn ascending_order_test() {
        let table = FrequencyTable::from_bytes(b"zyxzyz\x00");
        let entries: Vec<(u8, u64)> = table.iter().collect();
        assert_eq!(entries, vec![(0, 1), (b'x', 1), (b'y', 2), (b'z', 3)]);
    }

    #[test]
    fn from_iter_test() {
        let table: FrequencyTable = vec![(b'b', 2), (b'a', 5)].into_iter().collect();
        assert_eq!(table, FrequencyTable::from_bytes(b"aabaaba"));
    }
}
