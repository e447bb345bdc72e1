//! Byte frequency table for incremental window maintenance.

/// Multiset over the byte alphabet.
///
/// Maintains a count per symbol plus a dense list of the symbols currently
/// present, so that `increment`/`decrement` are O(1) and `entries` only
/// visits symbols with a non-zero count. A symbol whose count drops to zero
/// is evicted from the dense list immediately.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [usize; 256],
    // present[..distinct] holds every symbol with a non-zero count
    present: [u8; 256],
    // slots[s] is the index of `s` in `present` while s is present
    slots: [u8; 256],
    distinct: usize,
    total: usize,
}

impl FrequencyTable {
    /// Creates a new empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            present: [0; 256],
            slots: [0; 256],
            distinct: 0,
            total: 0,
        }
    }

    /// Creates a table from a byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.increment(byte);
        }
        table
    }

    /// Adds one occurrence of `symbol`.
    #[inline]
    pub fn increment(&mut self, symbol: u8) {
        let s = symbol as usize;
        if self.counts[s] == 0 {
            self.slots[s] = self.distinct as u8;
            self.present[self.distinct] = symbol;
            self.distinct += 1;
        }
        self.counts[s] += 1;
        self.total += 1;
    }

    /// Removes one occurrence of `symbol`, evicting it at zero.
    ///
    /// # Panics
    /// Panics if `symbol` is not present. The sliding engine only removes
    /// symbols it previously added, so this indicates a bug in the caller.
    #[inline]
    pub fn decrement(&mut self, symbol: u8) {
        let s = symbol as usize;
        let count = self.counts[s];
        assert!(count > 0, "decrement of absent symbol {symbol:#04x}");

        self.counts[s] = count - 1;
        self.total -= 1;

        if count == 1 {
            // swap-remove from the dense list
            let idx = self.slots[s] as usize;
            let last = self.distinct - 1;
            let moved = self.present[last];
            self.present[idx] = moved;
            self.slots[moved as usize] = idx as u8;
            self.distinct = last;
        }
    }

    /// Iterates over `(symbol, count)` for every present symbol.
    ///
    /// Order is unspecified. Never yields a zero count.
    #[inline]
    pub fn entries(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.present[..self.distinct]
            .iter()
            .map(move |&symbol| (symbol, self.counts[symbol as usize]))
    }

    /// Returns the count for a symbol (zero if absent).
    #[inline]
    pub fn count(&self, symbol: u8) -> usize {
        self.counts[symbol as usize]
    }

    /// Returns the total number of symbols in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct symbols currently present.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.distinct
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
