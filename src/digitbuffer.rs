//! Owned, growable sequence of 32-bit words
//!
//! The storage for a BigInt is chosen for the common case of small values:
//! up to `INLINE_WORDS` words are kept inline in the buffer itself, with no
//! heap allocation at all. Longer sequences move to a reference-counted heap
//! allocation which is shared between clones, making a copy of a large
//! integer O(1).
//!
//! A shared allocation is never written through. Any mutable access first
//! makes the allocation exclusive, cloning it if another buffer still refers
//! to it (copy-on-write). Reads, comparison, and hashing work on shared
//! storage directly.
//!

use crate::stdlib::{cmp, fmt, iter, mem, ops, slice};
use crate::stdlib::hash::{Hash, Hasher};
use crate::stdlib::rc::Rc;
use crate::stdlib::Vec;

use crate::INLINE_WORDS;


/// The active storage of a DigitBuffer
///
/// The variant is the only record of which mode is in use; there is no
/// separate flag to fall out of step with it.
#[derive(Clone)]
enum Storage {
    /// Short sequences, stored in place
    Inline([u32; INLINE_WORDS]),
    /// Heap allocation; its length is the buffer capacity
    Shared(Rc<[u32]>),
}

/// Little-endian words with inline small storage and copy-on-write sharing
///
/// Index 0 is the least significant word.
///
/// ```
/// use twos_bigint::DigitBuffer;
///
/// let mut a = DigitBuffer::with_len(8);
/// a[3] = 7;
///
/// let mut b = a.clone();
/// assert!(a.is_shared());
///
/// b[3] = 9;
/// assert!(!a.is_shared());
/// assert_eq!(a[3], 7);
/// assert_eq!(b[3], 9);
/// ```
#[derive(Clone)]
pub struct DigitBuffer {
    len: usize,
    storage: Storage,
}

/// Capacity to grow to when `capacity` is exhausted
pub(crate) fn grown_capacity(capacity: usize) -> usize {
    // ceil(1.5 * capacity)
    cmp::max(INLINE_WORDS, capacity + (capacity + 1) / 2)
}

impl DigitBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            len: 0,
            storage: Storage::Inline([0; INLINE_WORDS]),
        }
    }

    /// Create buffer of `n` zero words
    pub fn with_len(n: usize) -> Self {
        let storage = if n <= INLINE_WORDS {
            Storage::Inline([0; INLINE_WORDS])
        } else {
            Storage::Shared(Rc::from(vec![0u32; n]))
        };
        Self {
            len: n,
            storage: storage,
        }
    }

    /// Number of words in the buffer
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if there are no words
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of words the buffer can hold before reallocating
    pub fn capacity(&self) -> usize {
        match self.storage {
            Storage::Inline(_) => INLINE_WORDS,
            Storage::Shared(ref words) => words.len(),
        }
    }

    /// True if the words are stored inline
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline(_))
    }

    /// True if the heap allocation is referenced by another buffer
    pub fn is_shared(&self) -> bool {
        match self.storage {
            Storage::Inline(_) => false,
            Storage::Shared(ref words) => Rc::strong_count(words) > 1,
        }
    }

    /// Borrow the words as a slice
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        match self.storage {
            Storage::Inline(ref words) => &words[..self.len],
            Storage::Shared(ref words) => &words[..self.len],
        }
    }

    /// Borrow the words mutably, first making the storage exclusive
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        let len = self.len;
        &mut self.exclusive_storage()[..len]
    }

    /// Iterate over words, least significant first
    pub fn iter(&self) -> slice::Iter<'_, u32> {
        self.as_slice().iter()
    }

    /// Make sure no other buffer refers to this buffer's allocation
    ///
    /// Clones the heap allocation if it is currently shared, so a pass of
    /// many writes afterwards pays for at most one copy. The copy holds
    /// exactly `len` words.
    pub fn ensure_exclusive(&mut self) {
        if let Storage::Shared(ref mut words) = self.storage {
            if Rc::get_mut(words).is_none() {
                let copy: Rc<[u32]> = Rc::from(&words[..self.len]);
                *words = copy;
            }
        }
    }

    /// Entire storage (up to capacity) of an exclusive buffer
    fn exclusive_storage(&mut self) -> &mut [u32] {
        self.ensure_exclusive();
        match self.storage {
            Storage::Inline(ref mut words) => words,
            Storage::Shared(ref mut words) => match Rc::get_mut(words) {
                Some(words) => words,
                None => unreachable!("storage was made exclusive"),
            },
        }
    }

    /// Move contents into a new heap allocation of `capacity` words
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut words = Vec::with_capacity(capacity);
        words.extend_from_slice(self.as_slice());
        words.resize(capacity, 0);
        self.storage = Storage::Shared(Rc::from(words));
    }

    /// Make room for at least `additional` more words
    pub fn reserve(&mut self, additional: usize) {
        let needed = self.len + additional;
        let capacity = self.capacity();
        if needed > capacity {
            self.reallocate(cmp::max(grown_capacity(capacity), needed));
        }
    }

    /// Append word to the most significant end
    pub fn push(&mut self, word: u32) {
        // an unshared copy may be smaller than the allocation it came from
        self.ensure_exclusive();
        if self.len == self.capacity() {
            self.reallocate(grown_capacity(self.len));
        }
        let len = self.len;
        self.exclusive_storage()[len] = word;
        self.len += 1;
    }

    /// Remove and return the most significant word
    pub fn pop(&mut self) -> Option<u32> {
        let top = self.last()?;
        self.len -= 1;
        Some(top)
    }

    /// The most significant word
    #[inline]
    pub fn last(&self) -> Option<u32> {
        self.as_slice().last().copied()
    }

    /// Change length to `n`, filling any new words with `fill`
    pub fn resize(&mut self, n: usize, fill: u32) {
        if n <= self.len {
            self.truncate(n);
            return;
        }
        let len = self.len;
        self.ensure_exclusive();
        self.reserve(n - len);
        self.exclusive_storage()[len..n].fill(fill);
        self.len = n;
    }

    /// Shorten buffer to `n` words
    pub fn truncate(&mut self, n: usize) {
        if n < self.len {
            self.len = n;
        }
    }

    /// Remove all words
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchange contents with another buffer
    ///
    /// Constant time in every combination of inline and heap storage: heap
    /// storage trades its pointer, inline storage its (fixed-size) array.
    pub fn swap(&mut self, other: &mut DigitBuffer) {
        mem::swap(self, other);
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ops::Index<usize> for DigitBuffer {
    type Output = u32;

    #[inline]
    fn index(&self, idx: usize) -> &u32 {
        &self.as_slice()[idx]
    }
}

impl ops::IndexMut<usize> for DigitBuffer {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut u32 {
        &mut self.as_mut_slice()[idx]
    }
}

impl PartialEq for DigitBuffer {
    /// Buffers are equal if their words are equal, shared or not
    fn eq(&self, other: &DigitBuffer) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DigitBuffer {}

impl Hash for DigitBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl From<&[u32]> for DigitBuffer {
    fn from(words: &[u32]) -> Self {
        if words.len() <= INLINE_WORDS {
            let mut inline = [0; INLINE_WORDS];
            inline[..words.len()].copy_from_slice(words);
            Self {
                len: words.len(),
                storage: Storage::Inline(inline),
            }
        } else {
            Self {
                len: words.len(),
                storage: Storage::Shared(Rc::from(words)),
            }
        }
    }
}

impl From<Vec<u32>> for DigitBuffer {
    fn from(words: Vec<u32>) -> Self {
        if words.len() <= INLINE_WORDS {
            Self::from(words.as_slice())
        } else {
            Self {
                len: words.len(),
                storage: Storage::Shared(Rc::from(words)),
            }
        }
    }
}

impl iter::FromIterator<u32> for DigitBuffer {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut buffer = DigitBuffer::new();
        buffer.extend(iter);
        buffer
    }
}

impl iter::Extend<u32> for DigitBuffer {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for word in iter {
            self.push(word);
        }
    }
}

impl<'a> IntoIterator for &'a DigitBuffer {
    type Item = &'a u32;
    type IntoIter = slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;
    use paste::paste;

    include!("digitbuffer.tests.rs");
}
