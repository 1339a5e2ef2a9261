//! Fixed, ordered category registry.
//!
//! Each token is resolved once to a dense ordinal. Everything downstream
//! (sample lists, count columns, glyph order) is indexed by that ordinal.

use std::hash::Hash;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Categories<T> {
    tokens: Vec<T>,
    lookup: FxHashMap<T, usize>,
}

impl<T> Categories<T>
where
    T: Copy + Eq + Hash,
{
    /// Duplicates collapse onto the ordinal of their first occurrence.
    pub fn new(tokens: impl IntoIterator<Item = T>) -> Self {
        let mut ordered = Vec::new();
        let mut lookup = FxHashMap::default();
        for token in tokens {
            lookup.entry(token).or_insert_with(|| {
                ordered.push(token);
                ordered.len() - 1
            });
        }
        Self {
            tokens: ordered,
            lookup,
        }
    }

    #[inline]
    #[must_use]
    pub fn ordinal(&self, token: T) -> Option<usize> {
        self.lookup.get(&token).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in registration order.
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// Membership mask over ordinals; unknown tokens are skipped and
    /// repeated tokens count once.
    #[must_use]
    pub fn mask(&self, tokens: &[T]) -> Vec<bool> {
        let mut mask = vec![false; self.len()];
        for &t in tokens {
            if let Some(i) = self.ordinal(t) {
                mask[i] = true;
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_registration_order() {
        let cats = Categories::new(['#', '+', '-', '.']);
        assert_eq!(cats.ordinal('#'), Some(0));
        assert_eq!(cats.ordinal('.'), Some(3));
        assert_eq!(cats.ordinal('x'), None);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let cats = Categories::new(['a', 'b', 'a', 'c', 'b']);
        assert_eq!(cats.tokens(), &['a', 'b', 'c']);
        assert_eq!(cats.ordinal('c'), Some(2));
    }

    #[test]
    fn mask_ignores_unknown_and_repeats() {
        let cats = Categories::new(['a', 'b', 'c']);
        assert_eq!(cats.mask(&['c', 'z', 'c']), vec![false, false, true]);
    }
}
