//! Randomness behind glyph picks and the random fill.
//! The browser build seeds from `crypto.getRandomValues`; tests seed a fixed `StdRng`.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// One generator per garden, shared by the drag and pattern paths.
pub type SharedRng = Rc<RefCell<StdRng>>;

pub fn from_entropy() -> SharedRng {
    Rc::new(RefCell::new(StdRng::from_entropy()))
}

pub fn seeded(seed: u64) -> SharedRng {
    Rc::new(RefCell::new(StdRng::seed_from_u64(seed)))
}

/// Uniform pick; `None` only for an empty table.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, glyphs: &[&'static str]) -> Option<&'static str> {
    glyphs.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_from_empty_is_none() {
        let rng = seeded(3);
        assert_eq!(pick(&mut *rng.borrow_mut(), &[]), None);
    }

    #[test]
    fn pick_stays_in_table() {
        let rng = seeded(11);
        let table = ["a", "b", "c"];
        for _ in 0..50 {
            let got = pick(&mut *rng.borrow_mut(), &table);
            assert!(got.is_some_and(|g| table.contains(&g)));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let (a, b) = (seeded(42), seeded(42));
        let table = ["a", "b", "c", "d", "e"];
        for _ in 0..20 {
            assert_eq!(pick(&mut *a.borrow_mut(), &table), pick(&mut *b.borrow_mut(), &table));
        }
    }
}
