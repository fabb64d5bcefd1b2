//! String interner for declaration and reference names.
//!
//! Names are interned into a per-arena pool and passed around as `Atom`
//! indices. Comparisons become integer comparisons (atom_a == atom_b)
//! instead of string comparisons, and identity-keyed maps stay cheap.

use rustc_hash::FxHashMap;
use serde::Serialize;

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `Interner::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Single-threaded string interner.
///
/// Slot 0 is reserved for the empty string so `Atom::NONE` always resolves.
#[derive(Debug)]
pub struct Interner {
    map: FxHashMap<String, Atom>,
    strings: Vec<String>,
}

impl Default for Interner {
    fn default() -> Interner {
        Interner {
            map: FxHashMap::default(),
            strings: vec![String::new()],
        }
    }
}

impl Interner {
    pub fn new() -> Interner {
        Interner::default()
    }

    /// Intern a string, returning its atom. The same text always yields the
    /// same atom within one interner.
    pub fn intern(&mut self, text: &str) -> Atom {
        if text.is_empty() {
            return Atom::NONE;
        }
        if let Some(&atom) = self.map.get(text) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        self.strings.push(text.to_string());
        self.map.insert(text.to_string(), atom);
        atom
    }

    /// Look up a string without interning it.
    pub fn lookup(&self, text: &str) -> Option<Atom> {
        if text.is_empty() {
            return Some(Atom::NONE);
        }
        self.map.get(text).copied()
    }

    /// Resolve an atom back to its text.
    ///
    /// Panics if the atom did not come from this interner.
    pub fn resolve(&self, atom: Atom) -> &str {
        &self.strings[atom.0 as usize]
    }

    /// Number of interned strings, including the reserved empty slot.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.len() == 1
    }
}
