//! Rename marks
//!
//! A [`Mark`] remembers where the schema-derived part of a type name starts
//! and rewrites everything past it to [`COMMON`] when the named object is
//! shared by deduplication. Marks of nested properties follow renames of
//! their ancestors through [`Mark::update`].

/// Replacement token for deduplicated name segments
pub const COMMON: &str = "common";

/// Position of the renamable segment inside a type name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mark {
    used: bool,
    begin: usize,
    end: usize,
}

impl Mark {
    /// Create unused mark starting after `prefix_len` bytes
    #[inline]
    #[must_use]
    pub const fn new(prefix_len: usize) -> Self {
        Self {
            used: false,
            begin: prefix_len,
            end: prefix_len,
        }
    }

    /// Start of the renamable segment
    #[inline]
    #[must_use]
    pub const fn begin(&self) -> usize {
        self.begin
    }

    /// End of the segment replaced by the first rename
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Whether the mark has renamed anything yet
    #[inline]
    #[must_use]
    pub const fn is_used(&self) -> bool {
        self.used
    }

    /// Rewrite `name` past `begin` to the common token
    ///
    /// The first rename replaces the whole tail and records its end; later
    /// renames replace `begin..end` and keep the rest of the name. Returns
    /// false, leaving `name` alone, when the segment already reads `common`.
    pub fn change(&mut self, name: &mut String) -> bool {
        let Some(tail) = name.get(self.begin..) else {
            return false;
        };
        if tail.starts_with(COMMON) {
            return false;
        }

        let mut result = String::with_capacity(name.len() + COMMON.len());
        result.push_str(&name[..self.begin]);
        result.push_str(COMMON);
        if self.used {
            result.push_str(name.get(self.end..).unwrap_or_default());
        } else {
            self.used = true;
            self.end = name.len();
        }
        *name = result;
        true
    }

    /// Shift bounds by the length change a rename through `other` made
    pub fn update(&mut self, other: &Mark) {
        let difference = other.length_difference();
        self.begin = self.begin.saturating_add_signed(difference);
        self.end = self.end.saturating_add_signed(difference);
    }

    /// Signed length change caused by this mark's rename
    #[must_use]
    pub fn length_difference(&self) -> isize {
        if self.used {
            COMMON.len() as isize - (self.end as isize - self.begin as isize)
        } else {
            0
        }
    }
}
