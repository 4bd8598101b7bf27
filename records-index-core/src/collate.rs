//! English collation for relative paths, backed by the ICU4X implementation
//! of the Unicode Collation Algorithm with the `en` tailoring.
//!
//! Default strength is tertiary: base letters first (`é` sorts with `e`),
//! accents next, case last with lower case before upper case. Strings the
//! collator considers equal fall back to code-point order so the listing is
//! a total order.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use crate::error::{IndexError, Result};

pub struct EnglishCollator {
    collator: Collator,
}

impl EnglishCollator {
    pub fn new() -> Result<Self> {
        let collator = Collator::try_new(&locale!("en").into(), CollatorOptions::new())
            .map_err(|e| IndexError::Configuration(format!("collation data unavailable: {e}")))?;
        Ok(Self { collator })
    }

    /// Compare two strings the way an English locale-aware sort would.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }
}
