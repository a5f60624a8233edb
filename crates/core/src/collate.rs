//! Human-facing string ordering for sort options.

use core::cmp::Ordering;
use std::sync::OnceLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

fn root_collator() -> &'static CollatorBorrowed<'static> {
    static COLLATOR: OnceLock<CollatorBorrowed<'static>> = OnceLock::new();
    COLLATOR.get_or_init(|| {
        Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
            .expect("root collation data is compiled in")
    })
}

/// Compare two strings the way a user expects a list of names to be ordered.
///
/// Uses the Unicode root collation: accents and case are secondary to the
/// base letters ("apple" < "éclair" < "Zebra"), and lowercase sorts before
/// uppercase when that is the only difference. Strings the collator treats as
/// equal fall back to code-point order so the result is a total order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    root_collator().compare(a, b).then_with(|| a.cmp(b))
}
