/// Tab sorting: order tabs by title the way a reader expects
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use crate::tab_data::TabRecord;

/// Comparison of two tab titles
pub trait TitleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Case-insensitive comparison that orders digit runs by numeric value
///
/// "tab 2" < "Tab 10" < "tab 10b". Leading zeros are ignored, so "v01" and "V1"
/// compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalCollator;

impl TitleCollator for NaturalCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let mut left = a.chars().peekable();
        let mut right = b.chars().peekable();

        loop {
            let ordering = match (left.peek().copied(), right.peek().copied()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                    let left_digits = take_digits(&mut left);
                    let right_digits = take_digits(&mut right);
                    compare_numbers(&left_digits, &right_digits)
                }
                (Some(l), Some(r)) => {
                    left.next();
                    right.next();
                    l.to_lowercase().cmp(r.to_lowercase())
                }
            };

            if ordering != Ordering::Equal {
                return ordering;
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// The browser's `Intl.Collator` for the default locale
///
/// Configured with `sensitivity: "accent"` (case-insensitive) and
/// `numeric: true`, so it agrees with [`NaturalCollator`] on case and digit
/// runs. Outside the browser, or if the JS call fails, titles are compared with
/// [`NaturalCollator`].
pub struct LocaleCollator {
    #[cfg(target_arch = "wasm32")]
    compare: js_sys::Function,
}

impl LocaleCollator {
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        let options = js_sys::Object::new();
        if let Err(e) = set_collator_options(&options) {
            log::warn!("Using default collator options: {:?}", e);
        }

        let collator = js_sys::Intl::Collator::new(&js_sys::Array::new(), &options);
        LocaleCollator {
            compare: collator.compare(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        LocaleCollator {}
    }

    #[cfg(target_arch = "wasm32")]
    fn intl_compare(&self, a: &str, b: &str) -> Option<Ordering> {
        use wasm_bindgen::JsValue;

        let result = self
            .compare
            .call2(&JsValue::NULL, &JsValue::from_str(a), &JsValue::from_str(b))
            .ok()?
            .as_f64()?;
        result.partial_cmp(&0.0)
    }
}

#[cfg(target_arch = "wasm32")]
fn set_collator_options(options: &js_sys::Object) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsValue;

    js_sys::Reflect::set(options, &JsValue::from_str("sensitivity"), &JsValue::from_str("accent"))?;
    js_sys::Reflect::set(options, &JsValue::from_str("numeric"), &JsValue::TRUE)?;
    Ok(())
}

impl Default for LocaleCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleCollator for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(ordering) = self.intl_compare(a, b) {
                return ordering;
            }
        }

        NaturalCollator.compare(a, b)
    }
}

/// Sort tabs by title (stable: equal titles keep their relative order)
pub fn sort_tabs_by_title<C: TitleCollator>(tabs: &[TabRecord], collator: &C) -> Vec<TabRecord> {
    let mut sorted = tabs.to_vec();
    sorted.sort_by(|a, b| collator.compare(&a.title, &b.title));
    sorted
}
