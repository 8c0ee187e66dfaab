//! The "no value" sentinel that turns a successful outcome into `204`.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

/// Payload types that may stand for "succeeded, nothing to return".
///
/// A successful outcome whose payload reports `true` maps to
/// `204 No Content` instead of `200 OK`. The default method returns `false`,
/// so domain types opt in with an empty impl:
///
/// ```
/// use domain_results::{NoContent, Outcome, Status};
///
/// struct Widget {
///     id: u32,
/// }
///
/// impl NoContent for Widget {}
///
/// let outcome = Outcome::success(Widget { id: 1 });
/// let response = outcome.into_response();
/// assert_eq!(response.status(), Status::OK);
/// assert_eq!(response.payload().map(|widget| widget.id), Some(1));
/// ```
///
/// Sentinels provided here: `()`, `None`, JSON `null`, numeric zero, `'\0'`
/// and `false`. Strings and collections are never sentinels: an empty list is
/// still content.
pub trait NoContent {
    /// Whether this value means "nothing to return".
    fn is_no_content(&self) -> bool {
        false
    }
}

impl NoContent for () {
    fn is_no_content(&self) -> bool {
        true
    }
}

impl<T> NoContent for Option<T> {
    fn is_no_content(&self) -> bool {
        self.is_none()
    }
}

impl NoContent for Value {
    fn is_no_content(&self) -> bool {
        self.is_null()
    }
}

impl NoContent for bool {
    fn is_no_content(&self) -> bool {
        !*self
    }
}

macro_rules! zero_is_no_content {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl NoContent for $ty {
                fn is_no_content(&self) -> bool {
                    *self == <$ty>::default()
                }
            }
        )+
    };
}

zero_is_no_content!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char,
);

impl NoContent for f32 {
    fn is_no_content(&self) -> bool {
        *self == 0.0
    }
}

impl NoContent for f64 {
    fn is_no_content(&self) -> bool {
        *self == 0.0
    }
}

impl NoContent for String {}
impl NoContent for str {}
impl<T> NoContent for Vec<T> {}
impl<T> NoContent for [T] {}
impl<K, V, S> NoContent for HashMap<K, V, S> {}
impl<K, V> NoContent for BTreeMap<K, V> {}

impl<T: NoContent + ?Sized> NoContent for &T {
    fn is_no_content(&self) -> bool {
        (**self).is_no_content()
    }
}

impl<T: NoContent + ?Sized> NoContent for Box<T> {
    fn is_no_content(&self) -> bool {
        (**self).is_no_content()
    }
}

impl<T: NoContent + ?Sized> NoContent for Rc<T> {
    fn is_no_content(&self) -> bool {
        (**self).is_no_content()
    }
}

impl<T: NoContent + ?Sized> NoContent for Arc<T> {
    fn is_no_content(&self) -> bool {
        (**self).is_no_content()
    }
}
