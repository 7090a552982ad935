use std::{rc::Rc, sync::Arc};

/// Identity comparison used by [`Matrix::find`][super::Matrix::find].
///
/// Two handles are the same when they point at the same allocation. Values that
/// are merely equal are not the same; use [`Matrix::find_by`][super::Matrix::find_by]
/// for a structural search.
pub trait Identity {
    fn is_same(&self, other: &Self) -> bool;
}

impl<U: ?Sized> Identity for Rc<U> {
    fn is_same(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<U: ?Sized> Identity for Arc<U> {
    fn is_same(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<U: ?Sized> Identity for &U {
    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_are_not_the_same() {
        let a = Rc::new(String::from("disk"));
        let b = Rc::new(String::from("disk"));
        assert_eq!(a, b);
        assert!(!a.is_same(&b));
        assert!(a.is_same(&Rc::clone(&a)));
    }

    #[test]
    fn references_compare_by_address() {
        let cells = [1, 1];
        let (first, second) = (&cells[0], &cells[1]);
        assert!(first.is_same(&&cells[0]));
        assert!(!first.is_same(&second));
    }

    #[test]
    fn arc_handles() {
        let a: Arc<str> = Arc::from("white");
        assert!(a.is_same(&Arc::clone(&a)));
        assert!(!a.is_same(&Arc::from("white")));
    }
}
