use crate::outcome::core::Outcome;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.ok_value() }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> Outcome<T, E> {
    /// Iterates over the success payload: one item on `Ok`, none on `Err`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_success().map(|success| success.value()) }
    }

    /// Iterates over the failure payload: one item on `Err`, none on `Ok`.
    pub fn iter_errors(&self) -> impl Iterator<Item = &E> {
        self.as_failure().map(|failure| failure.error()).into_iter()
    }
}
