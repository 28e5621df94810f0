use serde::Serialize;

use crate::ImageReference;

/// References judged equivalent to the target image, in candidate order.
///
/// Always a subset of the extracted references it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchSet(Vec<ImageReference>);

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reference: ImageReference) {
        self.0.push(reference);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, reference: &ImageReference) -> bool {
        self.0.contains(reference)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageReference> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ImageReference] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<ImageReference> {
        self.0
    }
}

impl FromIterator<ImageReference> for MatchSet {
    fn from_iter<I: IntoIterator<Item = ImageReference>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a ImageReference;
    type IntoIter = std::slice::Iter<'a, ImageReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
