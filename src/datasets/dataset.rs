use std::collections::HashMap;

use super::{errors::SplitError, split::DatasetSplit};

/// An in-memory image dataset: a label, an ordered list of image identifiers,
/// and an identifier -> annotation mapping. The annotation payload `A` is
/// opaque to this crate.
#[derive(Debug, Clone)]
pub struct AnnotatedDataset<A> {
    id: String,
    image_ids: Vec<String>,
    annotations: HashMap<String, A>,
}

impl<A> AnnotatedDataset<A> {
    pub fn new(
        id: impl Into<String>,
        image_ids: Vec<String>,
        annotations: HashMap<String, A>,
    ) -> Self {
        Self {
            id: id.into(),
            image_ids,
            annotations,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get_image_ids(&self) -> &[String] {
        &self.image_ids
    }

    pub fn annotation(&self, image_id: &str) -> Option<&A> {
        self.annotations.get(image_id)
    }

    pub fn annotations(&self) -> &HashMap<String, A> {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.image_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_ids.is_empty()
    }
}

impl<A: Clone> AnnotatedDataset<A> {
    /// Builds a fresh dataset holding only `image_ids`, labeled with the
    /// split's id suffix. Every identifier must be present in the source
    /// annotation mapping.
    pub(crate) fn subset(
        &self,
        split: DatasetSplit,
        image_ids: Vec<String>,
    ) -> Result<Self, SplitError> {
        let mut annotations = HashMap::with_capacity(image_ids.len());
        for image_id in &image_ids {
            let ann = self
                .annotations
                .get(image_id)
                .ok_or_else(|| SplitError::MissingAnnotation(image_id.clone()))?;
            annotations.insert(image_id.clone(), ann.clone());
        }
        Ok(Self {
            id: format!("{}{}", self.id, split.id_suffix()),
            image_ids,
            annotations,
        })
    }
}

impl<A> std::ops::Index<usize> for AnnotatedDataset<A> {
    type Output = String;
    fn index(&self, index: usize) -> &Self::Output {
        &self.image_ids[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::split::DatasetSplit;

    fn dataset(n: usize) -> AnnotatedDataset<u32> {
        let image_ids: Vec<String> = (0..n).map(|i| format!("img-{i:03}")).collect();
        let annotations = image_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i as u32))
            .collect();
        AnnotatedDataset::new("siim", image_ids, annotations)
    }

    #[test]
    fn subset_keeps_only_requested_ids() {
        let ds = dataset(5);
        let ids = vec!["img-001".to_string(), "img-003".to_string()];
        let sub = ds.subset(DatasetSplit::Train, ids.clone()).unwrap();
        assert_eq!(sub.id(), "siim-TRAIN");
        assert_eq!(sub.get_image_ids(), &ids[..]);
        assert_eq!(sub.annotations().len(), 2);
        assert_eq!(sub.annotation("img-003"), Some(&3));
        assert_eq!(sub.annotation("img-000"), None);
    }

    #[test]
    fn subset_fails_on_unknown_id() {
        let ds = dataset(3);
        let err = ds
            .subset(DatasetSplit::Val, vec!["img-009".to_string()])
            .unwrap_err();
        assert!(matches!(err, SplitError::MissingAnnotation(id) if id == "img-009"));
    }

    #[test]
    fn index_returns_image_id() {
        let ds = dataset(3);
        assert_eq!(&ds[1], "img-001");
    }
}
