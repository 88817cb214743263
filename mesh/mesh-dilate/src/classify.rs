//! Good/bad node classification.

/// Whether a node's value is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    /// Trusted value; used as a dilation source and passed through.
    Good,
    /// Missing or invalid value; replaced by the dilation.
    Bad,
}

/// Per-node classification for one column.
///
/// # Example
///
/// ```
/// use mesh_dilate::ClassificationMask;
///
/// // Without an ROI, exact zeros are bad
/// let mask = ClassificationMask::from_values(&[0.0, 1.5, -0.0, 2.0]);
/// assert_eq!(mask.bad_count(), 2);
///
/// // With an ROI, strictly positive ROI values are bad, whatever the data says
/// let mask = ClassificationMask::from_roi(&[0.0, 1.0, -1.0, 0.5]);
/// assert!(mask.is_good(0));
/// assert!(!mask.is_good(1));
/// assert!(mask.is_good(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationMask {
    classes: Vec<NodeClass>,
}

impl ClassificationMask {
    /// Classify by value: a node is bad iff its value equals `0.0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_values(values: &[f64]) -> Self {
        Self::from_predicate(values, |v| v == 0.0)
    }

    /// Classify by region of interest: a node is bad iff its ROI value is
    /// strictly greater than `0.0`.
    #[must_use]
    pub fn from_roi(roi: &[f64]) -> Self {
        Self::from_predicate(roi, |v| v > 0.0)
    }

    fn from_predicate(values: &[f64], is_bad: impl Fn(f64) -> bool) -> Self {
        let classes = values
            .iter()
            .map(|&v| if is_bad(v) { NodeClass::Bad } else { NodeClass::Good })
            .collect();
        Self { classes }
    }

    /// Number of classified nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the mask covers no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[inline]
    #[must_use]
    pub fn class(&self, node: usize) -> NodeClass {
        self.classes[node]
    }

    /// Whether a node is good.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[inline]
    #[must_use]
    pub fn is_good(&self, node: usize) -> bool {
        self.class(node) == NodeClass::Good
    }

    /// Number of bad nodes.
    #[must_use]
    pub fn bad_count(&self) -> usize {
        self.classes.iter().filter(|&&c| c == NodeClass::Bad).count()
    }
}
