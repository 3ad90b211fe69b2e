use merge_deep_util::RESERVED_KEYS;

/// How an array already in the accumulator combines with an incoming value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayMerge {
    /// Keep the existing items and append incoming items that are not
    /// already deep-equal present. A non-array, non-map incoming value is
    /// appended as a single item.
    #[default]
    Union,
    /// The incoming value replaces the array outright.
    Replace,
}

/// Options for merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Array combination policy. Default is [`ArrayMerge::Union`].
    pub arrays: ArrayMerge,
    /// Keys never assigned into the result, at any depth. Default is
    /// [`RESERVED_KEYS`].
    pub reserved_keys: Vec<String>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            arrays: ArrayMerge::default(),
            reserved_keys: RESERVED_KEYS.iter().map(|key| key.to_string()).collect(),
        }
    }
}

impl MergeOptions {
    pub fn with_arrays(mut self, arrays: ArrayMerge) -> Self {
        self.arrays = arrays;
        self
    }

    /// Replaces the reserved-key list.
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_deep::MergeOptions;
    ///
    /// let options = MergeOptions::default().with_reserved_keys(["secret"]);
    /// assert!(options.is_reserved("secret"));
    /// assert!(!options.is_reserved("constructor"));
    /// ```
    pub fn with_reserved_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_reserved(&self, key: &str) -> bool {
        self.reserved_keys.iter().any(|reserved| reserved == key)
    }
}
