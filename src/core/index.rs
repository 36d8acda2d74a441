use std::fmt;

/// 列表中的位置，对用户显示为从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// `one_based` 为 0 时返回 None
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(|zero_based| Self { zero_based })
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::Index;

    #[test]
    fn zero_is_not_a_valid_one_based_index() {
        assert_eq!(Index::from_one_based(0), None);
    }

    #[test]
    fn one_and_zero_based_views_agree() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index, Index::from_zero_based(2));
        assert_eq!(index.to_string(), "3");
    }
}
