use std::fmt;

/// One of the four rating categories carried by every [`Part`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    X,
    M,
    A,
    S,
}

impl Category {
    /// All categories, in canonical `x, m, a, s` order.
    pub const ALL: [Category; 4] = [Category::X, Category::M, Category::A, Category::S];

    /// The single-letter name used in the text format.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::X => "x",
            Category::M => "m",
            Category::A => "a",
            Category::S => "s",
        }
    }

    /// Resolve a category from its text name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Category::X),
            "m" => Some(Category::M),
            "a" => Some(Category::A),
            "s" => Some(Category::S),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A part routed through the workflows: one `u32` rating per [`Category`].
///
/// Ratings that were never set read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Part {
    ratings: [u32; 4],
}

impl Part {
    #[must_use]
    pub fn new(x: u32, m: u32, a: u32, s: u32) -> Self {
        Self {
            ratings: [x, m, a, s],
        }
    }

    /// Set a rating, builder style.
    #[must_use]
    pub fn set(mut self, category: Category, rating: u32) -> Self {
        self.insert(category, rating);
        self
    }

    /// Set a rating (mutable reference version).
    pub fn insert(&mut self, category: Category, rating: u32) {
        self.ratings[category.index()] = rating;
    }

    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        self.ratings[category.index()]
    }

    /// Sum of all four ratings.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.ratings.iter().map(|&r| u64::from(r)).sum()
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{category}={}", self.get(*category))?;
        }
        f.write_str("}")
    }
}
