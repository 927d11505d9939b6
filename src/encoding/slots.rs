use crate::Feature;

/// Which end of the region the placeholders go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Items first, placeholders after.
    Left,
    /// Placeholders first, items last.
    Right,
}

/// A fixed-capacity region of equally wide slots.
///
/// Packing always yields exactly `capacity * width` values, so whatever
/// follows the region in an observation sits at a fixed offset. Overflow and
/// width mismatches are programming errors and panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slots {
    capacity: usize,
    width: usize,
    align: Align,
}

impl Slots {
    pub const fn left(capacity: usize, width: usize) -> Self {
        Self { capacity, width, align: Align::Left }
    }
    pub const fn right(capacity: usize, width: usize) -> Self {
        Self { capacity, width, align: Align::Right }
    }
    pub const fn len(&self) -> usize {
        self.capacity * self.width
    }
    pub fn pack<I>(&self, items: I) -> Vec<Feature>
    where
        I: IntoIterator,
        I::Item: AsRef<[Feature]>,
    {
        let mut out = Vec::with_capacity(self.len());
        self.fill(&mut out, items);
        out
    }
    /// Appends the packed region to `out`.
    pub fn fill<I>(&self, out: &mut Vec<Feature>, items: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[Feature]>,
    {
        let mut packed = Vec::with_capacity(self.len());
        for item in items {
            let item = item.as_ref();
            assert!(item.len() == self.width, "slot width {} != {}", item.len(), self.width);
            packed.extend_from_slice(item);
        }
        assert!(packed.len() <= self.len(), "{} items over capacity {}", packed.len() / self.width, self.capacity);
        let padding = std::iter::repeat_n(0., self.len() - packed.len());
        match self.align {
            Align::Left => {
                out.extend(packed);
                out.extend(padding);
            }
            Align::Right => {
                out.extend(padding);
                out.extend(packed);
            }
        }
    }
}
