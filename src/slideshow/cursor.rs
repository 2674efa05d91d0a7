use crate::models::MediaItem;

/// Ordered, fixed item list plus the current position in it.
#[derive(Debug, Clone, Default)]
pub struct PlaylistCursor {
    items: Vec<MediaItem>,
    index: usize,
}

impl PlaylistCursor {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self { items, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `None` while the list is empty.
    pub fn index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.items.get(self.index)
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn next_index(&self) -> Option<usize> {
        let len = self.len();
        (len > 0).then(|| (self.index + 1) % len)
    }

    pub fn prev_index(&self) -> Option<usize> {
        let len = self.len();
        (len > 0).then(|| (self.index + len - 1) % len)
    }

    /// Map a requested position onto the list: negative wraps to the last
    /// item, overflow wraps to the first.
    pub fn resolve(&self, requested: isize) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        if requested < 0 {
            Some(len - 1)
        } else if requested as usize >= len {
            Some(0)
        } else {
            Some(requested as usize)
        }
    }

    pub fn set(&mut self, index: usize) {
        if index < self.len() {
            self.index = index;
        }
    }

    /// `3/12` style position label.
    pub fn counter_label(&self) -> String {
        match self.index() {
            Some(index) => format!("{}/{}", index + 1, self.len()),
            None => "0/0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(len: usize) -> PlaylistCursor {
        PlaylistCursor::new(
            (0..len)
                .map(|i| MediaItem::new(format!("/{i}.jpg"), "image/jpeg", format!("{i}.jpg")))
                .collect(),
        )
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut c = cursor(3);
        assert_eq!(c.prev_index(), Some(2));
        c.set(2);
        assert_eq!(c.next_index(), Some(0));
    }

    #[test]
    fn next_then_prev_returns_to_start() {
        for len in 1..6 {
            let mut c = cursor(len);
            for start in 0..len {
                c.set(start);
                let next = c.next_index().unwrap();
                c.set(next);
                assert_eq!(c.prev_index(), Some(start));

                c.set(start);
                let prev = c.prev_index().unwrap();
                c.set(prev);
                assert_eq!(c.next_index(), Some(start));
            }
        }
    }

    #[test]
    fn resolve_clamps_out_of_range_requests() {
        let c = cursor(4);
        assert_eq!(c.resolve(-1), Some(3));
        assert_eq!(c.resolve(-9), Some(3));
        assert_eq!(c.resolve(4), Some(0));
        assert_eq!(c.resolve(2), Some(2));
    }

    #[test]
    fn empty_list_has_no_position() {
        let c = cursor(0);
        assert_eq!(c.index(), None);
        assert_eq!(c.next_index(), None);
        assert_eq!(c.resolve(0), None);
        assert_eq!(c.counter_label(), "0/0");
    }

    #[test]
    fn counter_is_one_based() {
        let mut c = cursor(5);
        c.set(4);
        assert_eq!(c.counter_label(), "5/5");
    }
}
