/// Every ordered selection of `k` items out of a slice, treating positions
/// as distinct even when the items are equal.
///
/// Selections come out in lexicographic order of their position indices:
/// for `abc` and `k = 2` that is `ab, ac, ba, bc, ca, cb`.
pub struct Arrangements<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    used: Vec<bool>,
    started: bool,
    done: bool,
}

impl<'a, T: Clone> Arrangements<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        let n = items.len();
        let mut used = vec![false; n];
        let done = k > n;
        if !done {
            used[..k].iter_mut().for_each(|u| *u = true);
        }
        Arrangements {
            items,
            indices: (0..k.min(n)).collect(),
            used,
            started: false,
            done,
        }
    }

    fn current(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.items[i].clone()).collect()
    }

    /// Step to the next selection, freeing slots from the right until one
    /// can be bumped to a larger unused position, then refilling the tail
    /// with the smallest unused positions.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();
        for pos in (0..k).rev() {
            let cur = self.indices[pos];
            self.used[cur] = false;
            if let Some(next) = (cur + 1..n).find(|&j| !self.used[j]) {
                self.indices[pos] = next;
                self.used[next] = true;
                let mut j = 0;
                for p in pos + 1..k {
                    while self.used[j] {
                        j += 1;
                    }
                    self.indices[p] = j;
                    self.used[j] = true;
                }
                return true;
            }
        }
        false
    }
}

impl<'a, T: Clone> Iterator for Arrangements<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        if self.advance() {
            Some(self.current())
        } else {
            self.done = true;
            None
        }
    }
}
