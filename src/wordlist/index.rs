/// Exact-word membership, the only thing the permutation search needs
/// from a dictionary.
pub trait Index {
    fn add(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;

    fn add_all<'a, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'a str> {
        items.into_iter().for_each(|x| self.add(x));
    }
}
