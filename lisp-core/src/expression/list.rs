use super::{expression::Expression, symbol::Symbol};

#[derive(Debug, Clone, PartialEq)]
pub enum ListError {
    /// The chain of pairs ended in something other than the empty list.
    Improper { tail: Expression },
    NotASymbol { got: Expression },
}

/// Walks the heads of a pair chain. Stops at the first non-pair;
/// [`ListIter::rest`] tells whether that was the empty list.
#[derive(Debug, Clone)]
pub struct ListIter<'a> {
    current: &'a Expression,
}

impl<'a> ListIter<'a> {
    pub fn rest(&self) -> &'a Expression {
        self.current
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a Expression;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            Expression::Pair(pair) => {
                self.current = &pair.tail;
                Some(&pair.head)
            },
            _ => None,
        }
    }
}

impl Expression {
    pub fn list(items: impl IntoIterator<Item = Expression>) -> Self {
        Self::improper_list(items, Expression::Nil)
    }

    pub fn improper_list(items: impl IntoIterator<Item = Expression>, tail: Expression) -> Self {
        items.into_iter()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .fold(tail, |tail, head| Expression::cons(head, tail))
    }

    pub fn iter(&self) -> ListIter<'_> {
        ListIter { current: self }
    }

    pub fn is_list(&self) -> bool {
        let mut iter = self.iter();
        iter.by_ref().for_each(drop);

        iter.rest().is_null()
    }

    pub fn to_vec(&self) -> Result<Vec<Expression>, ListError> {
        let mut iter = self.iter();
        let items = iter.by_ref().cloned().collect();

        match iter.rest() {
            Expression::Nil => Ok(items),
            tail => Err(ListError::Improper { tail: tail.clone() }),
        }
    }

    pub fn to_symbols(&self) -> Result<Vec<Symbol>, ListError> {
        self.to_vec()?
            .into_iter()
            .map(|item| match item {
                Expression::Symbol { name } => Ok(name),
                got => Err(ListError::NotASymbol { got }),
            })
            .collect()
    }
}
